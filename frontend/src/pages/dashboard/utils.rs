use crate::data::types::{Department, Employee, LeaveRequest, Money, RequestStatus};
use crate::utils::format::{monthly_from_annual, percent, total_amount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStats {
    pub total_employees: usize,
    pub total_departments: usize,
    pub pending_leaves: usize,
    /// `None` when the annual total is out of range.
    pub monthly_payroll: Option<Money>,
}

pub fn admin_stats(
    employees: &[Employee],
    departments: &[Department],
    leave_requests: &[LeaveRequest],
) -> AdminStats {
    AdminStats {
        total_employees: employees.len(),
        total_departments: departments.len(),
        pending_leaves: leave_requests
            .iter()
            .filter(|request| request.status == RequestStatus::Pending)
            .count(),
        monthly_payroll: total_amount(employees.iter().map(|e| e.salary))
            .ok()
            .map(monthly_from_annual),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentBar {
    pub name: String,
    pub count: u32,
    /// Width relative to the largest department.
    pub width: f64,
}

pub fn department_bars(departments: &[Department]) -> Vec<DepartmentBar> {
    let max = departments
        .iter()
        .map(|d| d.employee_count)
        .max()
        .unwrap_or(0);
    departments
        .iter()
        .map(|d| DepartmentBar {
            name: d.name.clone(),
            count: d.employee_count,
            width: percent(d.employee_count as usize, max as usize),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeStats {
    pub hours: u32,
    pub leave_balance: u32,
    pub estimated_pay: Money,
}

pub fn employee_stats(employee: Option<&Employee>) -> EmployeeStats {
    employee
        .map(|e| EmployeeStats {
            hours: e.hours,
            leave_balance: e.leave_balance,
            estimated_pay: monthly_from_annual(e.salary),
        })
        .unwrap_or_default()
}

pub fn recent_leave_requests(
    requests: &[LeaveRequest],
    employee_id: &str,
    limit: usize,
) -> Vec<LeaveRequest> {
    requests
        .iter()
        .filter(|request| request.employee_id == employee_id)
        .take(limit)
        .cloned()
        .collect()
}
