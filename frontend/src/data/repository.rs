use super::{
    seed,
    types::{Department, Employee, LeaveRequest, PayrollRecord, Position, WeeklyRequest},
};

/// Hands each page its own copy of the fixture collections.
///
/// Pages pull it from context the same way they would pull an API client, so a
/// test can provide a repository with different fixtures.
#[derive(Clone, Debug)]
pub struct MockRepository {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    positions: Vec<Position>,
    leave_requests: Vec<LeaveRequest>,
    weekly_requests: Vec<WeeklyRequest>,
    payroll_records: Vec<PayrollRecord>,
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            employees: seed::employees(),
            departments: seed::departments(),
            positions: seed::positions(),
            leave_requests: seed::leave_requests(),
            weekly_requests: seed::weekly_requests(),
            payroll_records: seed::payroll_records(),
        }
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn with_leave_requests(mut self, requests: Vec<LeaveRequest>) -> Self {
        self.leave_requests = requests;
        self
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    pub fn departments(&self) -> Vec<Department> {
        self.departments.clone()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.positions.clone()
    }

    pub fn leave_requests(&self) -> Vec<LeaveRequest> {
        self.leave_requests.clone()
    }

    pub fn weekly_requests(&self) -> Vec<WeeklyRequest> {
        self.weekly_requests.clone()
    }

    pub fn payroll_records(&self) -> Vec<PayrollRecord> {
        self.payroll_records.clone()
    }

    /// Employee record behind a login email; identities and employees share no key.
    pub fn employee_by_email(&self, email: &str) -> Option<Employee> {
        self.employees.iter().find(|e| e.email == email).cloned()
    }
}

pub fn use_repository() -> MockRepository {
    leptos::use_context::<MockRepository>().unwrap_or_default()
}
