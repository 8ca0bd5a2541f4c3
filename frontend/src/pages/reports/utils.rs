use crate::{
    data::{
        repository::MockRepository,
        types::{Department, Employee, LeaveRequest, Money, PayrollRecord, RequestStatus},
    },
    error::AppError,
    utils::{
        download::build_csv,
        format::{average_half_up, percent, total_amount},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Department,
    Leave,
    Payroll,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Department, ReportKind::Leave, ReportKind::Payroll];

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Department => "Department Report",
            ReportKind::Leave => "Leave Summary",
            ReportKind::Payroll => "Payroll Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Department => "Employee distribution by department",
            ReportKind::Leave => "Leave requests and balances",
            ReportKind::Payroll => "Salary and compensation analysis",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::Department => "department",
            ReportKind::Leave => "leave",
            ReportKind::Payroll => "payroll",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentStat {
    pub name: String,
    pub employees: usize,
    pub total_salary: Money,
}

impl DepartmentStat {
    /// Average salary rounded half up; zero for an empty department.
    pub fn average_salary(&self) -> Money {
        average_half_up(self.total_salary, self.employees)
    }
}

/// Headcount per department by matching employee department names.
pub fn department_stats(
    departments: &[Department],
    employees: &[Employee],
) -> Result<Vec<DepartmentStat>, AppError> {
    departments
        .iter()
        .map(|dept| {
            let members: Vec<&Employee> = employees
                .iter()
                .filter(|e| e.department == dept.name)
                .collect();
            Ok(DepartmentStat {
                name: dept.name.clone(),
                employees: members.len(),
                total_salary: total_amount(members.iter().map(|e| e.salary))?,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl LeaveStats {
    pub fn share(&self, count: usize) -> f64 {
        percent(count, self.total)
    }
}

pub fn leave_stats(requests: &[LeaveRequest]) -> LeaveStats {
    let count = |status: RequestStatus| requests.iter().filter(|r| r.status == status).count();
    LeaveStats {
        total: requests.len(),
        approved: count(RequestStatus::Approved),
        pending: count(RequestStatus::Pending),
        rejected: count(RequestStatus::Rejected),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalaryStats {
    pub total_payroll: Money,
    pub average_salary: Money,
    pub highest_paid: Money,
    pub lowest_paid: Money,
}

pub fn salary_stats(
    payroll: &[PayrollRecord],
    employees: &[Employee],
) -> Result<SalaryStats, AppError> {
    let salaries = employees.iter().map(|e| e.salary);
    let total_salary = total_amount(salaries.clone())?;
    Ok(SalaryStats {
        total_payroll: total_amount(payroll.iter().map(|r| r.net_pay))?,
        average_salary: average_half_up(total_salary, employees.len()),
        highest_paid: salaries.clone().max().unwrap_or(0),
        lowest_paid: salaries.min().unwrap_or(0),
    })
}

/// CSV export of the selected report.
pub fn report_csv(kind: ReportKind, repo: &MockRepository) -> Result<String, AppError> {
    match kind {
        ReportKind::Department => build_csv(
            &["Department", "Employees", "Total Salary", "Average Salary"],
            department_stats(&repo.departments(), &repo.employees())?
                .into_iter()
                .map(|stat| {
                    vec![
                        stat.name.clone(),
                        stat.employees.to_string(),
                        stat.total_salary.to_string(),
                        stat.average_salary().to_string(),
                    ]
                }),
        ),
        ReportKind::Leave => build_csv(
            &["Employee", "Type", "Start Date", "End Date", "Days", "Status"],
            repo.leave_requests().into_iter().map(|r| {
                vec![
                    r.employee_name,
                    r.leave_type.as_str().to_string(),
                    r.start_date.to_string(),
                    r.end_date.to_string(),
                    r.days.to_string(),
                    r.status.as_str().to_string(),
                ]
            }),
        ),
        ReportKind::Payroll => crate::pages::payroll::utils::payroll_csv(&repo.payroll_records()),
    }
}

pub fn report_filename(kind: ReportKind) -> String {
    format!("{}_report.csv", kind.slug())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    #[test]
    fn department_stats_follow_names() {
        let stats = department_stats(&seed::departments(), &seed::employees()).unwrap();
        assert_eq!(stats.len(), 5);
        let it = stats.iter().find(|s| s.name == "IT").unwrap();
        assert!(it.employees >= 1);
        assert!(it.total_salary >= 75_000);
        let total: usize = stats.iter().map(|s| s.employees).sum();
        assert!(total <= 15);
    }

    #[test]
    fn empty_department_averages_zero() {
        let stat = DepartmentStat {
            name: "Legal".into(),
            employees: 0,
            total_salary: 0,
        };
        assert_eq!(stat.average_salary(), 0);
    }

    #[test]
    fn leave_stats_from_fixtures() {
        let stats = leave_stats(&seed::leave_requests());
        assert_eq!(
            stats,
            LeaveStats {
                total: 3,
                approved: 2,
                pending: 1,
                rejected: 0
            }
        );
        assert_eq!(LeaveStats::default().share(0), 0.0);
    }

    #[test]
    fn salary_extremes() {
        let employees = seed::employees();
        let stats = salary_stats(&seed::payroll_records(), &employees).unwrap();
        assert_eq!(stats.total_payroll, 11_317);
        assert_eq!(stats.highest_paid, employees.iter().map(|e| e.salary).max().unwrap());
        assert!(stats.lowest_paid <= stats.average_salary);
        assert_eq!(salary_stats(&[], &[]).unwrap(), SalaryStats::default());
    }

    #[test]
    fn overflowing_salaries_are_reported() {
        let mut employees = seed::employees();
        for employee in employees.iter_mut().filter(|e| e.department == "IT") {
            employee.salary = Money::MAX / 2 + 1;
        }
        let err = salary_stats(&[], &employees).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(department_stats(&seed::departments(), &employees).is_err());
    }

    #[test]
    fn every_report_exports() {
        let repo = MockRepository::new();
        for kind in ReportKind::ALL {
            let csv = report_csv(kind, &repo).unwrap();
            assert!(csv.lines().count() > 1, "{:?}", kind);
        }
        assert_eq!(report_filename(ReportKind::Leave), "leave_report.csv");
    }
}
