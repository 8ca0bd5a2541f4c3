//! Fixture records every page starts from. Each call returns a fresh copy, so
//! edits made on one page view never leak into the next.

use chrono::NaiveDate;

use super::types::{
    Department, Employee, EmployeeStatus, Identity, LeaveRequest, LeaveType, PayrollRecord,
    Position, PositionLevel, RequestStatus, Role, WeeklyRequest,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn demo_identities() -> Vec<Identity> {
    vec![
        Identity::new("1", "John Smith", "admin@company.com", Role::Admin, None),
        Identity::new(
            "2",
            "Sarah Johnson",
            "sarah.johnson@company.com",
            Role::Employee,
            Some("emp_001".into()),
        ),
        Identity::new(
            "3",
            "Mike Davis",
            "mike.davis@company.com",
            Role::Employee,
            Some("emp_002".into()),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    email: &str,
    position: &str,
    department: &str,
    salary: i64,
    join_date: NaiveDate,
    leave_balance: u32,
) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        position: position.into(),
        department: department.into(),
        salary,
        hours: 160,
        join_date,
        status: EmployeeStatus::Active,
        leave_balance,
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee(
            "emp_001",
            "Sarah Johnson",
            "sarah.johnson@company.com",
            "Software Engineer",
            "IT",
            75000,
            date(2023, 1, 15),
            15,
        ),
        employee(
            "emp_002",
            "Mike Davis",
            "mike.davis@company.com",
            "Marketing Manager",
            "Marketing",
            68000,
            date(2022, 8, 20),
            12,
        ),
        employee(
            "emp_003",
            "Emily Chen",
            "emily.chen@company.com",
            "HR Specialist",
            "HR",
            55000,
            date(2023, 3, 10),
            18,
        ),
        employee(
            "emp_004",
            "David Wilson",
            "david.wilson@company.com",
            "Financial Analyst",
            "Finance",
            62000,
            date(2022, 11, 5),
            10,
        ),
        employee(
            "emp_005",
            "Lisa Rodriguez",
            "lisa.rodriguez@company.com",
            "UX Designer",
            "IT",
            70000,
            date(2023, 2, 28),
            14,
        ),
        employee(
            "emp_006",
            "James Brown",
            "james.brown@company.com",
            "Operations Manager",
            "Logistics",
            72000,
            date(2022, 6, 15),
            8,
        ),
        employee(
            "emp_007",
            "Anna Taylor",
            "anna.taylor@company.com",
            "Content Writer",
            "Marketing",
            48000,
            date(2023, 4, 12),
            20,
        ),
        employee(
            "emp_008",
            "Robert Miller",
            "robert.miller@company.com",
            "DevOps Engineer",
            "IT",
            80000,
            date(2022, 9, 30),
            11,
        ),
        employee(
            "emp_009",
            "Jennifer White",
            "jennifer.white@company.com",
            "Accountant",
            "Finance",
            58000,
            date(2023, 1, 8),
            16,
        ),
        employee(
            "emp_010",
            "Kevin Garcia",
            "kevin.garcia@company.com",
            "Sales Representative",
            "Marketing",
            52000,
            date(2022, 12, 20),
            13,
        ),
        employee(
            "emp_011",
            "Maria Martinez",
            "maria.martinez@company.com",
            "Project Manager",
            "IT",
            78000,
            date(2022, 5, 18),
            9,
        ),
        employee(
            "emp_012",
            "Thomas Anderson",
            "thomas.anderson@company.com",
            "Warehouse Supervisor",
            "Logistics",
            55000,
            date(2023, 3, 25),
            17,
        ),
        employee(
            "emp_013",
            "Amanda Clark",
            "amanda.clark@company.com",
            "Training Coordinator",
            "HR",
            50000,
            date(2022, 10, 14),
            19,
        ),
        employee(
            "emp_014",
            "Christopher Lee",
            "christopher.lee@company.com",
            "Quality Analyst",
            "IT",
            65000,
            date(2023, 2, 3),
            12,
        ),
        employee(
            "emp_015",
            "Nicole Turner",
            "nicole.turner@company.com",
            "Customer Service Manager",
            "Marketing",
            60000,
            date(2022, 7, 22),
            15,
        ),
    ]
}

pub fn departments() -> Vec<Department> {
    [
        ("dept_001", "IT", "Maria Martinez", 5),
        ("dept_002", "Marketing", "Mike Davis", 4),
        ("dept_003", "HR", "Emily Chen", 2),
        ("dept_004", "Finance", "David Wilson", 2),
        ("dept_005", "Logistics", "James Brown", 2),
    ]
    .into_iter()
    .map(|(id, name, manager, employee_count)| Department {
        id: id.into(),
        name: name.into(),
        manager: manager.into(),
        employee_count,
    })
    .collect()
}

pub fn positions() -> Vec<Position> {
    use PositionLevel::*;
    [
        ("pos_001", "Software Engineer", "IT", Mid),
        ("pos_002", "DevOps Engineer", "IT", Senior),
        ("pos_003", "UX Designer", "IT", Mid),
        ("pos_004", "Project Manager", "IT", Senior),
        ("pos_005", "Quality Analyst", "IT", Junior),
        ("pos_006", "Marketing Manager", "Marketing", Senior),
        ("pos_007", "Content Writer", "Marketing", Junior),
        ("pos_008", "Sales Representative", "Marketing", Mid),
        ("pos_009", "Customer Service Manager", "Marketing", Senior),
        ("pos_010", "HR Specialist", "HR", Mid),
        ("pos_011", "Training Coordinator", "HR", Junior),
        ("pos_012", "Financial Analyst", "Finance", Mid),
        ("pos_013", "Accountant", "Finance", Junior),
        ("pos_014", "Operations Manager", "Logistics", Senior),
        ("pos_015", "Warehouse Supervisor", "Logistics", Mid),
    ]
    .into_iter()
    .map(|(id, title, department, level)| Position {
        id: id.into(),
        title: title.into(),
        department: department.into(),
        level,
    })
    .collect()
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "leave_001".into(),
            employee_id: "emp_001".into(),
            employee_name: "Sarah Johnson".into(),
            leave_type: LeaveType::Vacation,
            start_date: date(2024, 2, 15),
            end_date: date(2024, 2, 19),
            days: 5,
            reason: "Family vacation".into(),
            status: RequestStatus::Approved,
            submitted_at: date(2024, 1, 20),
        },
        LeaveRequest {
            id: "leave_002".into(),
            employee_id: "emp_003".into(),
            employee_name: "Emily Chen".into(),
            leave_type: LeaveType::Sick,
            start_date: date(2024, 2, 10),
            end_date: date(2024, 2, 12),
            days: 3,
            reason: "Flu symptoms".into(),
            status: RequestStatus::Pending,
            submitted_at: date(2024, 2, 9),
        },
        LeaveRequest {
            id: "leave_003".into(),
            employee_id: "emp_005".into(),
            employee_name: "Lisa Rodriguez".into(),
            leave_type: LeaveType::Personal,
            start_date: date(2024, 2, 20),
            end_date: date(2024, 2, 20),
            days: 1,
            reason: "Personal appointment".into(),
            status: RequestStatus::Approved,
            submitted_at: date(2024, 2, 5),
        },
    ]
}

pub fn weekly_requests() -> Vec<WeeklyRequest> {
    vec![
        WeeklyRequest {
            id: "weekly_001".into(),
            employee_id: "emp_001".into(),
            employee_name: "Sarah Johnson".into(),
            week: "2024-W06".into(),
            purpose: "Sprint planning and development tasks".into(),
            email: "sarah.johnson@company.com".into(),
            submitted_at: date(2024, 2, 9),
            status: RequestStatus::Approved,
        },
        WeeklyRequest {
            id: "weekly_002".into(),
            employee_id: "emp_002".into(),
            employee_name: "Mike Davis".into(),
            week: "2024-W06".into(),
            purpose: "Marketing campaign review and strategy".into(),
            email: "mike.davis@company.com".into(),
            submitted_at: date(2024, 2, 8),
            status: RequestStatus::Pending,
        },
    ]
}

pub fn payroll_records() -> Vec<PayrollRecord> {
    vec![
        PayrollRecord {
            id: "pay_001".into(),
            employee_id: "emp_001".into(),
            employee_name: "Sarah Johnson".into(),
            base_salary: 6250,
            overtime: 500,
            bonus: 0,
            deductions: 1200,
            net_pay: 5550,
            pay_period: "2024-01".into(),
        },
        PayrollRecord {
            id: "pay_002".into(),
            employee_id: "emp_002".into(),
            employee_name: "Mike Davis".into(),
            base_salary: 5667,
            overtime: 200,
            bonus: 1000,
            deductions: 1100,
            net_pay: 5767,
            pay_period: "2024-01".into(),
        },
    ]
}
