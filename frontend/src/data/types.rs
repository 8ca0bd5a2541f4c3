use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Whole currency units. Payroll arithmetic stays in integers so net pay never drifts.
pub type Money = i64;

/// Largest magnitude any single amount may take.
pub const MAX_AMOUNT: Money = 1_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// The authenticated principal. `role` has no setter once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        employee_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            employee_id,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: Money,
    pub hours: u32,
    pub join_date: NaiveDate,
    pub status: EmployeeStatus,
    pub leave_balance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub manager: String,
    pub employee_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl PositionLevel {
    pub const ALL: [PositionLevel; 4] = [
        PositionLevel::Junior,
        PositionLevel::Mid,
        PositionLevel::Senior,
        PositionLevel::Lead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionLevel::Junior => "Junior",
            PositionLevel::Mid => "Mid",
            PositionLevel::Senior => "Senior",
            PositionLevel::Lead => "Lead",
        }
    }
}

impl FromStr for PositionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PositionLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown level: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub title: String,
    pub department: String,
    pub level: PositionLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Sick,
    #[default]
    Vacation,
    Personal,
    Emergency,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Vacation,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Vacation => "vacation",
            LeaveType::Personal => "personal",
            LeaveType::Emergency => "emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick Leave",
            LeaveType::Vacation => "Vacation",
            LeaveType::Personal => "Personal",
            LeaveType::Emergency => "Emergency",
        }
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaveType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown leave type: {}", s))
    }
}

/// Review lifecycle shared by leave and weekly requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub reason: String,
    pub status: RequestStatus,
    pub submitted_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub week: String,
    pub purpose: String,
    pub email: String,
    pub submitted_at: NaiveDate,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayrollField {
    BaseSalary,
    Overtime,
    Bonus,
    Deductions,
}

impl PayrollField {
    pub const ALL: [PayrollField; 4] = [
        PayrollField::BaseSalary,
        PayrollField::Overtime,
        PayrollField::Bonus,
        PayrollField::Deductions,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PayrollField::BaseSalary => "baseSalary",
            PayrollField::Overtime => "overtime",
            PayrollField::Bonus => "bonus",
            PayrollField::Deductions => "deductions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub base_salary: Money,
    pub overtime: Money,
    pub bonus: Money,
    pub deductions: Money,
    pub net_pay: Money,
    pub pay_period: String,
}

impl PayrollRecord {
    /// `None` when the amounts do not fit in `Money`.
    pub fn compute_net_pay(&self) -> Option<Money> {
        self.base_salary
            .checked_add(self.overtime)?
            .checked_add(self.bonus)?
            .checked_sub(self.deductions)
    }

    /// Overwrites one amount and recomputes net pay from all four amounts.
    ///
    /// A net pay that would overflow leaves the record untouched.
    pub fn set_amount(&mut self, field: PayrollField, value: Money) -> Result<(), AppError> {
        let mut updated = self.clone();
        match field {
            PayrollField::BaseSalary => updated.base_salary = value,
            PayrollField::Overtime => updated.overtime = value,
            PayrollField::Bonus => updated.bonus = value,
            PayrollField::Deductions => updated.deductions = value,
        }
        updated.net_pay = updated
            .compute_net_pay()
            .ok_or_else(|| AppError::validation("Net pay is out of range"))?;
        *self = updated;
        Ok(())
    }

    pub fn amount(&self, field: PayrollField) -> Money {
        match field {
            PayrollField::BaseSalary => self.base_salary,
            PayrollField::Overtime => self.overtime,
            PayrollField::Bonus => self.bonus,
            PayrollField::Deductions => self.deductions,
        }
    }
}
