use std::collections::BTreeSet;

use leptos::*;

use crate::{
    components::table::{Column, FieldValue, TableRecord},
    data::types::{Employee, EmployeeStatus},
    error::{AppError, Violations},
    state::crud::{CreateContext, CrudRecord},
    utils::format::parse_amount,
};

/// Raw form values; numbers stay text until the draft is committed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: String,
    pub hours: String,
    pub status: EmployeeStatus,
}

struct Checked {
    salary: i64,
    hours: u32,
}

impl EmployeeDraft {
    fn check(&self) -> Result<Checked, AppError> {
        let mut violations = Violations::new();
        violations
            .require(&self.name, "Name")
            .require(&self.email, "Email")
            .require(&self.position, "Position")
            .require(&self.department, "Department");
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            violations.push("Email must be a valid address");
        }
        let salary = match parse_amount(&self.salary, "Salary") {
            Ok(salary) if salary >= 0 => Some(salary),
            Ok(_) => {
                violations.push("Salary must be a non-negative whole number");
                None
            }
            Err(err) => {
                for detail in err.details() {
                    violations.push(detail.clone());
                }
                None
            }
        };
        let hours = self.hours.trim().parse::<u32>().ok();
        if hours.is_none() {
            violations.push("Hours must be a whole number");
        }
        violations.finish()?;
        Ok(Checked {
            salary: salary.unwrap_or_default(),
            hours: hours.unwrap_or_default(),
        })
    }
}

impl CrudRecord for Employee {
    type Draft = EmployeeDraft;
    const ID_PREFIX: &'static str = "emp";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary.to_string(),
            hours: self.hours.to_string(),
            status: self.status,
        }
    }

    fn create(id: String, draft: &EmployeeDraft, ctx: &CreateContext) -> Result<Self, AppError> {
        let checked = draft.check()?;
        Ok(Employee {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            position: draft.position.trim().to_string(),
            department: draft.department.trim().to_string(),
            salary: checked.salary,
            hours: checked.hours,
            join_date: ctx.today,
            status: draft.status,
            leave_balance: ctx.default_leave_balance,
        })
    }

    fn apply(&mut self, draft: &EmployeeDraft) -> Result<(), AppError> {
        let checked = draft.check()?;
        self.name = draft.name.trim().to_string();
        self.email = draft.email.trim().to_string();
        self.position = draft.position.trim().to_string();
        self.department = draft.department.trim().to_string();
        self.salary = checked.salary;
        self.hours = checked.hours;
        self.status = draft.status;
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.position]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    fn category(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl TableRecord for Employee {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => Some(FieldValue::text(&self.name)),
            "email" => Some(FieldValue::text(&self.email)),
            "position" => Some(FieldValue::text(&self.position)),
            "department" => Some(FieldValue::text(&self.department)),
            "hours" => Some(FieldValue::Integer(self.hours.into())),
            "salary" => Some(FieldValue::Money(self.salary)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "joinDate" => Some(FieldValue::Date(self.join_date)),
            _ => None,
        }
    }
}

pub fn status_badge(status: &str) -> View {
    let tone = if status == EmployeeStatus::Active.as_str() {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    };
    view! {
        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", tone)>
            {status.to_string()}
        </span>
    }
    .into_view()
}

pub fn employee_columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("name", "Name"),
        Column::new("position", "Position"),
        Column::new("department", "Department"),
        Column::new("hours", "Hours"),
        Column::new("salary", "Salary"),
        Column::new("status", "Status").with_render(|value, _| status_badge(&value.to_string())),
    ]
}

/// Distinct department names, sorted, for the filter select.
pub fn department_names(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .map(|e| e.department.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn showing_label(shown: usize, total: usize) -> String {
    format!("Showing {} of {} employees", shown, total)
}
