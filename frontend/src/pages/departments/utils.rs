use crate::{
    components::table::{Column, FieldValue, TableRecord},
    data::types::{Department, Position, PositionLevel},
    error::{AppError, Violations},
    state::crud::{CreateContext, CrudRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentTab {
    #[default]
    Departments,
    Positions,
}

impl DepartmentTab {
    pub fn noun(&self) -> &'static str {
        match self {
            DepartmentTab::Departments => "Department",
            DepartmentTab::Positions => "Position",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepartmentDraft {
    pub name: String,
    pub manager: String,
}

impl DepartmentDraft {
    fn check(&self) -> Result<(), AppError> {
        Violations::new()
            .require(&self.name, "Department name")
            .require(&self.manager, "Manager")
            .finish()
    }
}

impl CrudRecord for Department {
    type Draft = DepartmentDraft;
    const ID_PREFIX: &'static str = "dept";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> DepartmentDraft {
        DepartmentDraft {
            name: self.name.clone(),
            manager: self.manager.clone(),
        }
    }

    fn create(id: String, draft: &DepartmentDraft, _ctx: &CreateContext) -> Result<Self, AppError> {
        draft.check()?;
        Ok(Department {
            id,
            name: draft.name.trim().to_string(),
            manager: draft.manager.trim().to_string(),
            employee_count: 0,
        })
    }

    fn apply(&mut self, draft: &DepartmentDraft) -> Result<(), AppError> {
        draft.check()?;
        self.name = draft.name.trim().to_string();
        self.manager = draft.manager.trim().to_string();
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.manager.to_lowercase().contains(needle)
    }
}

impl TableRecord for Department {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => Some(FieldValue::text(&self.name)),
            "manager" => Some(FieldValue::text(&self.manager)),
            "employeeCount" => Some(FieldValue::Integer(self.employee_count.into())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionDraft {
    pub title: String,
    pub department: String,
    pub level: PositionLevel,
}

impl Default for PositionDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            department: String::new(),
            level: PositionLevel::Junior,
        }
    }
}

impl PositionDraft {
    fn check(&self) -> Result<(), AppError> {
        Violations::new()
            .require(&self.title, "Position title")
            .require(&self.department, "Department")
            .finish()
    }
}

impl CrudRecord for Position {
    type Draft = PositionDraft;
    const ID_PREFIX: &'static str = "pos";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> PositionDraft {
        PositionDraft {
            title: self.title.clone(),
            department: self.department.clone(),
            level: self.level,
        }
    }

    fn create(id: String, draft: &PositionDraft, _ctx: &CreateContext) -> Result<Self, AppError> {
        draft.check()?;
        Ok(Position {
            id,
            title: draft.title.trim().to_string(),
            department: draft.department.clone(),
            level: draft.level,
        })
    }

    fn apply(&mut self, draft: &PositionDraft) -> Result<(), AppError> {
        draft.check()?;
        self.title = draft.title.trim().to_string();
        self.department = draft.department.clone();
        self.level = draft.level;
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl TableRecord for Position {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "title" => Some(FieldValue::text(&self.title)),
            "department" => Some(FieldValue::text(&self.department)),
            "level" => Some(FieldValue::text(self.level.as_str())),
            _ => None,
        }
    }
}

pub fn department_columns() -> Vec<Column<Department>> {
    vec![
        Column::new("name", "Department Name"),
        Column::new("manager", "Manager"),
        Column::new("employeeCount", "Employee Count"),
    ]
}

pub fn position_columns() -> Vec<Column<Position>> {
    vec![
        Column::new("title", "Position Title"),
        Column::new("department", "Department"),
        Column::new("level", "Level"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::seed, state::crud::CrudController};
    use chrono::NaiveDate;

    fn ctx() -> CreateContext {
        CreateContext {
            today: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            submitter: None,
            default_leave_balance: 20,
        }
    }

    #[test]
    fn new_department_starts_empty() {
        let mut controller = CrudController::new(seed::departments());
        controller.start_create();
        controller.update_draft(|d| {
            d.name = "Legal".into();
            d.manager = "Ana Ruiz".into();
        });
        let id = controller.submit(&ctx()).unwrap();
        let legal = controller.find(&id).unwrap();
        assert_eq!(legal.employee_count, 0);
        assert_eq!(controller.records().len(), 6);
    }

    #[test]
    fn department_edit_keeps_headcount() {
        let mut controller = CrudController::new(seed::departments());
        controller.start_edit("dept_001").unwrap();
        assert_eq!(controller.form().draft().unwrap().name, "IT");
        controller.update_draft(|d| d.name = "Engineering".into());
        controller.submit(&ctx()).unwrap();
        let dept = controller.find("dept_001").unwrap();
        assert_eq!(dept.name, "Engineering");
        assert_eq!(dept.employee_count, 5);
    }

    #[test]
    fn position_requires_title_and_department() {
        let mut controller = CrudController::new(seed::positions());
        controller.start_create();
        let err = controller.submit(&ctx()).unwrap_err();
        assert_eq!(err.details().len(), 2);
        assert_eq!(controller.records().len(), 15);
    }

    #[test]
    fn position_delete_needs_confirmation() {
        let mut controller = CrudController::new(seed::positions());
        controller.request_remove("pos_001").unwrap();
        controller.cancel_remove();
        assert_eq!(controller.records().len(), 15);
        controller.request_remove("pos_001").unwrap();
        assert_eq!(controller.confirm_remove().map(|p| p.id), Some("pos_001".into()));
        assert!(controller.find("pos_001").is_none());
    }

    #[test]
    fn tab_nouns() {
        assert_eq!(DepartmentTab::default().noun(), "Department");
        assert_eq!(DepartmentTab::Positions.noun(), "Position");
    }
}
