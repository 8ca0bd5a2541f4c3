use chrono::NaiveDate;

use crate::{
    components::{
        cards::request_status_badge,
        table::{Column, FieldValue, TableRecord},
    },
    data::types::{RequestStatus, WeeklyRequest},
    error::{AppError, Violations},
    state::crud::{CreateContext, CrudRecord, Reviewable},
    utils::time::{is_iso_week_label, iso_week_label},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyDraft {
    pub week: String,
    pub purpose: String,
    pub email: String,
}

impl WeeklyDraft {
    /// Fresh form for `today`, addressed from `email`.
    pub fn prefilled(today: NaiveDate, email: &str) -> Self {
        Self {
            week: iso_week_label(today),
            purpose: String::new(),
            email: email.to_string(),
        }
    }

    fn check(&self) -> Result<(), AppError> {
        let mut violations = Violations::new();
        violations
            .require(&self.week, "Week")
            .require(&self.purpose, "Purpose");
        if !self.week.trim().is_empty() && !is_iso_week_label(self.week.trim()) {
            violations.push("Week must look like 2024-W06");
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            violations.push("Email must be a valid address");
        }
        violations.finish()
    }
}

impl CrudRecord for WeeklyRequest {
    type Draft = WeeklyDraft;
    const ID_PREFIX: &'static str = "weekly";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> WeeklyDraft {
        WeeklyDraft {
            week: self.week.clone(),
            purpose: self.purpose.clone(),
            email: self.email.clone(),
        }
    }

    fn create(id: String, draft: &WeeklyDraft, ctx: &CreateContext) -> Result<Self, AppError> {
        draft.check()?;
        let (employee_id, employee_name) = ctx.submitter_employee()?;
        let email = match draft.email.trim() {
            "" => ctx
                .submitter
                .as_ref()
                .map(|identity| identity.email.clone())
                .unwrap_or_default(),
            given => given.to_string(),
        };
        Ok(WeeklyRequest {
            id,
            employee_id,
            employee_name,
            week: draft.week.trim().to_string(),
            purpose: draft.purpose.trim().to_string(),
            email,
            submitted_at: ctx.today,
            status: RequestStatus::Pending,
        })
    }

    fn apply(&mut self, draft: &WeeklyDraft) -> Result<(), AppError> {
        draft.check()?;
        self.week = draft.week.trim().to_string();
        self.purpose = draft.purpose.trim().to_string();
        if !draft.email.trim().is_empty() {
            self.email = draft.email.trim().to_string();
        }
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        [&self.employee_name, &self.purpose, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn owner_employee_id(&self) -> Option<&str> {
        Some(&self.employee_id)
    }
}

impl Reviewable for WeeklyRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

impl TableRecord for WeeklyRequest {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "employeeName" => Some(FieldValue::text(&self.employee_name)),
            "week" => Some(FieldValue::text(&self.week)),
            "purpose" => Some(FieldValue::text(&self.purpose)),
            "email" => Some(FieldValue::text(&self.email)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "submittedAt" => Some(FieldValue::Date(self.submitted_at)),
            _ => None,
        }
    }
}

pub fn weekly_columns(is_admin: bool) -> Vec<Column<WeeklyRequest>> {
    let mut columns = Vec::with_capacity(6);
    if is_admin {
        columns.push(Column::new("employeeName", "Employee"));
    }
    columns.extend([
        Column::new("week", "Week"),
        Column::new("purpose", "Purpose"),
        Column::new("email", "Email"),
        Column::new("status", "Status")
            .with_render(|_, request: &WeeklyRequest| request_status_badge(request.status)),
        Column::new("submittedAt", "Submitted"),
    ]);
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{
            seed,
            types::{Identity, Role},
        },
        state::crud::{CrudController, Viewer},
    };

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn mike_ctx() -> CreateContext {
        CreateContext {
            today: d(2024, 2, 14),
            submitter: Some(Identity::new(
                "3",
                "Mike Davis",
                "mike.davis@company.com",
                Role::Employee,
                Some("emp_002".into()),
            )),
            default_leave_balance: 20,
        }
    }

    #[test]
    fn prefilled_draft_uses_current_iso_week() {
        let draft = WeeklyDraft::prefilled(d(2024, 2, 14), "mike.davis@company.com");
        assert_eq!(draft.week, "2024-W07");
        assert_eq!(draft.email, "mike.davis@company.com");
        assert!(draft.purpose.is_empty());
    }

    #[test]
    fn blank_email_falls_back_to_submitter() {
        let draft = WeeklyDraft {
            week: "2024-W07".into(),
            purpose: "Campaign wrap-up".into(),
            email: String::new(),
        };
        let request = WeeklyRequest::create("weekly_x".into(), &draft, &mike_ctx()).unwrap();
        assert_eq!(request.email, "mike.davis@company.com");
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.employee_id, "emp_002");
    }

    #[test]
    fn malformed_week_is_rejected() {
        let draft = WeeklyDraft {
            week: "week seven".into(),
            purpose: "x".into(),
            email: String::new(),
        };
        assert!(WeeklyRequest::create("weekly_x".into(), &draft, &mike_ctx()).is_err());
    }

    #[test]
    fn review_is_one_way() {
        let mut controller = CrudController::new(seed::weekly_requests());
        controller.reject("weekly_002").unwrap();
        assert!(controller.approve("weekly_002").is_err());
        assert!(controller.reject("weekly_001").is_err());
        let statuses: Vec<RequestStatus> = controller.records().iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![RequestStatus::Approved, RequestStatus::Rejected]);
    }

    #[test]
    fn counters_follow_viewer_scope() {
        let controller = CrudController::new(seed::weekly_requests());
        let sarah = Viewer::Employee {
            employee_id: Some("emp_001".into()),
        };
        assert_eq!(controller.count_by_status(&sarah, RequestStatus::Approved), 1);
        assert_eq!(controller.count_by_status(&sarah, RequestStatus::Pending), 0);
        assert_eq!(controller.count_by_status(&Viewer::Admin, RequestStatus::Pending), 1);
    }
}
