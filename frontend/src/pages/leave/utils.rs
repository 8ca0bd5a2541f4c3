use crate::{
    components::{
        cards::request_status_badge,
        table::{Column, FieldValue, TableRecord},
    },
    data::types::{LeaveRequest, LeaveType, RequestStatus},
    error::{AppError, Violations},
    state::crud::{CreateContext, CrudRecord, Reviewable},
    utils::time::{inclusive_days, parse_date},
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeaveDraft {
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

struct Span {
    start: NaiveDate,
    end: NaiveDate,
    days: u32,
}

impl LeaveDraft {
    fn check(&self) -> Result<Span, AppError> {
        Violations::new()
            .require(&self.start_date, "Start date")
            .require(&self.end_date, "End date")
            .require(&self.reason, "Reason")
            .finish()?;
        let start = parse_date(&self.start_date, "Start date")?;
        let end = parse_date(&self.end_date, "End date")?;
        let days = inclusive_days(start, end)?;
        Ok(Span { start, end, days })
    }
}

impl CrudRecord for LeaveRequest {
    type Draft = LeaveDraft;
    const ID_PREFIX: &'static str = "leave";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> LeaveDraft {
        LeaveDraft {
            leave_type: self.leave_type,
            start_date: self.start_date.format("%Y-%m-%d").to_string(),
            end_date: self.end_date.format("%Y-%m-%d").to_string(),
            reason: self.reason.clone(),
        }
    }

    fn create(id: String, draft: &LeaveDraft, ctx: &CreateContext) -> Result<Self, AppError> {
        let span = draft.check()?;
        let (employee_id, employee_name) = ctx.submitter_employee()?;
        Ok(LeaveRequest {
            id,
            employee_id,
            employee_name,
            leave_type: draft.leave_type,
            start_date: span.start,
            end_date: span.end,
            days: span.days,
            reason: draft.reason.trim().to_string(),
            status: RequestStatus::Pending,
            submitted_at: ctx.today,
        })
    }

    fn apply(&mut self, draft: &LeaveDraft) -> Result<(), AppError> {
        let span = draft.check()?;
        self.leave_type = draft.leave_type;
        self.start_date = span.start;
        self.end_date = span.end;
        self.days = span.days;
        self.reason = draft.reason.trim().to_string();
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.employee_name.to_lowercase().contains(needle)
            || self.reason.to_lowercase().contains(needle)
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn owner_employee_id(&self) -> Option<&str> {
        Some(&self.employee_id)
    }
}

impl Reviewable for LeaveRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

impl TableRecord for LeaveRequest {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "employeeName" => Some(FieldValue::text(&self.employee_name)),
            "type" => Some(FieldValue::text(self.leave_type.label())),
            "startDate" => Some(FieldValue::Date(self.start_date)),
            "endDate" => Some(FieldValue::Date(self.end_date)),
            "days" => Some(FieldValue::Integer(self.days.into())),
            "reason" => Some(FieldValue::text(&self.reason)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "submittedAt" => Some(FieldValue::Date(self.submitted_at)),
            _ => None,
        }
    }
}

/// Admins get the employee column; employees only ever see their own requests.
pub fn leave_columns(is_admin: bool) -> Vec<Column<LeaveRequest>> {
    let mut columns = Vec::with_capacity(8);
    if is_admin {
        columns.push(Column::new("employeeName", "Employee"));
    }
    columns.extend([
        Column::new("type", "Type"),
        Column::new("startDate", "Start Date"),
        Column::new("endDate", "End Date"),
        Column::new("days", "Days"),
        Column::new("reason", "Reason"),
        Column::new("status", "Status").with_render(|_, request: &LeaveRequest| {
            request_status_badge(request.status)
        }),
        Column::new("submittedAt", "Submitted"),
    ]);
    columns
}

pub fn leave_type_options() -> Vec<(String, String)> {
    LeaveType::ALL
        .iter()
        .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{seed, types::Identity, types::Role},
        state::crud::{CrudController, Viewer},
    };

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sarah_ctx() -> CreateContext {
        CreateContext {
            today: d(2024, 2, 10),
            submitter: Some(Identity::new(
                "2",
                "Sarah Johnson",
                "sarah.johnson@company.com",
                Role::Employee,
                Some("emp_001".into()),
            )),
            default_leave_balance: 20,
        }
    }

    fn draft(start: &str, end: &str) -> LeaveDraft {
        LeaveDraft {
            leave_type: LeaveType::Vacation,
            start_date: start.into(),
            end_date: end.into(),
            reason: "Family trip".into(),
        }
    }

    #[test]
    fn submitted_leave_counts_days_inclusively() {
        let request =
            LeaveRequest::create("leave_x".into(), &draft("2024-02-15", "2024-02-19"), &sarah_ctx())
                .unwrap();
        assert_eq!(request.days, 5);
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.employee_name, "Sarah Johnson");
        assert_eq!(request.submitted_at, d(2024, 2, 10));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = LeaveRequest::create("leave_x".into(), &draft("2024-02-19", "2024-02-15"), &sarah_ctx())
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn admin_without_employee_record_cannot_submit() {
        let ctx = CreateContext {
            submitter: Some(Identity::new("1", "John Smith", "admin@company.com", Role::Admin, None)),
            ..sarah_ctx()
        };
        let err = LeaveRequest::create("leave_x".into(), &draft("2024-02-15", "2024-02-16"), &ctx)
            .unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
    }

    #[test]
    fn decided_requests_are_terminal() {
        let mut controller = CrudController::new(seed::leave_requests());
        controller.approve("leave_002").unwrap();
        for attempt in [controller.reject("leave_002"), controller.approve("leave_002")] {
            assert_eq!(attempt.unwrap_err().code(), "INVALID_TRANSITION");
        }
        assert_eq!(controller.find("leave_002").unwrap().status, RequestStatus::Approved);

        controller.reject("leave_001").unwrap_err();
        assert_eq!(controller.find("leave_001").unwrap().status, RequestStatus::Approved);
    }

    #[test]
    fn employees_see_only_their_requests() {
        let controller = CrudController::new(seed::leave_requests());
        let sarah = Viewer::Employee {
            employee_id: Some("emp_001".into()),
        };
        let ids: Vec<String> = controller.visible(&sarah).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["leave_001".to_string()]);
        assert_eq!(controller.visible(&Viewer::Admin).len(), 3);
        assert!(controller
            .visible(&Viewer::Employee { employee_id: None })
            .is_empty());
    }

    #[test]
    fn employee_columns_drop_the_employee() {
        assert_eq!(leave_columns(true).len(), 8);
        let own = leave_columns(false);
        assert_eq!(own.len(), 7);
        assert!(own.iter().all(|c| c.key != "employeeName"));
    }
}
