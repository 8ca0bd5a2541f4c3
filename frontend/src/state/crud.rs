use chrono::NaiveDate;

use crate::{
    data::types::{Identity, RequestStatus},
    error::AppError,
    utils::id,
};

/// A record type a `CrudController` can manage.
pub trait CrudRecord: Clone + 'static {
    /// Editable form values; `Default` is the empty create form.
    type Draft: Clone + Default + PartialEq + 'static;

    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    fn to_draft(&self) -> Self::Draft;

    /// Builds a brand new record, validating the draft and filling per-type defaults.
    fn create(id: String, draft: &Self::Draft, ctx: &CreateContext) -> Result<Self, AppError>;

    /// Overwrites the editable fields of an existing record.
    fn apply(&mut self, draft: &Self::Draft) -> Result<(), AppError>;

    /// `needle` is already lowercased and non-empty.
    fn matches_search(&self, _needle: &str) -> bool {
        true
    }

    fn category(&self) -> Option<&str> {
        None
    }

    /// Employee id of the record's owner, for records employees may only see their own of.
    fn owner_employee_id(&self) -> Option<&str> {
        None
    }
}

/// Records with a pending -> approved/rejected lifecycle.
pub trait Reviewable: CrudRecord {
    fn status(&self) -> RequestStatus;
    fn set_status(&mut self, status: RequestStatus);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContext {
    pub today: NaiveDate,
    pub submitter: Option<Identity>,
    pub default_leave_balance: u32,
}

impl CreateContext {
    pub fn new(today: NaiveDate, submitter: Option<Identity>) -> Self {
        Self {
            today,
            submitter,
            default_leave_balance: crate::config::current().default_leave_balance,
        }
    }

    /// Employee id and display name of the submitting identity.
    pub fn submitter_employee(&self) -> Result<(String, String), AppError> {
        self.submitter
            .as_ref()
            .and_then(|identity| {
                identity
                    .employee_id
                    .clone()
                    .map(|employee_id| (employee_id, identity.name.clone()))
            })
            .ok_or_else(|| AppError::Unauthorized("Only employees can submit requests".into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Admin,
    Employee { employee_id: Option<String> },
}

impl Viewer {
    pub fn from_identity(identity: Option<&Identity>) -> Self {
        match identity {
            Some(identity) if identity.is_admin() => Viewer::Admin,
            Some(identity) => Viewer::Employee {
                employee_id: identity.employee_id.clone(),
            },
            None => Viewer::Employee { employee_id: None },
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Viewer::Admin)
    }

    pub fn can_see<R: CrudRecord>(&self, record: &R) -> bool {
        match (self, record.owner_employee_id()) {
            (Viewer::Admin, _) | (_, None) => true,
            (Viewer::Employee { employee_id }, Some(owner)) => {
                employee_id.as_deref() == Some(owner)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState<D> {
    #[default]
    Closed,
    Creating(D),
    Editing {
        id: String,
        draft: D,
    },
}

impl<D> FormState<D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            FormState::Closed => None,
            FormState::Creating(draft) | FormState::Editing { draft, .. } => Some(draft),
        }
    }
}

/// In-memory collection plus the form, removal and filter state of one page.
#[derive(Clone)]
pub struct CrudController<R: CrudRecord> {
    records: Vec<R>,
    form: FormState<R::Draft>,
    pending_removal: Option<String>,
    search: String,
    category: Option<String>,
}

impl<R: CrudRecord> CrudController<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            form: FormState::Closed,
            pending_removal: None,
            search: String::new(),
            category: None,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn form(&self) -> &FormState<R::Draft> {
        &self.form
    }

    pub fn start_create(&mut self) {
        self.form = FormState::Creating(R::Draft::default());
    }

    pub fn start_edit(&mut self, id: &str) -> Result<(), AppError> {
        let record = self
            .find(id)
            .ok_or_else(|| AppError::NotFound(format!("Record {}", id)))?;
        self.form = FormState::Editing {
            id: id.to_string(),
            draft: record.to_draft(),
        };
        Ok(())
    }

    pub fn update_draft(&mut self, f: impl FnOnce(&mut R::Draft)) {
        match &mut self.form {
            FormState::Closed => {}
            FormState::Creating(draft) | FormState::Editing { draft, .. } => f(draft),
        }
    }

    /// Commits the open form. On error the collection is untouched and the form stays open.
    pub fn submit(&mut self, ctx: &CreateContext) -> Result<String, AppError> {
        match &self.form {
            FormState::Closed => Err(AppError::validation("No form is open")),
            FormState::Creating(draft) => {
                let record = R::create(id::next_id(R::ID_PREFIX), draft, ctx)?;
                let id = record.id().to_string();
                self.records.push(record);
                self.form = FormState::Closed;
                log::info!("Created {}", id);
                Ok(id)
            }
            FormState::Editing { id, draft } => {
                let id = id.clone();
                let mut updated = self
                    .find(&id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("Record {}", id)))?;
                updated.apply(draft)?;
                self.replace(updated);
                self.form = FormState::Closed;
                log::info!("Updated {}", id);
                Ok(id)
            }
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = FormState::Closed;
    }

    pub fn request_remove(&mut self, id: &str) -> Result<(), AppError> {
        if self.find(id).is_none() {
            return Err(AppError::NotFound(format!("Record {}", id)));
        }
        self.pending_removal = Some(id.to_string());
        Ok(())
    }

    pub fn pending_removal(&self) -> Option<&R> {
        self.pending_removal.as_deref().and_then(|id| self.find(id))
    }

    pub fn confirm_remove(&mut self) -> Option<R> {
        let id = self.pending_removal.take()?;
        let index = self.records.iter().position(|record| record.id() == id)?;
        log::info!("Removed {}", id);
        Some(self.records.remove(index))
    }

    pub fn cancel_remove(&mut self) {
        self.pending_removal = None;
    }

    /// In-place edit outside the form flow (inline amount edits).
    pub fn modify(&mut self, id: &str, f: impl FnOnce(&mut R)) -> Result<(), AppError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("Record {}", id)))?;
        f(record);
        Ok(())
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// An empty value clears the filter.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.category = if category.is_empty() {
            None
        } else {
            Some(category)
        };
    }

    /// Records in scope for `viewer` before search and category filtering.
    pub fn scoped(&self, viewer: &Viewer) -> Vec<R> {
        self.records
            .iter()
            .filter(|record| viewer.can_see(*record))
            .cloned()
            .collect()
    }

    pub fn visible(&self, viewer: &Viewer) -> Vec<R> {
        let needle = self.search.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| viewer.can_see(*record))
            .filter(|record| needle.is_empty() || record.matches_search(&needle))
            .filter(|record| match self.category.as_deref() {
                Some(category) => record.category() == Some(category),
                None => true,
            })
            .cloned()
            .collect()
    }

    fn replace(&mut self, updated: R) {
        if let Some(slot) = self
            .records
            .iter_mut()
            .find(|record| record.id() == updated.id())
        {
            *slot = updated;
        }
    }
}

impl<R: Reviewable> CrudController<R> {
    pub fn approve(&mut self, id: &str) -> Result<(), AppError> {
        self.decide(id, RequestStatus::Approved)
    }

    pub fn reject(&mut self, id: &str) -> Result<(), AppError> {
        self.decide(id, RequestStatus::Rejected)
    }

    pub fn count_by_status(&self, viewer: &Viewer, status: RequestStatus) -> usize {
        self.records
            .iter()
            .filter(|record| viewer.can_see(*record) && record.status() == status)
            .count()
    }

    fn decide(&mut self, id: &str, to: RequestStatus) -> Result<(), AppError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("Request {}", id)))?;
        let from = record.status();
        if from.is_terminal() {
            log::warn!("Refusing to mark {} {}: already {}", id, to, from);
            return Err(AppError::InvalidTransition { from, to });
        }
        record.set_status(to);
        log::info!("Request {} {}", id, to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::Role;
    use crate::error::Violations;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        id: String,
        title: String,
        team: String,
        owner: String,
        status: RequestStatus,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TicketDraft {
        title: String,
        team: String,
    }

    impl CrudRecord for Ticket {
        type Draft = TicketDraft;
        const ID_PREFIX: &'static str = "ticket";

        fn id(&self) -> &str {
            &self.id
        }

        fn to_draft(&self) -> TicketDraft {
            TicketDraft {
                title: self.title.clone(),
                team: self.team.clone(),
            }
        }

        fn create(id: String, draft: &TicketDraft, ctx: &CreateContext) -> Result<Self, AppError> {
            Violations::new().require(&draft.title, "Title").finish()?;
            let (owner, _) = ctx.submitter_employee()?;
            Ok(Ticket {
                id,
                title: draft.title.clone(),
                team: draft.team.clone(),
                owner,
                status: RequestStatus::Pending,
            })
        }

        fn apply(&mut self, draft: &TicketDraft) -> Result<(), AppError> {
            Violations::new().require(&draft.title, "Title").finish()?;
            self.title = draft.title.clone();
            self.team = draft.team.clone();
            Ok(())
        }

        fn matches_search(&self, needle: &str) -> bool {
            self.title.to_lowercase().contains(needle)
        }

        fn category(&self) -> Option<&str> {
            Some(&self.team)
        }

        fn owner_employee_id(&self) -> Option<&str> {
            Some(&self.owner)
        }
    }

    impl Reviewable for Ticket {
        fn status(&self) -> RequestStatus {
            self.status
        }

        fn set_status(&mut self, status: RequestStatus) {
            self.status = status;
        }
    }

    fn ticket(id: &str, title: &str, team: &str, owner: &str) -> Ticket {
        Ticket {
            id: id.into(),
            title: title.into(),
            team: team.into(),
            owner: owner.into(),
            status: RequestStatus::Pending,
        }
    }

    fn controller() -> CrudController<Ticket> {
        CrudController::new(vec![
            ticket("t1", "Laptop refresh", "IT", "emp_001"),
            ticket("t2", "Desk move", "Facilities", "emp_002"),
            ticket("t3", "VPN access", "IT", "emp_002"),
        ])
    }

    fn employee_ctx() -> CreateContext {
        let identity = Identity::new(
            "2",
            "Sarah Johnson",
            "sarah.johnson@company.com",
            Role::Employee,
            Some("emp_001".into()),
        );
        CreateContext {
            today: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            submitter: Some(identity),
            default_leave_balance: 20,
        }
    }

    #[test]
    fn create_appends_with_prefixed_id_and_closes_form() {
        let mut c = controller();
        c.start_create();
        c.update_draft(|d| d.title = "Monitor".into());
        let id = c.submit(&employee_ctx()).unwrap();
        assert!(id.starts_with("ticket_"));
        assert_eq!(c.records().len(), 4);
        assert_eq!(c.find(&id).unwrap().owner, "emp_001");
        assert!(!c.form().is_open());
    }

    #[test]
    fn many_creates_yield_distinct_ids() {
        let mut c = CrudController::<Ticket>::new(Vec::new());
        let ctx = employee_ctx();
        for n in 0..50 {
            c.start_create();
            c.update_draft(|d| d.title = format!("Ticket {}", n));
            c.submit(&ctx).unwrap();
        }
        let ids: HashSet<_> = c.records().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn invalid_draft_keeps_collection_and_form() {
        let mut c = controller();
        c.start_create();
        let err = c.submit(&employee_ctx()).unwrap_err();
        assert_eq!(err.details(), &["Title is required".to_string()]);
        assert_eq!(c.records().len(), 3);
        assert!(c.form().is_open());
    }

    #[test]
    fn edit_overwrites_matching_record_only() {
        let mut c = controller();
        c.start_edit("t2").unwrap();
        assert_eq!(c.form().draft().unwrap().title, "Desk move");
        c.update_draft(|d| d.title = "Desk swap".into());
        assert_eq!(c.submit(&employee_ctx()).unwrap(), "t2");
        assert_eq!(c.find("t2").unwrap().title, "Desk swap");
        assert_eq!(c.find("t2").unwrap().owner, "emp_002");
        assert_eq!(c.find("t1").unwrap().title, "Laptop refresh");
    }

    #[test]
    fn edit_unknown_record_is_not_found() {
        let mut c = controller();
        assert_eq!(c.start_edit("nope").unwrap_err().code(), "NOT_FOUND");
        assert!(!c.form().is_open());
    }

    #[test]
    fn removal_needs_confirmation() {
        let mut c = controller();
        c.request_remove("t1").unwrap();
        c.cancel_remove();
        assert_eq!(c.records().len(), 3);
        assert!(c.confirm_remove().is_none());

        c.request_remove("t1").unwrap();
        assert_eq!(c.pending_removal().unwrap().id, "t1");
        assert_eq!(c.confirm_remove().unwrap().id, "t1");
        assert!(c.find("t1").is_none());
    }

    #[test]
    fn decided_requests_are_terminal() {
        let mut c = controller();
        c.approve("t1").unwrap();
        let err = c.reject("t1").unwrap_err();
        assert_eq!(
            err,
            AppError::InvalidTransition {
                from: RequestStatus::Approved,
                to: RequestStatus::Rejected
            }
        );
        assert_eq!(c.find("t1").unwrap().status, RequestStatus::Approved);

        c.reject("t2").unwrap();
        assert!(c.approve("t2").is_err());
        assert_eq!(c.find("t2").unwrap().status, RequestStatus::Rejected);
    }

    #[test]
    fn search_and_category_intersect() {
        let mut c = controller();
        c.set_search("  ACCESS ");
        assert_eq!(c.visible(&Viewer::Admin).len(), 1);
        c.set_search("");
        c.set_category("IT");
        let ids: Vec<_> = c.visible(&Viewer::Admin).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
        c.set_search("desk");
        assert!(c.visible(&Viewer::Admin).is_empty());
        c.set_category("");
        assert_eq!(c.visible(&Viewer::Admin).len(), 1);
    }

    #[test]
    fn employees_only_see_their_own_records() {
        let c = controller();
        let viewer = Viewer::from_identity(employee_ctx().submitter.as_ref());
        let ids: Vec<_> = c.visible(&viewer).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t1"]);
        assert_eq!(c.count_by_status(&viewer, RequestStatus::Pending), 1);
        assert_eq!(c.count_by_status(&Viewer::Admin, RequestStatus::Pending), 3);
        assert!(c
            .visible(&Viewer::Employee { employee_id: None })
            .is_empty());
    }

    #[test]
    fn admins_cannot_submit_owned_requests() {
        let mut c = controller();
        c.start_create();
        c.update_draft(|d| d.title = "Chair".into());
        let ctx = CreateContext {
            submitter: None,
            ..employee_ctx()
        };
        assert_eq!(c.submit(&ctx).unwrap_err().code(), "UNAUTHORIZED");
    }
}
