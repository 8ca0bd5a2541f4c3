use leptos::*;

use crate::{
    error::AppError,
    state::{
        crud::{CreateContext, CrudController, CrudRecord, FormState, Reviewable, Viewer},
        message::MessageState,
        session::{use_session, SessionContext},
    },
    utils::time::today_in_app_tz,
};

/// Reactive wrapper a management page drives its `CrudController` through.
///
/// Every mutation reports its outcome to `message`, so panels only wire buttons.
pub struct CrudPage<R: CrudRecord> {
    pub controller: RwSignal<CrudController<R>>,
    pub message: RwSignal<MessageState>,
    session: SessionContext,
}

impl<R: CrudRecord> Clone for CrudPage<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CrudRecord> Copy for CrudPage<R> {}

impl<R: CrudRecord> CrudPage<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self::with_session(records, use_session())
    }

    pub fn with_session(records: Vec<R>, session: SessionContext) -> Self {
        Self {
            controller: create_rw_signal(CrudController::new(records)),
            message: create_rw_signal(MessageState::default()),
            session,
        }
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from_identity(self.session.identity().as_ref())
    }

    pub fn is_admin(&self) -> bool {
        self.viewer().is_admin()
    }

    /// Filtered records for the current viewer; tracks the controller.
    pub fn visible(&self) -> Vec<R> {
        let viewer = self.viewer();
        self.controller.with(|c| c.visible(&viewer))
    }

    pub fn scoped(&self) -> Vec<R> {
        let viewer = self.viewer();
        self.controller.with(|c| c.scoped(&viewer))
    }

    pub fn form(&self) -> FormState<R::Draft> {
        self.controller.with(|c| c.form().clone())
    }

    pub fn form_open(&self) -> bool {
        self.controller.with(|c| c.form().is_open())
    }

    pub fn draft(&self) -> R::Draft {
        self.controller
            .with(|c| c.form().draft().cloned())
            .unwrap_or_default()
    }

    pub fn start_create(&self) {
        self.message.update(MessageState::clear);
        self.controller.update(CrudController::start_create);
    }

    pub fn start_edit(&self, id: &str) {
        let result = self
            .controller
            .try_update(|c| c.start_edit(id))
            .unwrap_or_else(|| Err(disposed()));
        if let Err(err) = result {
            self.message.update(|m| m.set_error(err));
        } else {
            self.message.update(MessageState::clear);
        }
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut R::Draft)) {
        self.controller.update(|c| c.update_draft(f));
    }

    pub fn cancel_form(&self) {
        self.controller.update(CrudController::cancel_form);
    }

    pub fn submit(&self, success: &str) -> Result<String, AppError> {
        let ctx = CreateContext::new(today_in_app_tz(), self.session.identity());
        self.submit_with(&ctx, success)
    }

    pub fn submit_with(&self, ctx: &CreateContext, success: &str) -> Result<String, AppError> {
        let result = self
            .controller
            .try_update(|c| c.submit(ctx))
            .unwrap_or_else(|| Err(disposed()));
        self.message.update(|m| m.apply(result.clone(), success));
        result
    }

    pub fn request_remove(&self, id: &str) {
        let result = self
            .controller
            .try_update(|c| c.request_remove(id))
            .unwrap_or_else(|| Err(disposed()));
        if let Err(err) = result {
            self.message.update(|m| m.set_error(err));
        }
    }

    pub fn pending_removal(&self) -> Option<R> {
        self.controller.with(|c| c.pending_removal().cloned())
    }

    pub fn confirm_remove(&self, success: &str) -> Option<R> {
        let removed = self
            .controller
            .try_update(CrudController::confirm_remove)
            .flatten();
        if removed.is_some() {
            self.message.update(|m| m.set_success(success));
        }
        removed
    }

    pub fn cancel_remove(&self) {
        self.controller.update(CrudController::cancel_remove);
    }

    pub fn modify(&self, id: &str, f: impl FnOnce(&mut R)) -> Result<(), AppError> {
        let result = self
            .controller
            .try_update(|c| c.modify(id, f))
            .unwrap_or_else(|| Err(disposed()));
        if let Err(err) = &result {
            self.message.update(|m| m.set_error(err.clone()));
        }
        result
    }

    pub fn set_search(&self, search: String) {
        self.controller.update(|c| c.set_search(search));
    }

    pub fn set_category(&self, category: String) {
        self.controller.update(|c| c.set_category(category));
    }
}

impl<R: Reviewable> CrudPage<R> {
    /// Admin only; any other viewer gets `Unauthorized` and the record is left alone.
    pub fn approve(&self, id: &str) -> Result<(), AppError> {
        let result = self.review(|c| c.approve(id));
        self.message.update(|m| m.apply(result.clone(), "Request approved"));
        result
    }

    pub fn reject(&self, id: &str) -> Result<(), AppError> {
        let result = self.review(|c| c.reject(id));
        self.message.update(|m| m.apply(result.clone(), "Request rejected"));
        result
    }

    fn review(
        &self,
        decide: impl FnOnce(&mut CrudController<R>) -> Result<(), AppError>,
    ) -> Result<(), AppError> {
        if !self.is_admin() {
            log::warn!("Review rejected for a non-admin session");
            return Err(AppError::Unauthorized(
                "Only administrators can review requests".into(),
            ));
        }
        self.controller
            .try_update(decide)
            .unwrap_or_else(|| Err(disposed()))
    }

    pub fn count_by_status(&self, status: crate::data::types::RequestStatus) -> usize {
        let viewer = self.viewer();
        self.controller.with(|c| c.count_by_status(&viewer, status))
    }
}

fn disposed() -> AppError {
    AppError::Storage("page state is no longer available".into())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::data::{
        seed,
        types::{LeaveRequest, RequestStatus},
    };
    use crate::test_support::helpers::{admin_identity, employee_identity, provide_session};
    use crate::test_support::ssr::with_runtime;

    fn status_of(page: &CrudPage<LeaveRequest>, id: &str) -> Option<RequestStatus> {
        page.controller.with(|c| c.find(id).map(|request| request.status))
    }

    #[test]
    fn employees_cannot_review() {
        with_runtime(|| {
            let session = provide_session(Some(employee_identity()));
            let page = CrudPage::with_session(seed::leave_requests(), session);
            let err = page.approve("leave_002").unwrap_err();
            assert_eq!(err.code(), "UNAUTHORIZED");
            assert!(page.reject("leave_002").is_err());
            assert_eq!(status_of(&page, "leave_002"), Some(RequestStatus::Pending));
            assert!(page.message.with(|m| m.error.is_some() && m.success.is_none()));
        });
    }

    #[test]
    fn admins_review_pending_requests() {
        with_runtime(|| {
            let session = provide_session(Some(admin_identity()));
            let page = CrudPage::with_session(seed::leave_requests(), session);
            page.approve("leave_002").unwrap();
            assert_eq!(status_of(&page, "leave_002"), Some(RequestStatus::Approved));
            assert_eq!(
                page.message.with(|m| m.success.clone()).as_deref(),
                Some("Request approved")
            );
        });
    }
}
