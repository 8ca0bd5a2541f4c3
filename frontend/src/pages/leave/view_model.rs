use leptos::*;

use crate::{
    data::{repository::use_repository, types::LeaveRequest},
    error::AppError,
    state::{page::CrudPage, session::use_session},
};

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub page: CrudPage<LeaveRequest>,
    /// Remaining days of the signed-in employee; `None` for admins.
    pub balance: Signal<Option<u32>>,
}

impl LeaveViewModel {
    pub fn submit(&self) -> Result<String, AppError> {
        self.page.submit("Leave request submitted")
    }

    pub fn approve(&self, id: &str) -> Result<(), AppError> {
        self.page.approve(id)
    }

    pub fn reject(&self, id: &str) -> Result<(), AppError> {
        self.page.reject(id)
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    let repo = use_repository();
    let session = use_session();
    let page = CrudPage::with_session(repo.leave_requests(), session);
    let balance = Signal::derive(move || {
        session
            .identity()
            .filter(|identity| !identity.is_admin())
            .and_then(|identity| repo.employee_by_email(&identity.email))
            .map(|employee| employee.leave_balance)
    });
    LeaveViewModel { page, balance }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::data::types::{LeaveType, RequestStatus};
    use crate::test_support::helpers::{admin_identity, employee_identity, provide_session};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn employee_submits_pending_leave() {
        with_runtime(|| {
            provide_session(Some(employee_identity()));
            let vm = use_leave_view_model();
            vm.page.start_create();
            vm.page.update_draft(|d| {
                d.leave_type = LeaveType::Vacation;
                d.start_date = "2024-02-15".into();
                d.end_date = "2024-02-19".into();
                d.reason = "Family vacation".into();
            });
            let id = vm.submit().unwrap();
            let mine = vm.page.visible();
            let created = mine.iter().find(|r| r.id == id).unwrap();
            assert_eq!(created.days, 5);
            assert_eq!(created.status, RequestStatus::Pending);
            assert_eq!(created.employee_id, "emp_001");
            assert_eq!(mine.len(), 2);
            assert!(!vm.page.form_open());
            assert_eq!(vm.balance.get(), Some(15));
        });
    }

    #[test]
    fn reversed_dates_keep_form_open() {
        with_runtime(|| {
            provide_session(Some(employee_identity()));
            let vm = use_leave_view_model();
            vm.page.start_create();
            vm.page.update_draft(|d| {
                d.start_date = "2024-02-19".into();
                d.end_date = "2024-02-15".into();
                d.reason = "Oops".into();
            });
            assert!(vm.submit().is_err());
            assert!(vm.page.form_open());
            assert_eq!(vm.page.visible().len(), 1);
            assert!(vm.page.message.get().error.is_some());
        });
    }

    #[test]
    fn admin_approval_sticks() {
        with_runtime(|| {
            provide_session(Some(admin_identity()));
            let vm = use_leave_view_model();
            vm.approve("leave_002").unwrap();
            let reread = vm.page.visible();
            let request = reread.iter().find(|r| r.id == "leave_002").unwrap();
            assert_eq!(request.status, RequestStatus::Approved);
            assert_eq!(vm.reject("leave_002").unwrap_err().code(), "INVALID_TRANSITION");
            assert_eq!(
                vm.page.controller.with(|c| c.find("leave_002").map(|r| r.status)),
                Some(RequestStatus::Approved)
            );
            assert_eq!(vm.balance.get(), None);
        });
    }
}
