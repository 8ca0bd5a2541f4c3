use leptos::*;

use crate::{
    data::{
        repository::use_repository,
        types::{RequestStatus, WeeklyRequest},
    },
    error::AppError,
    pages::weekly_requests::utils::WeeklyDraft,
    state::{page::CrudPage, session::use_session},
    utils::time::today_in_app_tz,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeeklyCounters {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
}

#[derive(Clone, Copy)]
pub struct WeeklyViewModel {
    pub page: CrudPage<WeeklyRequest>,
    pub counters: Signal<WeeklyCounters>,
    email: Signal<String>,
}

impl WeeklyViewModel {
    /// Opens the form on the current week, addressed from the employee's email.
    pub fn start_report(&self) {
        let draft = WeeklyDraft::prefilled(today_in_app_tz(), &self.email.get_untracked());
        self.page.start_create();
        self.page.update_draft(|d| *d = draft);
    }

    pub fn submit(&self) -> Result<String, AppError> {
        self.page.submit("Weekly report submitted")
    }
}

pub fn use_weekly_view_model() -> WeeklyViewModel {
    let repo = use_repository();
    let session = use_session();
    let page = CrudPage::with_session(repo.weekly_requests(), session);
    let counters = Signal::derive(move || WeeklyCounters {
        total: page.scoped().len(),
        pending: page.count_by_status(RequestStatus::Pending),
        approved: page.count_by_status(RequestStatus::Approved),
    });
    let email = Signal::derive(move || {
        session
            .identity()
            .map(|identity| {
                repo.employee_by_email(&identity.email)
                    .map(|employee| employee.email)
                    .unwrap_or(identity.email)
            })
            .unwrap_or_default()
    });
    WeeklyViewModel {
        page,
        counters,
        email,
    }
}
