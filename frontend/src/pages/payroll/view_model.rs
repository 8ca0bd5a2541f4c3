use leptos::*;

use crate::{
    data::{
        repository::use_repository,
        types::{Employee, PayrollRecord},
    },
    error::AppError,
    pages::payroll::utils::{
        apply_amount_edit, payroll_csv, payroll_stats, AmountEdit, PayrollStats, DEFAULT_PERIOD,
    },
    state::{message::MessageState, page::CrudPage, session::use_session},
    utils::download::trigger_csv_download,
};

#[derive(Clone, Copy)]
pub struct PayrollViewModel {
    pub page: CrudPage<PayrollRecord>,
    /// Totals over every record; an error when they do not fit in `Money`.
    pub stats: Signal<Result<PayrollStats, AppError>>,
    /// Employee record of a signed-in employee, for the salary summary.
    pub employee: Signal<Option<Employee>>,
}

impl PayrollViewModel {
    pub fn period(&self) -> String {
        self.page
            .controller
            .with(|c| c.category().unwrap_or_default().to_string())
    }

    pub fn select_period(&self, period: String) {
        self.page.set_category(period);
    }

    pub fn edit_amount(&self, edit: AmountEdit) -> Result<(), AppError> {
        let mut outcome = Ok(());
        self.page
            .modify(&edit.id, |record| outcome = apply_amount_edit(record, &edit))?;
        if let Err(err) = &outcome {
            log::warn!("Rejected payroll edit on {}: {}", edit.id, err);
            self.page.message.update(|m| m.set_error(err.clone()));
        } else {
            self.page.message.update(MessageState::clear);
        }
        outcome
    }

    pub fn export_csv(&self) -> Result<String, AppError> {
        let csv = payroll_csv(&self.page.visible())?;
        let filename = format!("payroll_{}.csv", self.period());
        if let Err(err) = trigger_csv_download(&filename, &csv) {
            self.page.message.update(|m| m.set_error(err.clone()));
            return Err(err);
        }
        Ok(csv)
    }
}

pub fn use_payroll_view_model() -> PayrollViewModel {
    let repo = use_repository();
    let session = use_session();
    let page = CrudPage::with_session(repo.payroll_records(), session);
    page.set_category(DEFAULT_PERIOD.to_string());
    let stats = Signal::derive(move || page.controller.with(|c| payroll_stats(c.records())));
    let employee = Signal::derive(move || {
        session
            .identity()
            .filter(|identity| !identity.is_admin())
            .and_then(|identity| repo.employee_by_email(&identity.email))
    });
    PayrollViewModel {
        page,
        stats,
        employee,
    }
}
