use std::collections::BTreeSet;

use chrono::NaiveDate;
use leptos::*;

use crate::{
    components::table::{Column, FieldValue, TableRecord},
    data::types::{Money, PayrollField, PayrollRecord},
    error::{AppError, Violations},
    state::crud::{CreateContext, CrudRecord},
    utils::{
        download::build_csv,
        format::{average_half_up, parse_amount, total_amount},
    },
};

pub const DEFAULT_PERIOD: &str = "2024-01";

/// Periods offered even when no record carries them yet.
const KNOWN_PERIODS: [&str; 3] = ["2024-01", "2023-12", "2023-11"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PayrollDraft {
    pub employee_id: String,
    pub employee_name: String,
    pub base_salary: String,
    pub overtime: String,
    pub bonus: String,
    pub deductions: String,
    pub pay_period: String,
}

impl PayrollDraft {
    fn amounts(&self) -> Result<[Money; 4], AppError> {
        let mut violations = Violations::new();
        let mut amounts = [0; 4];
        let inputs = [
            (&self.base_salary, "Base salary"),
            (&self.overtime, "Overtime"),
            (&self.bonus, "Bonus"),
            (&self.deductions, "Deductions"),
        ];
        for (slot, (input, label)) in amounts.iter_mut().zip(inputs) {
            if input.trim().is_empty() {
                continue;
            }
            match parse_amount(input, label) {
                Ok(value) => *slot = value,
                Err(err) => {
                    for detail in err.details() {
                        violations.push(detail.clone());
                    }
                }
            }
        }
        if !is_pay_period(&self.pay_period) {
            violations.push("Pay period must look like YYYY-MM");
        }
        violations.finish()?;
        Ok(amounts)
    }

    /// All four amounts land or none do.
    fn write_amounts(record: &mut PayrollRecord, amounts: [Money; 4]) -> Result<(), AppError> {
        let mut updated = record.clone();
        for (field, value) in PayrollField::ALL.into_iter().zip(amounts) {
            updated.set_amount(field, value)?;
        }
        *record = updated;
        Ok(())
    }
}

impl CrudRecord for PayrollRecord {
    type Draft = PayrollDraft;
    const ID_PREFIX: &'static str = "pay";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> PayrollDraft {
        PayrollDraft {
            employee_id: self.employee_id.clone(),
            employee_name: self.employee_name.clone(),
            base_salary: self.base_salary.to_string(),
            overtime: self.overtime.to_string(),
            bonus: self.bonus.to_string(),
            deductions: self.deductions.to_string(),
            pay_period: self.pay_period.clone(),
        }
    }

    fn create(id: String, draft: &PayrollDraft, _ctx: &CreateContext) -> Result<Self, AppError> {
        Violations::new()
            .require(&draft.employee_id, "Employee")
            .require(&draft.employee_name, "Employee name")
            .finish()?;
        let amounts = draft.amounts()?;
        let mut record = PayrollRecord {
            id,
            employee_id: draft.employee_id.clone(),
            employee_name: draft.employee_name.clone(),
            base_salary: 0,
            overtime: 0,
            bonus: 0,
            deductions: 0,
            net_pay: 0,
            pay_period: draft.pay_period.trim().to_string(),
        };
        PayrollDraft::write_amounts(&mut record, amounts)?;
        Ok(record)
    }

    fn apply(&mut self, draft: &PayrollDraft) -> Result<(), AppError> {
        let amounts = draft.amounts()?;
        PayrollDraft::write_amounts(self, amounts)?;
        self.pay_period = draft.pay_period.trim().to_string();
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.employee_name.to_lowercase().contains(needle)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.pay_period)
    }

    fn owner_employee_id(&self) -> Option<&str> {
        Some(&self.employee_id)
    }
}

impl TableRecord for PayrollRecord {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        if let Some(field) = PayrollField::ALL.into_iter().find(|f| f.key() == key) {
            return Some(FieldValue::Money(self.amount(field)));
        }
        match key {
            "employeeName" => Some(FieldValue::text(&self.employee_name)),
            "netPay" => Some(FieldValue::Money(self.net_pay)),
            "payPeriod" => Some(FieldValue::text(&self.pay_period)),
            _ => None,
        }
    }
}

pub fn is_pay_period(value: &str) -> bool {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").is_ok()
        && value.trim().len() == 7
}

/// `2024-01` as `January 2024`; unparseable periods are shown as-is.
pub fn period_label(period: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d")
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|_| period.to_string())
}

/// Newest first.
pub fn period_options(records: &[PayrollRecord]) -> Vec<(String, String)> {
    let periods: BTreeSet<String> = records
        .iter()
        .map(|r| r.pay_period.clone())
        .chain(KNOWN_PERIODS.iter().map(|p| p.to_string()))
        .collect();
    periods
        .into_iter()
        .rev()
        .map(|period| {
            let label = period_label(&period);
            (period, label)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayrollStats {
    pub total: Money,
    pub average: Money,
    pub employees_paid: usize,
}

/// Net pay totals over every record, rounding the average half up.
pub fn payroll_stats(records: &[PayrollRecord]) -> Result<PayrollStats, AppError> {
    let total = total_amount(records.iter().map(|r| r.net_pay))?;
    Ok(PayrollStats {
        total,
        average: average_half_up(total, records.len()),
        employees_paid: records.len(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountEdit {
    pub id: String,
    pub field: PayrollField,
    pub input: String,
}

/// Applies one inline edit; an unparseable amount leaves the record as it was.
pub fn apply_amount_edit(record: &mut PayrollRecord, edit: &AmountEdit) -> Result<(), AppError> {
    let value = parse_amount(&edit.input, field_label(edit.field))?;
    record.set_amount(edit.field, value)
}

fn field_label(field: PayrollField) -> &'static str {
    match field {
        PayrollField::BaseSalary => "Base Salary",
        PayrollField::Overtime => "Overtime",
        PayrollField::Bonus => "Bonus",
        PayrollField::Deductions => "Deductions",
    }
}

/// Admin columns take an editor and render amounts as inputs; the employee view has no
/// employee column and plain amounts.
pub fn payroll_columns(editor: Option<Callback<AmountEdit>>) -> Vec<Column<PayrollRecord>> {
    let mut columns = Vec::with_capacity(7);
    if editor.is_some() {
        columns.push(Column::new("employeeName", "Employee"));
    }
    for field in PayrollField::ALL {
        let column = Column::new(field.key(), field_label(field));
        columns.push(match editor {
            Some(editor) => column.with_render(move |value, record: &PayrollRecord| {
                let id = record.id.clone();
                let current = match value {
                    FieldValue::Money(amount) => amount.to_string(),
                    other => other.to_string(),
                };
                view! {
                    <input
                        type="number"
                        class="w-24 px-2 py-1 border border-border rounded text-sm"
                        value=current
                        on:change=move |ev| editor.call(AmountEdit {
                            id: id.clone(),
                            field,
                            input: event_target_value(&ev),
                        })
                    />
                }
                .into_view()
            }),
            None => column,
        });
    }
    columns.push(Column::new("netPay", "Net Pay").with_render(|value, _| {
        view! { <span class="font-semibold text-green-600">{value.to_string()}</span> }.into_view()
    }));
    columns.push(Column::new("payPeriod", "Pay Period"));
    columns
}

pub const CSV_HEADERS: [&str; 7] = [
    "Employee",
    "Base Salary",
    "Overtime",
    "Bonus",
    "Deductions",
    "Net Pay",
    "Pay Period",
];

pub fn payroll_csv(records: &[PayrollRecord]) -> Result<String, AppError> {
    build_csv(
        &CSV_HEADERS,
        records.iter().map(|r| {
            vec![
                r.employee_name.clone(),
                r.base_salary.to_string(),
                r.overtime.to_string(),
                r.bonus.to_string(),
                r.deductions.to_string(),
                r.net_pay.to_string(),
                r.pay_period.clone(),
            ]
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{seed, types::MAX_AMOUNT},
        state::crud::{CrudController, Viewer},
    };

    fn ctx() -> CreateContext {
        CreateContext {
            today: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            submitter: None,
            default_leave_balance: 20,
        }
    }

    #[test]
    fn inline_edits_keep_net_pay_exact() {
        let mut controller = CrudController::new(seed::payroll_records());
        let edits = [
            (PayrollField::BaseSalary, "7000"),
            (PayrollField::Overtime, "0"),
            (PayrollField::Bonus, "333"),
            (PayrollField::Deductions, "1234"),
            (PayrollField::Bonus, "-50"),
        ];
        for (field, input) in edits {
            let edit = AmountEdit {
                id: "pay_001".into(),
                field,
                input: input.into(),
            };
            let mut result = Ok(());
            controller
                .modify("pay_001", |record| result = apply_amount_edit(record, &edit))
                .unwrap();
            result.unwrap();
            let record = controller.find("pay_001").unwrap();
            assert_eq!(
                record.net_pay,
                record.base_salary + record.overtime + record.bonus - record.deductions
            );
        }
        assert_eq!(controller.find("pay_001").unwrap().net_pay, 7000 - 50 - 1234);
    }

    #[test]
    fn bad_inline_input_changes_nothing() {
        let mut record = seed::payroll_records().remove(0);
        let before = record.clone();
        let edit = AmountEdit {
            id: record.id.clone(),
            field: PayrollField::Bonus,
            input: "12.5".into(),
        };
        assert!(apply_amount_edit(&mut record, &edit).is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn stats_over_seeded_records() {
        let stats = payroll_stats(&seed::payroll_records()).unwrap();
        assert_eq!(stats.total, 5550 + 5767);
        assert_eq!(stats.average, 5659);
        assert_eq!(stats.employees_paid, 2);
        assert_eq!(payroll_stats(&[]).unwrap(), PayrollStats::default());
    }

    #[test]
    fn stats_report_overflowing_totals() {
        let mut records = seed::payroll_records();
        for record in &mut records {
            record.net_pay = Money::MAX / 2 + 1;
        }
        assert_eq!(payroll_stats(&records).unwrap_err().code(), "VALIDATION_ERROR");
    }

    #[test]
    fn oversized_inline_amount_is_rejected() {
        let mut record = seed::payroll_records().remove(0);
        let before = record.clone();
        let edit = AmountEdit {
            id: record.id.clone(),
            field: PayrollField::BaseSalary,
            input: "9223372036854775807".into(),
        };
        let err = apply_amount_edit(&mut record, &edit).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(record, before);

        let largest = AmountEdit {
            input: MAX_AMOUNT.to_string(),
            ..edit
        };
        apply_amount_edit(&mut record, &largest).unwrap();
        assert_eq!(record.net_pay, MAX_AMOUNT + 500 - 1200);
    }

    #[test]
    fn periods_are_labelled_newest_first() {
        let options = period_options(&seed::payroll_records());
        assert_eq!(options[0], ("2024-01".to_string(), "January 2024".to_string()));
        assert_eq!(options.last().unwrap().1, "November 2023");
        assert_eq!(period_label("garbage"), "garbage");
    }

    #[test]
    fn employee_scope_and_period_filter() {
        let mut controller = CrudController::new(seed::payroll_records());
        controller.set_category(DEFAULT_PERIOD);
        let mike = Viewer::Employee {
            employee_id: Some("emp_002".into()),
        };
        let mine = controller.visible(&mike);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "pay_002");
        controller.set_category("2023-12");
        assert!(controller.visible(&Viewer::Admin).is_empty());
    }

    #[test]
    fn create_computes_net_pay() {
        let draft = PayrollDraft {
            employee_id: "emp_003".into(),
            employee_name: "Emily Chen".into(),
            base_salary: "5000".into(),
            overtime: "".into(),
            bonus: "250".into(),
            deductions: "900".into(),
            pay_period: "2024-02".into(),
        };
        let record = PayrollRecord::create("pay_x".into(), &draft, &ctx()).unwrap();
        assert_eq!(record.net_pay, 4350);
        let mut bad = draft;
        bad.pay_period = "Feb".into();
        assert!(PayrollRecord::create("pay_y".into(), &bad, &ctx()).is_err());
    }

    #[test]
    fn employee_columns_hide_the_employee() {
        assert_eq!(payroll_columns(None).len(), 6);
        assert!(payroll_columns(None).iter().all(|c| c.key != "employeeName"));
    }

    #[test]
    fn csv_lists_visible_records() {
        let csv = payroll_csv(&seed::payroll_records()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Employee,Base Salary,Overtime,Bonus,Deductions,Net Pay,Pay Period")
        );
        assert_eq!(lines.next(), Some("Sarah Johnson,6250,500,0,1200,5550,2024-01"));
        assert_eq!(lines.count(), 1);
    }
}
