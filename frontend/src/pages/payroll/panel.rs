use crate::{
    components::{
        cards::{StatCard, StatColor, Trend},
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::{Layout, MessageBanner},
        table::RecordTable,
    },
    data::repository::use_repository,
    error::AppError,
    pages::payroll::{
        utils::{payroll_columns, period_options, AmountEdit, PayrollStats},
        view_model::use_payroll_view_model,
    },
    utils::format::{currency, monthly_from_annual},
};
use leptos::*;

fn stat_text(
    stats: Result<PayrollStats, AppError>,
    show: impl FnOnce(&PayrollStats) -> String,
) -> String {
    stats.map(|stats| show(&stats)).unwrap_or_else(|_| "n/a".to_string())
}

#[component]
pub fn PayrollPanel() -> impl IntoView {
    let vm = use_payroll_view_model();
    let page = vm.page;
    let is_admin = page.is_admin();
    let periods = period_options(&use_repository().payroll_records());
    let editor = is_admin.then(|| {
        Callback::new(move |edit: AmountEdit| {
            let _ = vm.edit_amount(edit);
        })
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-fg mb-2">
                            {if is_admin { "Payroll Management" } else { "Payroll Summary" }}
                        </h1>
                        <p class="text-fg-muted">
                            {if is_admin { "Manage employee compensation and payroll" } else { "View your salary and payment history" }}
                        </p>
                    </div>
                    <Show when=move || is_admin>
                        <Button variant=ButtonVariant::Secondary on:click=move |_| { let _ = vm.export_csv(); }>
                            "Export CSV"
                        </Button>
                    </Show>
                </div>

                <MessageBanner message=page.message/>

                <Show when=move || is_admin>
                    <InlineErrorMessage error=Signal::derive(move || vm.stats.get().err())/>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard
                            title="Total Payroll"
                            value=Signal::derive(move || stat_text(vm.stats.get(), |s| currency(s.total)))
                            color=StatColor::Green
                            trend=Trend::up("+3.2%")
                        />
                        <StatCard
                            title="Average Salary"
                            value=Signal::derive(move || stat_text(vm.stats.get(), |s| currency(s.average)))
                        />
                        <StatCard
                            title="Employees Paid"
                            value=Signal::derive(move || stat_text(vm.stats.get(), |s| s.employees_paid.to_string()))
                            color=StatColor::Purple
                        />
                    </div>
                </Show>

                {move || vm.employee.get().map(|employee| view! {
                    <div class="bg-gradient-to-r from-blue-500 to-blue-600 rounded-xl p-6 text-white">
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            <div>
                                <h3 class="text-lg font-semibold mb-2">"Annual Salary"</h3>
                                <p class="text-2xl font-bold">{currency(employee.salary)}</p>
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold mb-2">"Monthly Gross"</h3>
                                <p class="text-2xl font-bold">{currency(monthly_from_annual(employee.salary))}</p>
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold mb-2">"Hours/Month"</h3>
                                <p class="text-2xl font-bold">{employee.hours}</p>
                            </div>
                        </div>
                    </div>
                })}

                <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
                    <div class="flex items-center space-x-4">
                        <label class="text-sm font-medium text-fg">"Pay Period:"</label>
                        <select
                            class="px-3 py-2 border border-border rounded-lg"
                            on:change=move |ev| vm.select_period(event_target_value(&ev))
                        >
                            {periods.into_iter().map(|(value, label)| {
                                let selected_value = value.clone();
                                view! {
                                    <option value=value selected=move || vm.period() == selected_value>{label}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <RecordTable columns=payroll_columns(editor) records=Signal::derive(move || page.visible())/>

                <Show when=move || is_admin>
                    <div class="bg-blue-50 border border-blue-200 rounded-lg p-4">
                        <h3 class="font-semibold text-blue-800 mb-2">"Payroll Management Instructions:"</h3>
                        <ul class="text-sm text-blue-700 space-y-1">
                            <li>"Edit any amount directly in the table"</li>
                            <li>"Net pay is recalculated whenever an amount changes"</li>
                            <li>"Export CSV downloads the records of the selected period"</li>
                        </ul>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_identity, employee_identity};
    use crate::test_support::ssr::render_signed_in;

    #[test]
    fn admin_gets_editable_amounts_and_stats() {
        let html = render_signed_in(admin_identity(), || view! { <PayrollPanel/> });
        assert!(html.contains("Payroll Management"));
        assert!(html.contains("Total Payroll"));
        assert!(html.contains("$11,317"));
        assert!(html.contains("type=\"number\""));
        assert!(html.contains("Mike Davis"));
        assert!(html.contains("January 2024"));
    }

    #[test]
    fn employee_sees_own_summary_only() {
        let html = render_signed_in(employee_identity(), || view! { <PayrollPanel/> });
        assert!(html.contains("Payroll Summary"));
        assert!(html.contains("Annual Salary"));
        assert!(html.contains("$5,550"));
        assert!(!html.contains("Mike Davis"));
        assert!(!html.contains("type=\"number\""));
        assert!(!html.contains("Export CSV"));
    }
}
