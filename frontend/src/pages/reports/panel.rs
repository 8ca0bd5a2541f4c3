use crate::{
    components::{
        cards::{Panel, StatCard, StatColor},
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::{Layout, MessageBanner},
    },
    error::AppError,
    data::repository::use_repository,
    pages::reports::utils::{
        department_stats, leave_stats, report_csv, report_filename, salary_stats, ReportKind,
    },
    state::message::MessageState,
    utils::{download::trigger_csv_download, format::currency},
};
use leptos::*;

const DOT_COLORS: [&str; 5] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-orange-500",
    "bg-red-500",
];

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let repo = use_repository();
    let (selected, set_selected) = create_signal(ReportKind::default());
    let message = create_rw_signal(MessageState::default());

    let export_repo = repo.clone();
    let on_export = move |_| {
        let kind = selected.get_untracked();
        let result = report_csv(kind, &export_repo)
            .and_then(|csv| trigger_csv_download(&report_filename(kind), &csv));
        message.update(|m| m.apply(result, format!("{} exported", kind.title())));
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-fg mb-2">"Reports & Analytics"</h1>
                        <p class="text-fg-muted">"Generate comprehensive organizational reports"</p>
                    </div>
                    <Button variant=ButtonVariant::Secondary on:click=on_export>"Export CSV"</Button>
                </div>

                <MessageBanner message=message/>

                <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
                    <h3 class="text-lg font-semibold text-fg mb-4">"Select Report Type"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {ReportKind::ALL.into_iter().map(|kind| view! {
                            <button
                                class=move || if selected.get() == kind {
                                    "p-4 rounded-lg border-2 border-blue-500 bg-blue-50"
                                } else {
                                    "p-4 rounded-lg border-2 border-border hover:border-fg-muted"
                                }
                                on:click=move |_| set_selected.set(kind)
                            >
                                <h4 class="font-medium text-fg">{kind.title()}</h4>
                                <p class="text-sm text-fg-muted">{kind.description()}</p>
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                {move || match selected.get() {
                    ReportKind::Department => view! { <DepartmentReport/> }.into_view(),
                    ReportKind::Leave => view! { <LeaveReport/> }.into_view(),
                    ReportKind::Payroll => view! { <PayrollReport/> }.into_view(),
                }}
            </div>
        </Layout>
    }
}

fn report_error(error: AppError) -> View {
    view! { <InlineErrorMessage error=Signal::derive(move || Some(error.clone()))/> }.into_view()
}

#[component]
fn DepartmentReport() -> impl IntoView {
    let repo = use_repository();
    let stats = match department_stats(&repo.departments(), &repo.employees()) {
        Ok(stats) => stats,
        Err(err) => return report_error(err),
    };
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <StatCard title="Total Departments" value=repo.departments().len().to_string()/>
                <StatCard title="Total Employees" value=repo.employees().len().to_string() color=StatColor::Green/>
            </div>
            <Panel title="Department Breakdown">
                <div class="space-y-4">
                    {stats.into_iter().enumerate().map(|(index, stat)| view! {
                        <div class="flex items-center justify-between p-4 bg-surface-muted rounded-lg">
                            <div class="flex items-center space-x-4">
                                <div class=format!("w-4 h-4 rounded-full {}", DOT_COLORS[index % DOT_COLORS.len()])></div>
                                <div>
                                    <h4 class="font-medium text-fg">{stat.name.clone()}</h4>
                                    <p class="text-sm text-fg-muted">{format!("{} employees", stat.employees)}</p>
                                </div>
                            </div>
                            <div class="text-right">
                                <p class="font-semibold text-fg">{currency(stat.total_salary)}</p>
                                <p class="text-sm text-fg-muted">{format!("Avg: {}", currency(stat.average_salary()))}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </Panel>
        </div>
    }
    .into_view()
}

#[component]
fn LeaveReport() -> impl IntoView {
    let stats = leave_stats(&use_repository().leave_requests());
    let bars = [
        ("Approved", stats.approved, "bg-green-500"),
        ("Pending", stats.pending, "bg-orange-500"),
        ("Rejected", stats.rejected, "bg-red-500"),
    ];
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard title="Total Requests" value=stats.total.to_string()/>
                <StatCard title="Approved" value=stats.approved.to_string() color=StatColor::Green/>
                <StatCard title="Pending" value=stats.pending.to_string() color=StatColor::Orange/>
                <StatCard title="Rejected" value=stats.rejected.to_string() color=StatColor::Red/>
            </div>
            <Panel title="Leave Status Distribution">
                <div class="space-y-4">
                    {bars.into_iter().map(|(label, count, color)| view! {
                        <div class="flex items-center justify-between">
                            <span class="text-fg">{label}</span>
                            <div class="flex items-center space-x-2">
                                <div class="w-32 h-2 rounded-full bg-surface-muted overflow-hidden">
                                    <div class=format!("h-full rounded-full {}", color) style=format!("width: {:.0}%", stats.share(count))></div>
                                </div>
                                <span class="text-sm font-medium text-fg">{count}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </Panel>
        </div>
    }
}

#[component]
fn PayrollReport() -> impl IntoView {
    let repo = use_repository();
    let (stats, departments) = match salary_stats(&repo.payroll_records(), &repo.employees())
        .and_then(|stats| Ok((stats, department_stats(&repo.departments(), &repo.employees())?)))
    {
        Ok(pair) => pair,
        Err(err) => return report_error(err),
    };
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard title="Total Payroll" value=currency(stats.total_payroll) color=StatColor::Green/>
                <StatCard title="Average Salary" value=currency(stats.average_salary)/>
                <StatCard title="Highest Paid" value=currency(stats.highest_paid) color=StatColor::Purple/>
                <StatCard title="Lowest Paid" value=currency(stats.lowest_paid) color=StatColor::Orange/>
            </div>
            <Panel title="Salary by Department">
                <div class="space-y-4">
                    {departments.into_iter().map(|stat| view! {
                        <div class="flex items-center justify-between p-4 bg-surface-muted rounded-lg">
                            <span class="font-medium text-fg">{stat.name.clone()}</span>
                            <span class="text-fg-muted">{format!("Avg: {}", currency(stat.average_salary()))}</span>
                        </div>
                    }).collect_view()}
                </div>
            </Panel>
        </div>
    }
    .into_view()
}
