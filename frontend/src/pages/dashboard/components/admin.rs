use crate::{
    components::cards::{Panel, StatCard, StatColor, Trend},
    data::repository::use_repository,
    pages::dashboard::utils::{admin_stats, department_bars},
    router::AppRoute,
    utils::format::currency,
};
use leptos::*;

const BAR_COLORS: [&str; 5] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-orange-500",
    "bg-red-500",
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let repo = use_repository();
    let departments = repo.departments();
    let stats = admin_stats(&repo.employees(), &departments, &repo.leave_requests());
    let bars = department_bars(&departments);
    let pending = stats.pending_leaves;

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-fg mb-2">"Admin Dashboard"</h1>
                <p class="text-fg-muted">"Overview of your organization's key metrics"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="Total Employees" value=stats.total_employees.to_string() trend=Trend::up("+5.2%")/>
                <StatCard title="Departments" value=stats.total_departments.to_string() color=StatColor::Green/>
                <StatCard title="Pending Leaves" value=stats.pending_leaves.to_string() color=StatColor::Orange/>
                <StatCard
                    title="Monthly Payroll"
                    value=stats.monthly_payroll.map(currency).unwrap_or_else(|| "n/a".to_string())
                    color=StatColor::Purple
                    trend=Trend::up("+2.1%")
                />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Panel title="Employees by Department">
                    <div class="space-y-4">
                        {bars.into_iter().enumerate().map(|(index, bar)| {
                            let color = BAR_COLORS[index % BAR_COLORS.len()];
                            view! {
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center space-x-3">
                                        <div class=format!("w-3 h-3 rounded-full {}", color)></div>
                                        <span class="text-fg">{bar.name}</span>
                                    </div>
                                    <div class="flex items-center space-x-2">
                                        <div class="w-24 h-2 rounded-full bg-surface-muted overflow-hidden">
                                            <div
                                                class=format!("h-full rounded-full {}", color)
                                                style=format!("width: {:.0}%", bar.width)
                                            ></div>
                                        </div>
                                        <span class="text-sm font-medium text-fg">{bar.count}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Panel>
                <Panel title="Quick Actions">
                    <div class="grid grid-cols-1 gap-4">
                        <a href=AppRoute::Employees.path() class="rounded-lg p-4 bg-surface-muted hover:bg-action-ghost-bg-hover">
                            <p class="font-medium">"Add New Employee"</p>
                            <p class="text-sm text-fg-muted">"Onboard a new team member"</p>
                        </a>
                        <a href=AppRoute::Leave.path() class="rounded-lg p-4 bg-surface-muted hover:bg-action-ghost-bg-hover">
                            <p class="font-medium">"Review Leave Requests"</p>
                            <p class="text-sm text-fg-muted">{format!("{} pending approvals", pending)}</p>
                        </a>
                        <a href=AppRoute::Payroll.path() class="rounded-lg p-4 bg-surface-muted hover:bg-action-ghost-bg-hover">
                            <p class="font-medium">"Process Payroll"</p>
                            <p class="text-sm text-fg-muted">"Generate monthly reports"</p>
                        </a>
                    </div>
                </Panel>
            </div>
        </div>
    }
}
