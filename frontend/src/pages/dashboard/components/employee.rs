use crate::{
    components::{
        cards::{request_status_badge, Panel, StatCard, StatColor},
        empty_state::EmptyState,
    },
    data::{repository::use_repository, types::Identity},
    pages::dashboard::utils::{employee_stats, recent_leave_requests},
    router::AppRoute,
    utils::format::currency,
};
use leptos::*;

#[component]
pub fn EmployeeDashboard(identity: Identity) -> impl IntoView {
    let repo = use_repository();
    let employee = repo.employee_by_email(&identity.email);
    let stats = employee_stats(employee.as_ref());
    let recent = employee
        .as_ref()
        .map(|e| recent_leave_requests(&repo.leave_requests(), &e.id, 3))
        .unwrap_or_default();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-fg mb-2">"My Dashboard"</h1>
                <p class="text-fg-muted">"Your personal workspace and quick actions"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard title="Monthly Hours" value=stats.hours.to_string()/>
                <StatCard title="Leave Balance" value=format!("{} days", stats.leave_balance) color=StatColor::Green/>
                <StatCard title="Estimated Pay" value=currency(stats.estimated_pay) color=StatColor::Purple/>
            </div>
            <Panel title="Quick Actions">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <a href=AppRoute::Leave.path() class="text-center rounded-md px-4 py-2 bg-action-primary-bg text-action-primary-text">"Request Leave"</a>
                    <a href=AppRoute::WeeklyRequests.path() class="text-center rounded-md px-4 py-2 bg-surface-muted text-fg border border-border">"Submit Weekly Report"</a>
                </div>
            </Panel>
            {match employee {
                Some(employee) => view! {
                    <Panel title="Employee Profile">
                        <div class="space-y-2 text-fg">
                            <p><span class="font-medium">"Position: "</span>{employee.position}</p>
                            <p><span class="font-medium">"Department: "</span>{employee.department}</p>
                            <p><span class="font-medium">"Employee ID: "</span>{employee.id}</p>
                            <p><span class="font-medium">"Join Date: "</span>{employee.join_date.format("%Y-%m-%d").to_string()}</p>
                        </div>
                    </Panel>
                }.into_view(),
                None => view! {
                    <EmptyState
                        title="No employee record"
                        description="Your account is not linked to an employee record yet."
                    />
                }.into_view(),
            }}
            <Panel title="Recent Leave Requests">
                <div class="space-y-3">
                    {if recent.is_empty() {
                        view! { <p class="text-fg-muted text-center py-4">"No recent leave requests"</p> }.into_view()
                    } else {
                        recent.into_iter().map(|request| view! {
                            <div class="flex items-center justify-between p-3 bg-surface-muted rounded-lg">
                                <div>
                                    <p class="font-medium text-fg">{request.leave_type.label()}</p>
                                    <p class="text-sm text-fg-muted">{format!("{} - {}", request.start_date, request.end_date)}</p>
                                </div>
                                {request_status_badge(request.status)}
                            </div>
                        }).collect_view()
                    }}
                </div>
            </Panel>
        </div>
    }
}
