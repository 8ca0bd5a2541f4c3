use crate::{
    components::layout::Layout,
    pages::dashboard::components::{admin::AdminDashboard, employee::EmployeeDashboard},
    router::{dashboard_view_for, DashboardView},
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let session = use_session();
    view! {
        <Layout>
            {move || {
                session.identity().map(|identity| match dashboard_view_for(identity.role()) {
                    DashboardView::Admin => view! { <AdminDashboard/> }.into_view(),
                    DashboardView::Employee => view! { <EmployeeDashboard identity=identity/> }.into_view(),
                })
            }}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_identity, employee_identity};
    use crate::test_support::ssr::render_signed_in;

    #[test]
    fn admin_sees_organization_metrics() {
        let html = render_signed_in(admin_identity(), || view! { <DashboardPanel/> });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Employees by Department"));
        assert!(html.contains("1 pending approvals"));
        assert!(!html.contains("My Dashboard"));
    }

    #[test]
    fn employee_sees_personal_metrics() {
        let html = render_signed_in(employee_identity(), || view! { <DashboardPanel/> });
        assert!(html.contains("My Dashboard"));
        assert!(html.contains("15 days"));
        assert!(html.contains("$6,250"));
        assert!(html.contains("Vacation"));
        assert!(!html.contains("No recent leave requests"));
        assert!(!html.contains("Admin Dashboard"));
    }
}
