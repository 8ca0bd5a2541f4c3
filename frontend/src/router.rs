use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RouteGuard,
    data::{repository::MockRepository, types::Role},
    pages::{
        dashboard::DashboardPage, departments::DepartmentsPage, employees::EmployeesPage,
        leave::LeavePage, login::LoginPage, payroll::PayrollPage, profile::ProfilePage,
        register::RegisterPage, reports::ReportsPage, weekly_requests::WeeklyRequestsPage,
    },
    state::session::SessionProvider,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Employees,
    Departments,
    Leave,
    Payroll,
    Reports,
    WeeklyRequests,
    Profile,
    Login,
    Register,
}

impl AppRoute {
    pub const ALL: [AppRoute; 10] = [
        AppRoute::Dashboard,
        AppRoute::Employees,
        AppRoute::Departments,
        AppRoute::Leave,
        AppRoute::Payroll,
        AppRoute::Reports,
        AppRoute::WeeklyRequests,
        AppRoute::Profile,
        AppRoute::Login,
        AppRoute::Register,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Employees => "/employees",
            AppRoute::Departments => "/departments",
            AppRoute::Leave => "/leave",
            AppRoute::Payroll => "/payroll",
            AppRoute::Reports => "/reports",
            AppRoute::WeeklyRequests => "/weekly-requests",
            AppRoute::Profile => "/profile",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
        }
    }

    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            AppRoute::Employees | AppRoute::Departments | AppRoute::Reports
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Admin,
    Employee,
}

pub fn dashboard_view_for(role: Role) -> DashboardView {
    match role {
        Role::Admin => DashboardView::Admin,
        Role::Employee => DashboardView::Employee,
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(MockRepository::new());
    view! {
        <Title text="Workforce"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path=AppRoute::Login.path() view=LoginPage/>
                    <Route path=AppRoute::Register.path() view=RegisterPage/>
                    <Route path=AppRoute::Dashboard.path() view=ProtectedDashboard/>
                    <Route path=AppRoute::Employees.path() view=ProtectedEmployees/>
                    <Route path=AppRoute::Departments.path() view=ProtectedDepartments/>
                    <Route path=AppRoute::Leave.path() view=ProtectedLeave/>
                    <Route path=AppRoute::Payroll.path() view=ProtectedPayroll/>
                    <Route path=AppRoute::Reports.path() view=ProtectedReports/>
                    <Route path=AppRoute::WeeklyRequests.path() view=ProtectedWeeklyRequests/>
                    <Route path=AppRoute::Profile.path() view=ProtectedProfile/>
                    <Route path="/" view=ToDashboard/>
                    <Route path="/*any" view=ToDashboard/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ToDashboard() -> impl IntoView {
    view! { <Redirect path=AppRoute::Dashboard.path()/> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::Dashboard><DashboardPage/></RouteGuard> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::Employees><EmployeesPage/></RouteGuard> }
}

#[component]
fn ProtectedDepartments() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::Departments><DepartmentsPage/></RouteGuard> }
}

#[component]
fn ProtectedLeave() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::Leave><LeavePage/></RouteGuard> }
}

#[component]
fn ProtectedPayroll() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::Payroll><PayrollPage/></RouteGuard> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::Reports><ReportsPage/></RouteGuard> }
}

#[component]
fn ProtectedWeeklyRequests() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::WeeklyRequests><WeeklyRequestsPage/></RouteGuard> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RouteGuard route=AppRoute::Profile><ProfilePage/></RouteGuard> }
}
