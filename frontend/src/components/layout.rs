use crate::{
    data::types::{Identity, Role},
    router::AppRoute,
    state::{message::MessageState, session::use_session},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub route: AppRoute,
    pub label: &'static str,
}

const ADMIN_MENU: &[MenuItem] = &[
    MenuItem { route: AppRoute::Dashboard, label: "Dashboard" },
    MenuItem { route: AppRoute::Employees, label: "Employees" },
    MenuItem { route: AppRoute::Departments, label: "Departments" },
    MenuItem { route: AppRoute::Leave, label: "Leave" },
    MenuItem { route: AppRoute::Payroll, label: "Payroll" },
    MenuItem { route: AppRoute::Reports, label: "Reports" },
    MenuItem { route: AppRoute::WeeklyRequests, label: "Weekly Requests" },
];

const EMPLOYEE_MENU: &[MenuItem] = &[
    MenuItem { route: AppRoute::Dashboard, label: "Dashboard" },
    MenuItem { route: AppRoute::Leave, label: "Leave" },
    MenuItem { route: AppRoute::Payroll, label: "Payroll Summary" },
    MenuItem { route: AppRoute::WeeklyRequests, label: "Weekly Request" },
    MenuItem { route: AppRoute::Profile, label: "Profile" },
];

pub fn menu_items(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Employee => EMPLOYEE_MENU,
    }
}

pub fn welcome_line(identity: &Identity) -> String {
    if identity.is_admin() {
        format!("Welcome Admin {}", identity.name)
    } else {
        format!("Welcome {}", identity.name)
    }
}

fn portal_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "System Administrator",
        Role::Employee => "Employee Portal",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let user = Signal::derive(move || session.state.get().user);
    // The route guard notices the signed-out session and redirects to the login page.
    let on_logout = move |_| session.logout();
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border px-6 py-4">
            <div class="flex items-center justify-between">
                <div class="flex-1">
                    <h1 class="text-2xl font-bold text-fg">
                        {move || user.get().as_ref().map(welcome_line).unwrap_or_default()}
                    </h1>
                    <p class="text-sm text-fg-muted mt-1">
                        {move || user.get().map(|u| portal_label(u.role())).unwrap_or_default()}
                    </p>
                </div>
                <div class="flex items-center space-x-4">
                    <div class="flex items-center space-x-3 bg-surface-muted px-4 py-2 rounded-lg">
                        <div class="text-sm">
                            <p class="font-medium text-fg">{move || user.get().map(|u| u.name).unwrap_or_default()}</p>
                            <p class="text-fg-muted capitalize">{move || user.get().map(|u| u.role().as_str()).unwrap_or_default()}</p>
                        </div>
                    </div>
                    <button
                        on:click=on_logout
                        class="px-4 py-2 rounded-lg text-sm font-medium text-status-error-text bg-status-error-bg hover:opacity-90"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let (collapsed, set_collapsed) = create_signal(false);
    let items = move || {
        session
            .state
            .get()
            .role()
            .map(menu_items)
            .unwrap_or_default()
    };
    view! {
        <aside class=move || {
            if collapsed.get() { "w-20 bg-sidebar text-white min-h-screen" } else { "w-64 bg-sidebar text-white min-h-screen" }
        }>
            <div class="p-6 border-b border-border flex items-center justify-between">
                <Show when=move || !collapsed.get()>
                    <div>
                        <h2 class="text-xl font-bold">"EMS Portal"</h2>
                        <p class="text-sm opacity-75">"Employee Management"</p>
                    </div>
                </Show>
                <button
                    type="button"
                    class="p-2 rounded-lg hover:bg-action-ghost-bg-hover"
                    aria-expanded=move || (!collapsed.get()).to_string()
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "☰" } else { "✕" }}
                </button>
            </div>
            <nav class="p-4 space-y-2">
                {move || items().iter().map(|item| view! {
                    <a
                        href=item.route.path()
                        class="flex items-center px-4 py-3 rounded-lg hover:bg-action-ghost-bg-hover"
                    >
                        <Show when=move || !collapsed.get()>
                            <span class="font-medium">{item.label}</span>
                        </Show>
                    </a>
                }).collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-8 px-6">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center">
                <div>
                    <p class="text-fg-muted text-sm">"© 2024 Employee Management System. All rights reserved."</p>
                    <p class="text-fg-muted text-xs mt-1">{concat!("Version ", env!("CARGO_PKG_VERSION"))}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex">
            <Sidebar/>
            <div class="flex-1 flex flex-col">
                <Header/>
                <main class="flex-1 max-w-7xl w-full mx-auto py-6 sm:px-6 lg:px-8">
                    {children()}
                </main>
                <Footer/>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Success or error banner for a `MessageState`.
#[component]
pub fn MessageBanner(message: RwSignal<MessageState>) -> impl IntoView {
    view! {
        {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg/> })}
        <crate::components::error::InlineErrorMessage
            error=Signal::derive(move || message.get().error)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_identity, employee_identity};

    #[test]
    fn menus_follow_role() {
        let admin: Vec<_> = menu_items(Role::Admin).iter().map(|i| i.route).collect();
        assert!(admin.contains(&AppRoute::Employees));
        assert!(admin.contains(&AppRoute::Reports));
        assert!(!admin.contains(&AppRoute::Profile));

        let employee: Vec<_> = menu_items(Role::Employee).iter().map(|i| i.route).collect();
        assert!(employee.iter().all(|route| !route.requires_admin()));
        assert!(employee.contains(&AppRoute::Profile));
    }

    #[test]
    fn welcome_line_marks_admins() {
        assert_eq!(welcome_line(&admin_identity()), "Welcome Admin John Smith");
        assert_eq!(welcome_line(&employee_identity()), "Welcome Sarah Johnson");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_identity, employee_identity, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_layout_shows_admin_menu() {
        let html = render_to_string(move || {
            provide_session(Some(admin_identity()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("Welcome Admin John Smith"));
        assert!(html.contains("/employees"));
        assert!(html.contains("System Administrator"));
    }

    #[test]
    fn employee_layout_hides_admin_menu() {
        let html = render_to_string(move || {
            provide_session(Some(employee_identity()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("Payroll Summary"));
        assert!(!html.contains("/employees"));
        assert!(html.contains("Employee Portal"));
    }

    #[test]
    fn message_banner_shows_success() {
        let html = render_to_string(move || {
            let message = create_rw_signal(MessageState::default());
            message.update(|m| m.set_success("Saved"));
            view! { <MessageBanner message=message/> }
        });
        assert!(html.contains("Saved"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
