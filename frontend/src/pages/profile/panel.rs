use crate::{
    components::{
        common::{Button, ButtonSize, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        forms::{FormModal, TextField},
        layout::{Layout, MessageBanner},
    },
    data::types::Employee,
    pages::{
        employees::utils::status_badge,
        profile::{utils::PasswordChange, view_model::use_profile_view_model},
    },
    state::session::use_session,
};
use leptos::{ev::SubmitEvent, *};

fn detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="p-3 bg-surface-muted rounded-lg">
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="text-fg">{value}</p>
        </div>
    }
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let session = use_session();
    let role = move || {
        session
            .identity()
            .map(|identity| identity.role().as_str())
            .unwrap_or_default()
    };

    let password = vm.password;
    let field = move |get: fn(&PasswordChange) -> String| Signal::derive(move || password.with(get));
    let set = move |put: fn(&mut PasswordChange, String)| {
        Callback::new(move |value: String| password.update(|p| put(p, value)))
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = vm.change_password();
    };

    let card = move |employee: Employee| {
        view! {
            <div class="bg-surface-elevated rounded-xl shadow-sm border border-border overflow-hidden">
                <div class="bg-gradient-to-r from-blue-600 to-blue-700 px-6 py-8 text-white">
                    <h2 class="text-2xl font-bold">{employee.name.clone()}</h2>
                    <p class="opacity-90">{employee.position.clone()}</p>
                    <p class="opacity-75 text-sm">{format!("{} Department", employee.department)}</p>
                </div>
                <div class="p-6 grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="space-y-3">
                        <h3 class="text-lg font-semibold text-fg mb-4">"Personal Information"</h3>
                        {detail("Full Name", employee.name.clone())}
                        {detail("Email Address", employee.email.clone())}
                        {detail("Role", role().to_string())}
                    </div>
                    <div class="space-y-3">
                        <h3 class="text-lg font-semibold text-fg mb-4">"Employment Details"</h3>
                        {detail("Employee ID", employee.id.clone())}
                        {detail("Position", employee.position.clone())}
                        {detail("Department", employee.department.clone())}
                        {detail("Join Date", employee.join_date.format("%Y-%m-%d").to_string())}
                        <div class="p-3 bg-surface-muted rounded-lg">
                            <p class="text-sm font-medium text-fg-muted">"Status"</p>
                            {status_badge(employee.status.as_str())}
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg mb-2">"My Profile"</h1>
                    <p class="text-fg-muted">"Manage your personal information and account settings"</p>
                </div>
                <MessageBanner message=vm.message/>
                {move || match vm.employee.get() {
                    Some(employee) => card(employee).into_view(),
                    None => view! {
                        <EmptyState title="Profile not found." description="No employee record matches your account."/>
                    }.into_view(),
                }}
                <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
                    <h3 class="text-lg font-semibold text-fg mb-4">"Account Settings"</h3>
                    <div class="flex items-center justify-between p-4 bg-surface-muted rounded-lg">
                        <div>
                            <p class="font-medium text-fg">"Password"</p>
                            <p class="text-sm text-fg-muted">"Change your account password"</p>
                        </div>
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Small on:click=move |_| vm.open_dialog()>
                            "Change Password"
                        </Button>
                    </div>
                </div>
            </div>

            <FormModal
                is_open=vm.dialog_open
                title=Signal::derive(|| "Change Password".to_string())
                on_close=Callback::new(move |_| vm.close_dialog())
            >
                <form class="space-y-4" on:submit=on_submit>
                    <TextField label="Current Password" input_type="password" value=field(|p| p.current_password.clone()) on_input=set(|p, v| p.current_password = v) required=true/>
                    <TextField label="New Password" input_type="password" value=field(|p| p.new_password.clone()) on_input=set(|p, v| p.new_password = v) required=true/>
                    <TextField label="Confirm New Password" input_type="password" value=field(|p| p.confirm_password.clone()) on_input=set(|p, v| p.confirm_password = v) required=true/>
                    <InlineErrorMessage error=vm.form_error/>
                    <div class="flex space-x-3 pt-2">
                        <Button full_width=true attr:type="submit">"Update Password"</Button>
                        <Button variant=ButtonVariant::Secondary full_width=true attr:type="button" on:click=move |_| vm.close_dialog()>
                            "Cancel"
                        </Button>
                    </div>
                </form>
            </FormModal>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee_identity;
    use crate::test_support::ssr::render_signed_in;

    #[test]
    fn shows_employee_details() {
        let html = render_signed_in(employee_identity(), || view! { <ProfilePanel/> });
        assert!(html.contains("My Profile"));
        assert!(html.contains("emp_001"));
        assert!(html.contains("IT Department"));
        assert!(html.contains("Change Password"));
        assert!(!html.contains("Confirm New Password"));
    }
}
