use crate::{
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::TextField,
    },
    data::types::Role,
    pages::register::view_model::use_register_view_model,
    router::AppRoute,
    state::session::use_session,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let session = use_session();
    let form = vm.form;

    create_effect(move |_| {
        if session.state.get().is_authenticated() {
            use_navigate()(
                AppRoute::Dashboard.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Create your account"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <TextField
                        label="Full Name"
                        value=form.name
                        on_input=Callback::new(move |v| form.name.set(v))
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=form.email
                        on_input=Callback::new(move |v| form.email.set(v))
                    />
                    <TextField
                        label="Password"
                        input_type="password"
                        value=form.password
                        on_input=Callback::new(move |v| form.password.set(v))
                    />
                    <TextField
                        label="Confirm Password"
                        input_type="password"
                        value=form.confirm_password
                        on_input=Callback::new(move |v| form.confirm_password.set(v))
                    />
                    <div>
                        <label class="block text-sm font-medium text-fg">"Role"</label>
                        <select
                            class="mt-1 block w-full border-border rounded-md"
                            on:change=move |ev| {
                                let role = event_target_value(&ev).parse::<Role>().unwrap_or(Role::Employee);
                                form.role.set(role);
                            }
                        >
                            <option value="employee" selected=move || form.role.get() == Role::Employee>"Employee"</option>
                            <option value="admin" selected=move || form.role.get() == Role::Admin>"Admin"</option>
                        </select>
                    </div>

                    <InlineErrorMessage error=vm.error />

                    <Button full_width=true attr:type="submit">"Register"</Button>
                    <p class="text-center text-sm text-fg-muted">
                        "Already registered? "
                        <a href=AppRoute::Login.path() class="text-action-primary-bg hover:underline">"Sign in"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn register_panel_renders_fields() {
        let html = render_to_string(|| {
            provide_session(None);
            view! { <RegisterPanel /> }
        });
        assert!(html.contains("Create your account"));
        assert!(html.contains("Confirm Password"));
        assert!(html.contains("/login"));
    }
}
