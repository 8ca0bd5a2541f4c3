use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
    },
    data::types::Role,
    pages::login::{
        utils::DEMO_ACCOUNTS,
        view_model::use_login_view_model,
    },
    router::AppRoute,
    state::session::use_session,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
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

    let role_button = move |role: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if form.role.get() == role {
                        "flex-1 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                    } else {
                        "flex-1 py-2 rounded-md text-sm font-medium bg-surface-muted text-fg"
                    }
                }
                on:click=move |_| form.role.set(role)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in to EMS Portal"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Employee Management System"</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="flex gap-2">
                        {role_button(Role::Employee, "Employee")}
                        {role_button(Role::Admin, "Admin")}
                    </div>
                    <div class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md"
                                placeholder="you@company.com"
                                prop:value=move || form.email.get()
                                on:input=move |ev| form.email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md"
                                prop:value=move || form.password.get()
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=vm.error />

                    <Button variant=ButtonVariant::Primary full_width=true attr:type="submit">
                        "Sign in"
                    </Button>
                    <p class="text-center text-sm text-fg-muted">
                        "No account yet? "
                        <a href=AppRoute::Register.path() class="text-action-primary-bg hover:underline">"Register"</a>
                    </p>
                </form>
                <div class="rounded-lg border border-border bg-surface-muted p-4 text-sm space-y-2">
                    <p class="font-medium text-fg">"Demo accounts"</p>
                    {DEMO_ACCOUNTS.iter().map(|account| view! {
                        <button
                            type="button"
                            class="block w-full text-left text-fg-muted hover:text-fg"
                            on:click=move |_| form.fill_demo(account.email, account.password, account.role)
                        >
                            {format!("{}: {} / {}", account.label, account.email, account.password)}
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
