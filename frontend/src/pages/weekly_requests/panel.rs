use std::rc::Rc;

use crate::{
    components::{
        cards::{StatCard, StatColor},
        common::{Button, ButtonSize, ButtonVariant},
        error::InlineErrorMessage,
        forms::{FormModal, TextAreaField, TextField},
        layout::{Layout, MessageBanner},
        table::{RecordTable, RowActions},
    },
    data::types::{RequestStatus, WeeklyRequest},
    pages::weekly_requests::{
        utils::{weekly_columns, WeeklyDraft},
        view_model::use_weekly_view_model,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn WeeklyRequestsPanel() -> impl IntoView {
    let vm = use_weekly_view_model();
    let page = vm.page;
    let is_admin = page.is_admin();

    let draft = Signal::derive(move || page.draft());
    let field = move |get: fn(&WeeklyDraft) -> String| Signal::derive(move || get(&draft.get()));
    let set = move |put: fn(&mut WeeklyDraft, String)| {
        Callback::new(move |value: String| page.update_draft(|d| put(d, value)))
    };
    let form_error = Signal::derive(move || page.form_open().then(|| page.message.get().error).flatten());
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = vm.submit();
    };

    let actions: Option<RowActions<WeeklyRequest>> = is_admin.then(|| {
        Rc::new(move |request: &WeeklyRequest| {
            if request.status != RequestStatus::Pending {
                return ().into_view();
            }
            let approve_id = request.id.clone();
            let reject_id = request.id.clone();
            view! {
                <div class="flex space-x-2">
                    <Button variant=ButtonVariant::Success size=ButtonSize::Small on:click=move |_| { let _ = page.approve(&approve_id); }>
                        "Approve"
                    </Button>
                    <Button variant=ButtonVariant::Danger size=ButtonSize::Small on:click=move |_| { let _ = page.reject(&reject_id); }>
                        "Reject"
                    </Button>
                </div>
            }
            .into_view()
        }) as RowActions<WeeklyRequest>
    });
    let records = Signal::derive(move || page.visible());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-fg mb-2">"Weekly Reports"</h1>
                        <p class="text-fg-muted">
                            {if is_admin { "Manage weekly report submissions" } else { "Submit and track your weekly reports" }}
                        </p>
                    </div>
                    <Show when=move || !is_admin>
                        <Button on:click=move |_| vm.start_report()>"Submit Weekly Report"</Button>
                    </Show>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <StatCard title="Total Requests" value=Signal::derive(move || vm.counters.get().total.to_string())/>
                    <StatCard title="Pending" value=Signal::derive(move || vm.counters.get().pending.to_string()) color=StatColor::Orange/>
                    <StatCard title="Approved" value=Signal::derive(move || vm.counters.get().approved.to_string()) color=StatColor::Green/>
                </div>

                <Show when=move || !page.form_open()>
                    <MessageBanner message=page.message/>
                </Show>

                {match actions {
                    Some(actions) => view! {
                        <RecordTable columns=weekly_columns(true) records=records actions=actions/>
                    }.into_view(),
                    None => view! { <RecordTable columns=weekly_columns(false) records=records/> }.into_view(),
                }}
            </div>

            <FormModal
                is_open=Signal::derive(move || page.form_open())
                title=Signal::derive(|| "Submit Weekly Report".to_string())
                on_close=Callback::new(move |_| page.cancel_form())
            >
                <form class="space-y-4" on:submit=on_submit>
                    <TextField label="Week" input_type="week" value=field(|d| d.week.clone()) on_input=set(|d, v| d.week = v) required=true/>
                    <TextAreaField
                        label="Purpose/Summary"
                        value=field(|d| d.purpose.clone())
                        on_input=set(|d, v| d.purpose = v)
                        placeholder="Describe your weekly activities, achievements, and goals..."
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=field(|d| d.email.clone())
                        on_input=set(|d, v| d.email = v)
                        placeholder="Your email address"
                    />
                    <InlineErrorMessage error=form_error/>
                    <div class="flex space-x-3 pt-2">
                        <Button full_width=true attr:type="submit">"Submit Report"</Button>
                        <Button variant=ButtonVariant::Secondary full_width=true attr:type="button" on:click=move |_| page.cancel_form()>
                            "Cancel"
                        </Button>
                    </div>
                </form>
            </FormModal>
        </Layout>
    }
}
