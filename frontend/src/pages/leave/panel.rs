use std::rc::Rc;

use crate::{
    components::{
        common::{Button, ButtonSize, ButtonVariant},
        error::InlineErrorMessage,
        forms::{FormModal, SelectField, TextAreaField, TextField},
        layout::{Layout, MessageBanner},
        table::{RecordTable, RowActions},
    },
    data::types::{LeaveRequest, LeaveType, RequestStatus},
    pages::leave::{
        utils::{leave_columns, leave_type_options, LeaveDraft},
        view_model::use_leave_view_model,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LeavePanel() -> impl IntoView {
    let vm = use_leave_view_model();
    let page = vm.page;
    let is_admin = page.is_admin();

    let draft = Signal::derive(move || page.draft());
    let field = move |get: fn(&LeaveDraft) -> String| Signal::derive(move || get(&draft.get()));
    let set = move |put: fn(&mut LeaveDraft, String)| {
        Callback::new(move |value: String| page.update_draft(|d| put(d, value)))
    };
    let form_error = Signal::derive(move || page.form_open().then(|| page.message.get().error).flatten());
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = vm.submit();
    };

    let actions: Option<RowActions<LeaveRequest>> = is_admin.then(|| {
        Rc::new(move |request: &LeaveRequest| {
            if request.status != RequestStatus::Pending {
                return ().into_view();
            }
            let approve_id = request.id.clone();
            let reject_id = request.id.clone();
            view! {
                <div class="flex space-x-2">
                    <Button variant=ButtonVariant::Success size=ButtonSize::Small on:click=move |_| { let _ = vm.approve(&approve_id); }>
                        "Approve"
                    </Button>
                    <Button variant=ButtonVariant::Danger size=ButtonSize::Small on:click=move |_| { let _ = vm.reject(&reject_id); }>
                        "Reject"
                    </Button>
                </div>
            }
            .into_view()
        }) as RowActions<LeaveRequest>
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-fg mb-2">"Leave Management"</h1>
                        <p class="text-fg-muted">
                            {if is_admin { "Review and manage employee leave requests" } else { "Submit and track your leave requests" }}
                        </p>
                    </div>
                    <Show when=move || !is_admin>
                        <Button on:click=move |_| page.start_create()>"Request Leave"</Button>
                    </Show>
                </div>

                {move || vm.balance.get().map(|days| view! {
                    <div class="bg-gradient-to-r from-green-500 to-green-600 rounded-xl p-6 text-white">
                        <div class="flex items-center justify-between">
                            <div>
                                <h3 class="text-xl font-semibold mb-2">"Leave Balance"</h3>
                                <p class="opacity-90">"Available days for this year"</p>
                            </div>
                            <div class="text-right">
                                <div class="text-3xl font-bold">{days}</div>
                                <p class="opacity-90">"Days remaining"</p>
                            </div>
                        </div>
                    </div>
                })}

                <Show when=move || !page.form_open()>
                    <MessageBanner message=page.message/>
                </Show>

                <Show when=move || is_admin>
                    <select
                        class="px-4 py-2 border border-border rounded-lg"
                        on:change=move |ev| page.set_category(event_target_value(&ev))
                    >
                        <option value="">"All Statuses"</option>
                        <option value="pending">"Pending"</option>
                        <option value="approved">"Approved"</option>
                        <option value="rejected">"Rejected"</option>
                    </select>
                </Show>

                {match actions {
                    Some(actions) => view! {
                        <RecordTable columns=leave_columns(is_admin) records=Signal::derive(move || page.visible()) actions=actions/>
                    }.into_view(),
                    None => view! {
                        <RecordTable columns=leave_columns(is_admin) records=Signal::derive(move || page.visible())/>
                    }.into_view(),
                }}
            </div>

            <FormModal
                is_open=Signal::derive(move || page.form_open())
                title=Signal::derive(|| "Request Leave".to_string())
                on_close=Callback::new(move |_| page.cancel_form())
            >
                <form class="space-y-4" on:submit=on_submit>
                    <SelectField
                        label="Leave Type"
                        value=field(|d| d.leave_type.as_str().to_string())
                        on_change=set(|d, v| d.leave_type = v.parse().unwrap_or(LeaveType::Vacation))
                        options=leave_type_options()
                    />
                    <div class="grid grid-cols-2 gap-4">
                        <TextField label="Start Date" input_type="date" value=field(|d| d.start_date.clone()) on_input=set(|d, v| d.start_date = v) required=true/>
                        <TextField label="End Date" input_type="date" value=field(|d| d.end_date.clone()) on_input=set(|d, v| d.end_date = v) required=true/>
                    </div>
                    <TextAreaField
                        label="Reason"
                        value=field(|d| d.reason.clone())
                        on_input=set(|d, v| d.reason = v)
                        placeholder="Please provide a reason for your leave request..."
                    />
                    <InlineErrorMessage error=form_error/>
                    <div class="flex space-x-3 pt-2">
                        <Button full_width=true attr:type="submit">"Submit Request"</Button>
                        <Button variant=ButtonVariant::Secondary full_width=true attr:type="button" on:click=move |_| page.cancel_form()>
                            "Cancel"
                        </Button>
                    </div>
                </form>
            </FormModal>
        </Layout>
    }
}
