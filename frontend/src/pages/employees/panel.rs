use std::rc::Rc;

use crate::{
    components::{
        common::{Button, ButtonSize, ButtonVariant},
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        forms::{options_from, FormModal, SelectField, TextField},
        layout::{Layout, MessageBanner},
        table::{RecordTable, RowActions},
    },
    data::{
        repository::use_repository,
        types::{Employee, EmployeeStatus},
    },
    pages::employees::utils::{
        department_names, employee_columns, showing_label, EmployeeDraft,
    },
    state::{crud::FormState, page::CrudPage},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let repo = use_repository();
    let page = CrudPage::new(repo.employees());
    let departments = department_names(&repo.employees());

    let visible = Signal::derive(move || page.visible());
    let total = move || page.controller.with(|c| c.records().len());
    let draft = Signal::derive(move || page.draft());
    let field = move |get: fn(&EmployeeDraft) -> String| Signal::derive(move || get(&draft.get()));
    let set = move |put: fn(&mut EmployeeDraft, String)| {
        Callback::new(move |value: String| page.update_draft(|d| put(d, value)))
    };

    let modal_title = Signal::derive(move || match page.form() {
        FormState::Editing { .. } => "Edit Employee".to_string(),
        _ => "Add Employee".to_string(),
    });
    let form_error = Signal::derive(move || {
        page.form_open()
            .then(|| page.message.get().error)
            .flatten()
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = page.submit("Employee saved");
    };

    let actions: RowActions<Employee> = Rc::new(move |employee: &Employee| {
        let edit_id = employee.id.clone();
        let remove_id = employee.id.clone();
        view! {
            <div class="flex space-x-2">
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Small
                    on:click=move |_| page.start_edit(&edit_id)
                >
                    "Edit"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    size=ButtonSize::Small
                    on:click=move |_| page.request_remove(&remove_id)
                >
                    "Delete"
                </Button>
            </div>
        }
        .into_view()
    });

    let mut department_options = vec![(String::new(), "All Departments".to_string())];
    department_options.extend(options_from(departments.clone()));
    let status_options = vec![
        (EmployeeStatus::Active.as_str().to_string(), "Active".to_string()),
        (EmployeeStatus::Inactive.as_str().to_string(), "Inactive".to_string()),
    ];

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-fg mb-2">"Employee Management"</h1>
                        <p class="text-fg-muted">"Manage your organization's workforce"</p>
                    </div>
                    <Button on:click=move |_| page.start_create()>"Add Employee"</Button>
                </div>

                <Show when=move || !page.form_open()>
                    <MessageBanner message=page.message/>
                </Show>

                <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <input
                            type="text"
                            placeholder="Search employees..."
                            class="w-full px-4 py-2 border border-border rounded-lg"
                            prop:value=move || page.controller.with(|c| c.search().to_string())
                            on:input=move |ev| page.set_search(event_target_value(&ev))
                        />
                        <select
                            class="w-full px-4 py-2 border border-border rounded-lg"
                            on:change=move |ev| page.set_category(event_target_value(&ev))
                        >
                            {department_options.into_iter().map(|(value, label)| view! {
                                <option value=value>{label}</option>
                            }).collect_view()}
                        </select>
                        <div class="flex items-center text-sm text-fg-muted">
                            {move || showing_label(visible.with(Vec::len), total())}
                        </div>
                    </div>
                </div>

                <RecordTable columns=employee_columns() records=visible actions=actions/>
            </div>

            <FormModal
                is_open=Signal::derive(move || page.form_open())
                title=modal_title
                on_close=Callback::new(move |_| page.cancel_form())
            >
                <form class="space-y-4" on:submit=on_submit>
                    <TextField label="Name" value=field(|d| d.name.clone()) on_input=set(|d, v| d.name = v) required=true/>
                    <TextField label="Email" input_type="email" value=field(|d| d.email.clone()) on_input=set(|d, v| d.email = v) required=true/>
                    <TextField label="Position" value=field(|d| d.position.clone()) on_input=set(|d, v| d.position = v) required=true/>
                    <TextField label="Department" value=field(|d| d.department.clone()) on_input=set(|d, v| d.department = v) required=true/>
                    <div class="grid grid-cols-2 gap-4">
                        <TextField label="Salary" input_type="number" value=field(|d| d.salary.clone()) on_input=set(|d, v| d.salary = v) required=true/>
                        <TextField label="Hours" input_type="number" value=field(|d| d.hours.clone()) on_input=set(|d, v| d.hours = v) required=true/>
                    </div>
                    <SelectField
                        label="Status"
                        value=field(|d| d.status.as_str().to_string())
                        on_change=set(|d, v| d.status = v.parse().unwrap_or_default())
                        options=status_options.clone()
                    />
                    <InlineErrorMessage error=form_error/>
                    <div class="flex justify-end space-x-3 pt-2">
                        <Button variant=ButtonVariant::Secondary attr:type="button" on:click=move |_| page.cancel_form()>
                            "Cancel"
                        </Button>
                        <Button attr:type="submit">
                            {move || if page.form().is_editing() { "Update" } else { "Add" }}
                            " Employee"
                        </Button>
                    </div>
                </form>
            </FormModal>

            <ConfirmDialog
                is_open=Signal::derive(move || page.pending_removal().is_some())
                title="Delete Employee"
                message=Signal::derive(move || {
                    page.pending_removal()
                        .map(|e| format!("Are you sure you want to delete {}?", e.name))
                        .unwrap_or_default()
                })
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| {
                    page.confirm_remove("Employee deleted");
                })
                on_cancel=Callback::new(move |_| page.cancel_remove())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::admin_identity;
    use crate::test_support::ssr::render_signed_in;

    #[test]
    fn lists_seeded_employees_with_counter() {
        let html = render_signed_in(admin_identity(), || view! { <EmployeesPanel/> });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("Sarah Johnson"));
        assert!(html.contains("$75,000"));
        assert!(html.contains("Showing 15 of 15 employees"));
        assert!(html.contains("All Departments"));
        assert!(!html.contains("Delete Employee"));
    }
}
