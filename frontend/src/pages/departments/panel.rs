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
        types::{Department, Position, PositionLevel},
    },
    pages::departments::utils::{
        department_columns, position_columns, DepartmentDraft, DepartmentTab, PositionDraft,
    },
    state::{
        crud::CrudRecord,
        page::CrudPage,
    },
};
use leptos::{ev::SubmitEvent, *};

fn row_actions<R: CrudRecord>(page: CrudPage<R>) -> RowActions<R> {
    Rc::new(move |record: &R| {
        let edit_id = record.id().to_string();
        let remove_id = edit_id.clone();
        view! {
            <div class="flex space-x-2">
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Small on:click=move |_| page.start_edit(&edit_id)>
                    "Edit"
                </Button>
                <Button variant=ButtonVariant::Danger size=ButtonSize::Small on:click=move |_| page.request_remove(&remove_id)>
                    "Delete"
                </Button>
            </div>
        }
        .into_view()
    })
}

fn form_title<R: CrudRecord>(page: CrudPage<R>, noun: &'static str) -> Signal<String> {
    Signal::derive(move || {
        let verb = if page.form().is_editing() { "Edit" } else { "Add" };
        format!("{} {}", verb, noun)
    })
}

fn form_error<R: CrudRecord>(page: CrudPage<R>) -> Signal<Option<crate::error::AppError>> {
    Signal::derive(move || page.form_open().then(|| page.message.get().error).flatten())
}

#[component]
pub fn DepartmentsPanel() -> impl IntoView {
    let (tab, set_tab) = create_signal(DepartmentTab::default());
    let tab_class = move |which: DepartmentTab| {
        if tab.get() == which {
            "py-4 px-1 border-b-2 border-action-primary-bg text-action-primary-bg font-medium text-sm"
        } else {
            "py-4 px-1 border-b-2 border-transparent text-fg-muted hover:text-fg font-medium text-sm"
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg mb-2">"Department & Position Management"</h1>
                    <p class="text-fg-muted">"Organize your company structure"</p>
                </div>
                <div class="bg-surface-elevated rounded-xl shadow-sm border border-border">
                    <nav class="flex space-x-8 px-6 border-b border-border">
                        <button class=move || tab_class(DepartmentTab::Departments) on:click=move |_| set_tab.set(DepartmentTab::Departments)>
                            "Departments"
                        </button>
                        <button class=move || tab_class(DepartmentTab::Positions) on:click=move |_| set_tab.set(DepartmentTab::Positions)>
                            "Positions"
                        </button>
                    </nav>
                    <div class="p-6">
                        <Show
                            when=move || tab.get() == DepartmentTab::Departments
                            fallback=|| view! { <PositionsTab/> }
                        >
                            <DepartmentsTab/>
                        </Show>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn DepartmentsTab() -> impl IntoView {
    let page = CrudPage::new(use_repository().departments());
    let noun = DepartmentTab::Departments.noun();
    let draft = Signal::derive(move || page.draft());
    let field = move |get: fn(&DepartmentDraft) -> String| Signal::derive(move || get(&draft.get()));
    let set = move |put: fn(&mut DepartmentDraft, String)| {
        Callback::new(move |value: String| page.update_draft(|d| put(d, value)))
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = page.submit("Department saved");
    };

    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <Button on:click=move |_| page.start_create()>{format!("Add {}", noun)}</Button>
            </div>
            <Show when=move || !page.form_open()>
                <MessageBanner message=page.message/>
            </Show>
            <RecordTable
                columns=department_columns()
                records=Signal::derive(move || page.visible())
                actions=row_actions(page)
            />
            <FormModal is_open=Signal::derive(move || page.form_open()) title=form_title(page, noun) on_close=Callback::new(move |_| page.cancel_form())>
                <form class="space-y-4" on:submit=on_submit>
                    <TextField label="Department Name" value=field(|d| d.name.clone()) on_input=set(|d, v| d.name = v) required=true/>
                    <TextField label="Manager" value=field(|d| d.manager.clone()) on_input=set(|d, v| d.manager = v) required=true/>
                    <InlineErrorMessage error=form_error(page)/>
                    <div class="flex justify-end space-x-3 pt-2">
                        <Button variant=ButtonVariant::Secondary attr:type="button" on:click=move |_| page.cancel_form()>"Cancel"</Button>
                        <Button attr:type="submit">"Save"</Button>
                    </div>
                </form>
            </FormModal>
            <ConfirmDialog
                is_open=Signal::derive(move || page.pending_removal().is_some())
                title="Delete Department"
                message=Signal::derive(move || {
                    page.pending_removal()
                        .map(|d: Department| format!("Are you sure you want to delete {}?", d.name))
                        .unwrap_or_default()
                })
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| {
                    page.confirm_remove("Department deleted");
                })
                on_cancel=Callback::new(move |_| page.cancel_remove())
            />
        </div>
    }
}

#[component]
fn PositionsTab() -> impl IntoView {
    let repo = use_repository();
    let page = CrudPage::new(repo.positions());
    let noun = DepartmentTab::Positions.noun();
    let department_options = options_from(repo.departments().into_iter().map(|d| d.name));
    let mut filter_options = vec![(String::new(), "All Departments".to_string())];
    filter_options.extend(department_options.clone());
    let level_options = options_from(PositionLevel::ALL.iter().map(|level| level.as_str()));

    let draft = Signal::derive(move || page.draft());
    let field = move |get: fn(&PositionDraft) -> String| Signal::derive(move || get(&draft.get()));
    let set = move |put: fn(&mut PositionDraft, String)| {
        Callback::new(move |value: String| page.update_draft(|d| put(d, value)))
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let _ = page.submit("Position saved");
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <select
                    class="px-4 py-2 border border-border rounded-lg"
                    on:change=move |ev| page.set_category(event_target_value(&ev))
                >
                    {filter_options.into_iter().map(|(value, label)| view! { <option value=value>{label}</option> }).collect_view()}
                </select>
                <Button on:click=move |_| page.start_create()>{format!("Add {}", noun)}</Button>
            </div>
            <Show when=move || !page.form_open()>
                <MessageBanner message=page.message/>
            </Show>
            <RecordTable
                columns=position_columns()
                records=Signal::derive(move || page.visible())
                actions=row_actions(page)
            />
            <FormModal is_open=Signal::derive(move || page.form_open()) title=form_title(page, noun) on_close=Callback::new(move |_| page.cancel_form())>
                <form class="space-y-4" on:submit=on_submit>
                    <TextField label="Position Title" value=field(|d| d.title.clone()) on_input=set(|d, v| d.title = v) required=true/>
                    <SelectField
                        label="Department"
                        value=field(|d| d.department.clone())
                        on_change=set(|d, v| d.department = v)
                        options={
                            let mut options = vec![(String::new(), "Select Department".to_string())];
                            options.extend(department_options.clone());
                            options
                        }
                    />
                    <SelectField
                        label="Level"
                        value=field(|d| d.level.as_str().to_string())
                        on_change=set(|d, v| d.level = v.parse().unwrap_or(PositionLevel::Junior))
                        options=level_options.clone()
                    />
                    <InlineErrorMessage error=form_error(page)/>
                    <div class="flex justify-end space-x-3 pt-2">
                        <Button variant=ButtonVariant::Secondary attr:type="button" on:click=move |_| page.cancel_form()>"Cancel"</Button>
                        <Button attr:type="submit">"Save"</Button>
                    </div>
                </form>
            </FormModal>
            <ConfirmDialog
                is_open=Signal::derive(move || page.pending_removal().is_some())
                title="Delete Position"
                message=Signal::derive(move || {
                    page.pending_removal()
                        .map(|p: Position| format!("Are you sure you want to delete {}?", p.title))
                        .unwrap_or_default()
                })
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| {
                    page.confirm_remove("Position deleted");
                })
                on_cancel=Callback::new(move |_| page.cancel_remove())
            />
        </div>
    }
}
