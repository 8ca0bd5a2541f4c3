use leptos::ev::KeyboardEvent;
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full border-border rounded-md shadow-sm focus:ring-action-primary-focus focus:border-action-primary-focus";
const LABEL_CLASS: &str = "block text-sm font-medium text-fg";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div>
            <label class=LABEL_CLASS>{label}</label>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS>{label}</label>
            <textarea
                rows="3"
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS>{label}</label>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {options.into_iter().map(|(option_value, option_label)| {
                    let selected_value = option_value.clone();
                    view! {
                        <option value=option_value selected=move || value.get() == selected_value>
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

pub fn options_from<I, S>(values: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|value| {
            let value = value.into();
            (value.clone(), value)
        })
        .collect()
}

/// Add/edit dialog shell; closes on Escape or backdrop click.
#[component]
pub fn FormModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_uses_value_as_label() {
        assert_eq!(
            options_from(["IT", "HR"]),
            vec![
                ("IT".to_string(), "IT".to_string()),
                ("HR".to_string(), "HR".to_string())
            ]
        );
    }
}
