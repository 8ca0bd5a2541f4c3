use crate::error::AppError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<AppError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if !e.details().is_empty() {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {e.details().iter().map(|detail| {
                                    view! { <li>{detail.clone()}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view();
                    }
                    view! { <div class="text-xs opacity-75">{"Code: "}{e.code()}</div> }.into_view()
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
