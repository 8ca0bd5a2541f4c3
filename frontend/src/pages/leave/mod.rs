use leptos::*;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LeavePanel;

#[component]
pub fn LeavePage() -> impl IntoView {
    view! { <LeavePanel /> }
}
