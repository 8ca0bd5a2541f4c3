use leptos::*;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::WeeklyRequestsPanel;

#[component]
pub fn WeeklyRequestsPage() -> impl IntoView {
    view! { <WeeklyRequestsPanel /> }
}
