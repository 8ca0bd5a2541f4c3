use leptos::*;

pub mod utils;

mod panel;

pub use panel::ReportsPanel;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! { <ReportsPanel /> }
}
