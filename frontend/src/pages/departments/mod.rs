use leptos::*;

pub mod utils;

mod panel;

pub use panel::DepartmentsPanel;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    view! { <DepartmentsPanel /> }
}
