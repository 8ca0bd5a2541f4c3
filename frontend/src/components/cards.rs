use leptos::*;

use crate::data::types::RequestStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl StatColor {
    pub fn classes(&self) -> &'static str {
        match self {
            StatColor::Blue => "bg-blue-50 text-blue-600 border-blue-200",
            StatColor::Green => "bg-green-50 text-green-600 border-green-200",
            StatColor::Purple => "bg-purple-50 text-purple-600 border-purple-200",
            StatColor::Orange => "bg-orange-50 text-orange-600 border-orange-200",
            StatColor::Red => "bg-red-50 text-red-600 border-red-200",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trend {
    pub label: String,
    pub is_up: bool,
}

impl Trend {
    pub fn up(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_up: true,
        }
    }

    fn arrow(&self) -> &'static str {
        if self.is_up {
            "↗"
        } else {
            "↘"
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] color: StatColor,
    #[prop(optional)] trend: Option<Trend>,
) -> impl IntoView {
    let badge = title.chars().next().map(String::from).unwrap_or_default();
    view! {
        <div class="bg-surface-elevated rounded-xl shadow-sm border border-border p-6">
            <div class="flex items-center justify-between">
                <div class="flex-1">
                    <p class="text-sm font-medium text-fg-muted mb-1">{title}</p>
                    <p class="text-3xl font-bold text-fg">{move || value.get()}</p>
                    {trend.map(|trend| {
                        let tone = if trend.is_up { "text-green-600" } else { "text-red-600" };
                        view! {
                            <div class=format!("flex items-center mt-2 text-sm {}", tone)>
                                <span>{format!("{} {}", trend.arrow(), trend.label)}</span>
                            </div>
                        }
                    })}
                </div>
                <div class=format!("p-3 rounded-xl border font-semibold {}", color.classes())>
                    {badge}
                </div>
            </div>
        </div>
    }
}

/// Titled white panel used for page sections.
#[component]
pub fn Panel(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <div class="px-6 py-4 border-b border-border">
                <h3 class="text-lg font-medium text-fg">{title}</h3>
            </div>
            <div class="px-6 py-4">{children()}</div>
        </div>
    }
}

pub fn request_status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Approved => "bg-green-100 text-green-800",
        RequestStatus::Rejected => "bg-red-100 text-red-800",
        RequestStatus::Pending => "bg-yellow-100 text-yellow-800",
    }
}

pub fn request_status_badge(status: RequestStatus) -> View {
    view! {
        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", request_status_class(status))>
            {status.as_str()}
        </span>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_its_own_tone() {
        let classes = [
            request_status_class(RequestStatus::Pending),
            request_status_class(RequestStatus::Approved),
            request_status_class(RequestStatus::Rejected),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
    }
}
