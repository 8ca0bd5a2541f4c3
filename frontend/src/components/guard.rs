use crate::{data::types::Identity, router::AppRoute, state::session::use_session};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

impl AccessDecision {
    pub fn redirect_target(&self) -> Option<AppRoute> {
        match self {
            AccessDecision::Render => None,
            AccessDecision::RedirectToLogin => Some(AppRoute::Login),
            AccessDecision::RedirectToDashboard => Some(AppRoute::Dashboard),
        }
    }
}

pub fn can_access(identity: Option<&Identity>, requires_admin: bool) -> AccessDecision {
    match identity {
        None => AccessDecision::RedirectToLogin,
        Some(identity) if requires_admin && !identity.is_admin() => {
            AccessDecision::RedirectToDashboard
        }
        Some(_) => AccessDecision::Render,
    }
}

/// Renders `children` only when the session may open `route`, otherwise replaces the
/// current history entry with the redirect target.
#[component]
pub fn RouteGuard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let requires_admin = route.requires_admin();
    let decision =
        create_memo(move |_| can_access(session.state.get().user.as_ref(), requires_admin));
    create_effect(move |_| {
        if let Some(target) = decision.get().redirect_target() {
            log::info!("Redirecting {} to {}", route.path(), target.path());
            let navigate = use_navigate();
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
    view! {
        <Show when=move || decision.get() == AccessDecision::Render>
            {children()}
        </Show>
    }
}
