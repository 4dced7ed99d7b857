//! Route wrapper that applies access requirements before rendering a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route definitions in `app` wrap gated pages in `ProtectedRoute`. The
//! decision itself lives in `util::auth::evaluate_access`; this component
//! only feeds it the session signal and current location, and turns the
//! outcome into a placeholder, a redirect, or the children.
//!
//! These redirects are a navigation convenience. The API still checks the
//! session on every request.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading::LoadingScreen;
use crate::config::{self, Destination};
use crate::state::auth::AuthState;
use crate::util::auth::{AccessDecision, RouteRequirements, evaluate_access};

/// Reactive access decision for the current session and location.
///
/// Subscribers only re-run when the outcome changes, so a session refresh
/// that keeps a page allowed does not remount it.
pub(crate) fn access_decision(
    auth: RwSignal<AuthState>,
    pathname: Memo<String>,
    search: Memo<String>,
    requirements: RouteRequirements,
) -> Memo<AccessDecision> {
    Memo::new(move |_| {
        let here = config::current_location(&pathname.get(), &search.get());
        auth.with(|session| evaluate_access(session, requirements, &here))
    })
}

/// Render `children` only when the session satisfies `requirements`.
#[component]
pub fn ProtectedRoute(#[prop(optional)] requirements: RouteRequirements, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    if let Err(e) = requirements.validate() {
        log::warn!("{e}: {requirements:?}");
    }

    let decision = access_decision(auth, location.pathname, location.search, requirements);

    move || match decision.get() {
        AccessDecision::Pending => view! { <LoadingScreen/> }.into_any(),
        AccessDecision::Allow => children().into_any(),
        redirect => {
            let path = redirect
                .redirect_href()
                .unwrap_or_else(|| Destination::Home.path().to_owned());
            log::debug!("access gate redirect -> {path}");
            view! { <Redirect path=path options=NavigateOptions { replace: true, ..NavigateOptions::default() }/> }
                .into_any()
        }
    }
}
