//! Login page with email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access gate sends anonymous visitors here with the location they were
//! trying to reach in the `redirect` query parameter. After a successful
//! sign-in (or when a signed-in user opens this page) the visitor continues
//! to that location, sanitized to a same-origin path. Admins always continue
//! to the admin home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::nav_bar::NavBar;
use crate::config::{Destination, REDIRECT_PARAM, sanitize_return_to};
use crate::net::api::ApiError;
use crate::state::auth::AuthState;

const MISSING_FIELDS: &str = "Enter your email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Trim and check the login form fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// User-facing text for a failed sign-in.
pub(crate) fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(401 | 403) => "Incorrect email or password.".to_owned(),
        ApiError::Status(429) => "Too many attempts. Try again in a minute.".to_owned(),
        other => format!("Sign-in failed: {other}"),
    }
}

/// Where a signed-in user continues from the login page.
///
/// Admins always land on the admin home, whatever the return-to says.
/// Members continue to the sanitized return-to.
pub(crate) fn landing_for(state: &AuthState, return_to: Option<&str>) -> String {
    if state.is_admin() {
        return Destination::AdminHome.path().to_owned();
    }
    sanitize_return_to(return_to)
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed in (already, or by the form below): continue to the landing page.
    // This is the only navigation the page performs.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            let target = query.with(|q| landing_for(&state, q.get(REDIRECT_PARAM).as_deref()));
            navigate(&target, replace_history());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let (email_value, password_value) = credentials;
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        log::info!("signed in as {}", user.id);
                        auth.set(AuthState::resolved(Some(user)));
                    }
                    Err(e) => {
                        info.set(login_failure_message(&e));
                        password.set(String::new());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <NavBar/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
