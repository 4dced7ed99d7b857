//! Placeholder shown while the session lookup is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <span class="loading-screen__spinner" aria-hidden="true"></span>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
