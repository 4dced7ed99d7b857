//! Top navigation bar with role-aware links and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every page. Links only reflect the session; the routes they
//! point at still run through `ProtectedRoute`.

use leptos::prelude::*;

use crate::config::Destination;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let display_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()));
    let is_admin = move || auth.with(AuthState::is_admin);
    let is_member = move || auth.with(|a| a.is_authenticated() && !a.is_admin());
    let signed_out = move || auth.with(|a| !a.loading && !a.is_authenticated());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.set(AuthState::resolved(None));
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(Destination::Login.path());
                }
            });
        }
    };

    view! {
        <nav class="nav-bar">
            <a href=Destination::Home.path() class="nav-bar__brand">"Ticketbox"</a>
            <span class="nav-bar__spacer"></span>
            <Show when=is_member>
                <a href=Destination::MyTickets.path() class="nav-bar__link">"My tickets"</a>
            </Show>
            <Show when=is_admin>
                <a href=Destination::AdminHome.path() class="nav-bar__link">"Dashboard"</a>
            </Show>
            <Show
                when=signed_out
                fallback=move || {
                    view! {
                        <span class="nav-bar__user">{display_name}</span>
                        <button class="nav-bar__logout" on:click=on_logout>"Log out"</button>
                    }
                }
            >
                <a href=Destination::Login.path() class="nav-bar__link">"Log in"</a>
            </Show>
        </nav>
    }
}
