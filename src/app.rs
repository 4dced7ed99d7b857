//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, home::HomePage, login::LoginPage, my_tickets::MyTicketsPage,
};
use crate::state::{
    auth::AuthState, dashboard::DashboardState, events::EventsState, tickets::TicketsState,
};
use crate::util::auth::RouteRequirements;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Resolve the session from the API and publish it to `auth`.
///
/// Only the browser can see the session cookie, so on the server the state
/// stays in its resolving form and gated routes render the placeholder.
fn resolve_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        match &user {
            Some(u) => log::debug!("session resolved for {} ({})", u.id, u.role.as_str()),
            None => log::debug!("no active session"),
        }
        auth.set(AuthState::resolved(user));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    let events = RwSignal::new(EventsState::default());
    let tickets = RwSignal::new(TicketsState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(auth);
    provide_context(events);
    provide_context(tickets);
    provide_context(dashboard);

    resolve_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/ticketbox.css"/>
        <Title text="Ticketbox"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("tickets")
                    view=|| view! {
                        <ProtectedRoute requirements=RouteRequirements::member()>
                            <MyTicketsPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! {
                        <ProtectedRoute requirements=RouteRequirements::admin()>
                            <AdminDashboardPage/>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
    }
}
