//! Admin dashboard with sales totals and the upcoming event list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through `ProtectedRoute` with `RouteRequirements::admin()`.
//! Figures are shown as plain numbers.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::loading::LoadingScreen;
use crate::components::nav_bar::NavBar;
use crate::net::types::{DashboardSummary, format_price};
use crate::state::dashboard::DashboardState;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    dashboard.update(DashboardState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_dashboard_summary().await;
        if let Err(e) = &result {
            log::warn!("dashboard summary failed: {e}");
        }
        dashboard.update(|s| s.apply(result));
    });

    let summary = move || dashboard.with(|s| s.summary.clone());

    view! {
        <NavBar/>
        <main class="admin-page">
            <h1>"Dashboard"</h1>
            <Show when=move || dashboard.with(|s| s.error.is_some())>
                <p class="admin-page__error">{move || dashboard.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || match summary() {
                Some(summary) => view! { <SummaryPanel summary=summary/> }.into_any(),
                None => view! { <LoadingScreen message="Loading dashboard..."/> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn SummaryPanel(summary: DashboardSummary) -> impl IntoView {
    let revenue = format_price(summary.revenue_minor, &summary.currency);
    view! {
        <section class="admin-page__stats">
            <div class="stat">
                <span class="stat__label">"Events"</span>
                <span class="stat__value">{summary.total_events}</span>
            </div>
            <div class="stat">
                <span class="stat__label">"Tickets sold"</span>
                <span class="stat__value">{summary.tickets_sold}</span>
            </div>
            <div class="stat">
                <span class="stat__label">"Revenue"</span>
                <span class="stat__value">{revenue}</span>
            </div>
        </section>
        <section class="admin-page__upcoming">
            <h2>"Upcoming"</h2>
            {summary
                .upcoming
                .into_iter()
                .map(|event| view! { <EventCard event=event compact=true/> })
                .collect_view()}
        </section>
    }
}
