//! Public event browsing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for everyone. Loads the published event list once per
//! mount; no session is required.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::loading::LoadingScreen;
use crate::components::nav_bar::NavBar;
use crate::state::events::EventsState;

#[component]
pub fn HomePage() -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();

    events.update(EventsState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_events().await;
        if let Err(e) = &result {
            log::warn!("event list failed: {e}");
        }
        events.update(|s| s.apply(result));
    });

    let show_sold_out = RwSignal::new(false);
    let visible = move || {
        events.with(|s| {
            if show_sold_out.get() {
                s.items.clone()
            } else {
                s.on_sale().cloned().collect::<Vec<_>>()
            }
        })
    };

    view! {
        <NavBar/>
        <main class="home-page">
            <header class="home-page__header">
                <h1>"Upcoming events"</h1>
                <label class="home-page__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || show_sold_out.get()
                        on:change=move |ev| show_sold_out.set(event_target_checked(&ev))
                    />
                    "Show sold out"
                </label>
            </header>
            <Show when=move || events.with(|s| s.error.is_some())>
                <p class="home-page__error">{move || events.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !events.with(|s| s.loading && s.items.is_empty())
                fallback=|| view! { <LoadingScreen message="Loading events..."/> }
            >
                <section class="home-page__grid">
                    <For each=visible key=|event| event.id.clone() let:event>
                        <EventCard event=event/>
                    </For>
                </section>
            </Show>
        </main>
    }
}
