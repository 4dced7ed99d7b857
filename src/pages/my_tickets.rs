//! Ticket list for the signed-in member. Gated with `RouteRequirements::member()`.

use leptos::prelude::*;

use crate::components::loading::LoadingScreen;
use crate::components::nav_bar::NavBar;
use crate::net::types::{Ticket, TicketStatus};
use crate::state::tickets::TicketsState;

fn status_label(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Reserved => "Awaiting payment",
        TicketStatus::Paid => "Paid",
        TicketStatus::Cancelled => "Cancelled",
    }
}

#[component]
pub fn MyTicketsPage() -> impl IntoView {
    let tickets = expect_context::<RwSignal<TicketsState>>();

    tickets.update(TicketsState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_my_tickets().await;
        tickets.update(|s| s.apply(result));
    });

    let active = move || tickets.with(|s| s.active().cloned().collect::<Vec<Ticket>>());
    let pending = move || tickets.with(TicketsState::awaiting_payment);

    view! {
        <NavBar/>
        <main class="tickets-page">
            <h1>"My tickets"</h1>
            <Show when=move || { pending() > 0 }>
                <p class="tickets-page__notice">{move || format!("{} ticket(s) awaiting payment", pending())}</p>
            </Show>
            <Show when=move || tickets.with(|s| s.error.is_some())>
                <p class="tickets-page__error">{move || tickets.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !tickets.with(|s| s.loading)
                fallback=|| view! { <LoadingScreen message="Loading tickets..."/> }
            >
                <ul class="tickets-page__list">
                    <For each=active key=|ticket| ticket.id.clone() let:ticket>
                        <li class="ticket-row">
                            <span class="ticket-row__event">{ticket.event_title}</span>
                            <span class="ticket-row__date">{ticket.starts_at}</span>
                            <span class="ticket-row__seat">{ticket.seat.unwrap_or_else(|| "General admission".to_owned())}</span>
                            <span class="ticket-row__status">{status_label(ticket.status)}</span>
                        </li>
                    </For>
                </ul>
            </Show>
        </main>
    }
}
