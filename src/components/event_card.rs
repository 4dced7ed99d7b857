//! Card for a single event in browse and dashboard lists.

use leptos::prelude::*;

use crate::net::types::{EventSummary, format_price};

#[component]
pub fn EventCard(event: EventSummary, #[prop(optional)] compact: bool) -> impl IntoView {
    let sold_out = event.is_sold_out();
    let price = format_price(event.price_minor, &event.currency);
    let remaining = if sold_out {
        "Sold out".to_owned()
    } else {
        format!("{} left", event.tickets_remaining)
    };
    let poster = event.image_url.clone();
    let alt = event.title.clone();

    view! {
        <article class="event-card" class:event-card--compact=compact class:event-card--sold-out=sold_out>
            {poster.filter(|_| !compact).map(|src| view! { <img class="event-card__poster" src=src alt=alt loading="lazy"/> })}
            <div class="event-card__body">
                <h3 class="event-card__title">{event.title}</h3>
                <p class="event-card__meta">
                    <span class="event-card__venue">{event.venue}</span>
                    <span class="event-card__date">{event.starts_at}</span>
                </p>
                <p class="event-card__footer">
                    <span class="event-card__price">{price}</span>
                    <span class="event-card__remaining">{remaining}</span>
                </p>
            </div>
        </article>
    }
}
