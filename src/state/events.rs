//! Event-list state for the public browse page.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::api::ApiError;
use crate::net::types::EventSummary;

/// Published events plus fetch status.
#[derive(Clone, Debug, Default)]
pub struct EventsState {
    pub items: Vec<EventSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EventsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch outcome. A failed refresh keeps the previous listing.
    pub fn apply(&mut self, result: Result<Vec<EventSummary>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Events that still have tickets for sale, in listing order.
    pub fn on_sale(&self) -> impl Iterator<Item = &EventSummary> {
        self.items.iter().filter(|event| !event.is_sold_out())
    }
}
