//! Ticket-list state for the signed-in member.

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use crate::net::api::ApiError;
use crate::net::types::{Ticket, TicketStatus};

#[derive(Clone, Debug, Default)]
pub struct TicketsState {
    pub items: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TicketsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, result: Result<Vec<Ticket>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Tickets that still admit entry (cancelled ones are listed separately).
    pub fn active(&self) -> impl Iterator<Item = &Ticket> {
        self.items.iter().filter(|t| t.status != TicketStatus::Cancelled)
    }

    /// Reserved tickets awaiting payment.
    #[must_use]
    pub fn awaiting_payment(&self) -> usize {
        self.items.iter().filter(|t| t.status == TicketStatus::Reserved).count()
    }
}
