//! REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies of the ticketing API. The user role is
//! narrowed to a closed enum at decode time so route checks match exhaustively
//! instead of comparing strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access role of an authenticated user.
///
/// Decoded from the wire string: `"admin"` is [`Role::Admin`], every other
/// value is treated as an ordinary member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            _ => Self::Member,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, if the API exposes it.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Access role; missing on the wire means member.
    #[serde(default)]
    pub role: Role,
}

/// Event listing entry shown on the browse page and the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub venue: String,
    /// ISO-8601 start time as sent by the API.
    pub starts_at: String,
    /// Hosted poster image, already a full delivery URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ticket price in the currency's minor unit.
    pub price_minor: i64,
    pub currency: String,
    pub tickets_remaining: u32,
}

impl EventSummary {
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.tickets_remaining == 0
    }
}

/// Lifecycle of a purchased ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Reserved,
    Paid,
    Cancelled,
}

/// A ticket owned by the current member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub event_id: String,
    pub event_title: String,
    pub starts_at: String,
    #[serde(default)]
    pub seat: Option<String>,
    pub status: TicketStatus,
}

/// Aggregate numbers for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_events: u32,
    pub tickets_sold: u64,
    pub revenue_minor: i64,
    pub currency: String,
    #[serde(default)]
    pub upcoming: Vec<EventSummary>,
}

/// Render a minor-unit amount as `"<major>.<minor> <CUR>"`.
///
/// Two decimal places are assumed; the ticketing API only quotes currencies
/// with a hundredths minor unit.
#[must_use]
pub fn format_price(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02} {}", abs / 100, abs % 100, currency.to_ascii_uppercase())
}
