//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `events`, `tickets`, `dashboard`) so
//! individual pages can depend on small focused models. Each is provided as
//! an `RwSignal` through Leptos context by the root `App`.

pub mod auth;
pub mod dashboard;
pub mod events;
pub mod tickets;
