//! Networking modules for the ticketing REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared JSON schema.

pub mod api;
pub mod types;
