//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic free of Leptos reactivity so it can be
//! unit-tested without a browser or a router.

pub mod auth;
