//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates rendering details
//! to `components`. Access checks happen in `app` before a page mounts.

pub mod admin_dashboard;
pub mod home;
pub mod login;
pub mod my_tickets;
