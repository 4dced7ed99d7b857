//! REST API helpers for communicating with the ticketing backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/[`ApiError::Unavailable`] since
//! these endpoints carry the browser's session cookie and are only meaningful
//! there.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and
//! listing fetch failures degrade page behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DashboardSummary, EventSummary, Ticket, User};

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const EVENTS_ENDPOINT: &str = "/api/events";
pub const MY_TICKETS_ENDPOINT: &str = "/api/me/tickets";
pub const DASHBOARD_SUMMARY_ENDPOINT: &str = "/api/admin/summary";

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available during server rendering")]
    Unavailable,
}

impl ApiError {
    /// Whether the backend rejected the session or credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<User>(ME_ENDPOINT).await {
            Ok(user) => Some(user),
            Err(e) => {
                if !e.is_unauthorized() {
                    log::warn!("session lookup failed: {e}");
                }
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 401 for rejected credentials, or a
/// network/decode error.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// List published events from `/api/events`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn fetch_events() -> Result<Vec<EventSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(EVENTS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// List tickets owned by the signed-in member from `/api/me/tickets`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn fetch_my_tickets() -> Result<Vec<Ticket>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(MY_TICKETS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch admin dashboard aggregates from `/api/admin/summary`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(DASHBOARD_SUMMARY_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
