//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route renders through `ProtectedRoute`, which asks
//! [`evaluate_access`] what to do with the current session snapshot. The
//! decision is a pure function of its arguments; navigation happens in the
//! component.
//!
//! EVALUATION ORDER
//! ================
//! Checks run in a fixed order and the first match wins:
//!
//! 1. session still loading        -> `Pending`
//! 2. `require_auth`, no user      -> `RedirectToLogin`
//! 3. `require_admin`, not admin   -> `RedirectToHome`
//! 4. `require_non_admin`, admin   -> `RedirectToAdminHome`
//! 5. otherwise                    -> `Allow`
//!
//! The flags are independent. A set with both `require_admin` and
//! `require_non_admin` is rejected by [`RouteRequirements::validate`], but if
//! one reaches the gate anyway the cascade above still applies as written.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::{self, Destination};
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;

/// Access requirements declared by a route. All flags default to off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    pub require_auth: bool,
    pub require_admin: bool,
    pub require_non_admin: bool,
}

/// Requirement sets that no user can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequirementConflict {
    #[error("route requires both admin and non-admin access")]
    AdminAndNonAdmin,
}

impl RouteRequirements {
    /// Open to everyone.
    #[must_use]
    pub const fn public() -> Self {
        Self { require_auth: false, require_admin: false, require_non_admin: false }
    }

    /// Any signed-in user.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self { require_auth: true, require_admin: false, require_non_admin: false }
    }

    /// Admins only.
    #[must_use]
    pub const fn admin() -> Self {
        Self { require_auth: true, require_admin: true, require_non_admin: false }
    }

    /// Signed-in members; admins are sent to their own landing page.
    #[must_use]
    pub const fn member() -> Self {
        Self { require_auth: true, require_admin: false, require_non_admin: true }
    }

    /// Reject sets that can never be satisfied.
    ///
    /// # Errors
    ///
    /// Returns [`RequirementConflict::AdminAndNonAdmin`] when both role
    /// flags are set.
    pub fn validate(self) -> Result<Self, RequirementConflict> {
        if self.require_admin && self.require_non_admin {
            return Err(RequirementConflict::AdminAndNonAdmin);
        }
        Ok(self)
    }
}

/// Outcome of a route access check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session not resolved yet; show a placeholder.
    Pending,
    /// Send the visitor to login, then back to `return_to`.
    RedirectToLogin { return_to: String },
    RedirectToHome,
    RedirectToAdminHome,
    /// Render the protected content unchanged.
    Allow,
}

impl AccessDecision {
    /// Target href for redirect outcomes.
    #[must_use]
    pub fn redirect_href(&self) -> Option<String> {
        match self {
            Self::RedirectToLogin { return_to } => Some(config::login_href(return_to)),
            Self::RedirectToHome => Some(Destination::Home.path().to_owned()),
            Self::RedirectToAdminHome => Some(Destination::AdminHome.path().to_owned()),
            Self::Pending | Self::Allow => None,
        }
    }
}

fn is_admin(user: Option<&User>) -> bool {
    match user.map(|u| u.role) {
        Some(Role::Admin) => true,
        Some(Role::Member) | None => false,
    }
}

/// Decide what a route renders for the given session snapshot.
///
/// `current_location` is only used as the post-login return target.
#[must_use]
pub fn evaluate_access(
    session: &AuthState,
    requirements: RouteRequirements,
    current_location: &str,
) -> AccessDecision {
    if session.loading {
        return AccessDecision::Pending;
    }

    let user = session.user.as_ref();

    if requirements.require_auth && user.is_none() {
        return AccessDecision::RedirectToLogin { return_to: current_location.to_owned() };
    }

    if requirements.require_admin && !is_admin(user) {
        return AccessDecision::RedirectToHome;
    }

    if requirements.require_non_admin && user.is_some() && is_admin(user) {
        return AccessDecision::RedirectToAdminHome;
    }

    AccessDecision::Allow
}
