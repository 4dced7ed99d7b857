use super::*;
use crate::net::types::{Role, User};

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pass "),
        Ok(("a@b.com".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("a@b.com", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("not-an-email", "pw"), Err(INVALID_EMAIL));
    assert_eq!(validate_login_input("@example.com", "pw"), Err(INVALID_EMAIL));
    assert_eq!(validate_login_input("user@", "pw"), Err(INVALID_EMAIL));
}

#[test]
fn login_failure_message_maps_rejected_credentials() {
    assert_eq!(login_failure_message(&ApiError::Status(401)), "Incorrect email or password.");
    assert_eq!(login_failure_message(&ApiError::Status(403)), "Incorrect email or password.");
}

#[test]
fn login_failure_message_maps_rate_limit() {
    assert_eq!(login_failure_message(&ApiError::Status(429)), "Too many attempts. Try again in a minute.");
}

#[test]
fn login_failure_message_passes_through_other_errors() {
    assert_eq!(
        login_failure_message(&ApiError::Network("offline".to_owned())),
        "Sign-in failed: network error: offline"
    );
}

// =============================================================
// Landing after sign-in
// =============================================================

fn signed_in(role: Role) -> AuthState {
    AuthState::resolved(Some(User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: None,
        avatar_url: None,
        role,
    }))
}

#[test]
fn landing_for_admin_without_redirect_is_admin_home() {
    assert_eq!(landing_for(&signed_in(Role::Admin), None), "/admin");
    assert_eq!(landing_for(&signed_in(Role::Admin), Some("/")), "/admin");
}

#[test]
fn landing_for_admin_ignores_return_to() {
    assert_eq!(landing_for(&signed_in(Role::Admin), Some("/tickets")), "/admin");
}

#[test]
fn landing_for_member_follows_return_to() {
    assert_eq!(landing_for(&signed_in(Role::Member), Some("/tickets")), "/tickets");
    assert_eq!(landing_for(&signed_in(Role::Member), None), "/");
}

#[test]
fn landing_for_member_rejects_foreign_redirect() {
    assert_eq!(landing_for(&signed_in(Role::Member), Some("https://evil.example")), "/");
    assert_eq!(landing_for(&signed_in(Role::Member), Some("//evil.example")), "/");
}
