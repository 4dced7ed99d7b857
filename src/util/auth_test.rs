use super::*;

const LOCATION: &str = "/admin?tab=sales";

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: None,
        avatar_url: None,
        role,
    }
}

fn signed_out() -> AuthState {
    AuthState::resolved(None)
}

fn signed_in(role: Role) -> AuthState {
    AuthState::resolved(Some(user(role)))
}

fn flags(require_auth: bool, require_admin: bool, require_non_admin: bool) -> RouteRequirements {
    RouteRequirements { require_auth, require_admin, require_non_admin }
}

fn all_requirement_sets() -> Vec<RouteRequirements> {
    let mut out = Vec::new();
    for bits in 0..8u8 {
        out.push(flags(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0));
    }
    out
}

fn all_users() -> Vec<Option<User>> {
    vec![None, Some(user(Role::Member)), Some(user(Role::Admin))]
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loading_is_pending_for_every_input() {
    for requirements in all_requirement_sets() {
        for u in all_users() {
            let session = AuthState { user: u, loading: true };
            assert_eq!(
                evaluate_access(&session, requirements, LOCATION),
                AccessDecision::Pending,
                "{requirements:?}"
            );
        }
    }
}

// =============================================================
// require_auth
// =============================================================

#[test]
fn require_auth_without_user_redirects_to_login_with_location() {
    let decision = evaluate_access(&signed_out(), RouteRequirements::authenticated(), LOCATION);
    assert_eq!(decision, AccessDecision::RedirectToLogin { return_to: LOCATION.to_owned() });
    assert_eq!(decision.redirect_href().as_deref(), Some("/login?redirect=%2Fadmin%3Ftab%3Dsales"));
}

#[test]
fn require_auth_with_any_user_allows() {
    for role in [Role::Member, Role::Admin] {
        assert_eq!(
            evaluate_access(&signed_in(role), RouteRequirements::authenticated(), LOCATION),
            AccessDecision::Allow
        );
    }
}

// =============================================================
// require_admin
// =============================================================

#[test]
fn require_admin_with_member_redirects_home() {
    let decision = evaluate_access(&signed_in(Role::Member), flags(false, true, false), LOCATION);
    assert_eq!(decision, AccessDecision::RedirectToHome);
    assert_eq!(decision.redirect_href().as_deref(), Some("/"));
}

#[test]
fn require_admin_without_user_redirects_home_when_auth_not_required() {
    assert_eq!(
        evaluate_access(&signed_out(), flags(false, true, false), LOCATION),
        AccessDecision::RedirectToHome
    );
}

#[test]
fn admin_preset_without_user_prefers_login() {
    assert_eq!(
        evaluate_access(&signed_out(), RouteRequirements::admin(), LOCATION),
        AccessDecision::RedirectToLogin { return_to: LOCATION.to_owned() }
    );
}

#[test]
fn require_admin_with_admin_allows() {
    assert_eq!(
        evaluate_access(&signed_in(Role::Admin), RouteRequirements::admin(), LOCATION),
        AccessDecision::Allow
    );
}

// =============================================================
// require_non_admin
// =============================================================

#[test]
fn require_non_admin_with_admin_redirects_to_admin_home() {
    let decision = evaluate_access(&signed_in(Role::Admin), flags(false, false, true), LOCATION);
    assert_eq!(decision, AccessDecision::RedirectToAdminHome);
    assert_eq!(decision.redirect_href().as_deref(), Some("/admin"));
}

#[test]
fn require_non_admin_allows_members_and_anonymous() {
    assert_eq!(
        evaluate_access(&signed_in(Role::Member), flags(false, false, true), LOCATION),
        AccessDecision::Allow
    );
    assert_eq!(evaluate_access(&signed_out(), flags(false, false, true), LOCATION), AccessDecision::Allow);
}

#[test]
fn member_preset_routes_each_session() {
    let req = RouteRequirements::member();
    assert_eq!(
        evaluate_access(&signed_out(), req, "/tickets"),
        AccessDecision::RedirectToLogin { return_to: "/tickets".to_owned() }
    );
    assert_eq!(evaluate_access(&signed_in(Role::Member), req, "/tickets"), AccessDecision::Allow);
    assert_eq!(evaluate_access(&signed_in(Role::Admin), req, "/tickets"), AccessDecision::RedirectToAdminHome);
}

// =============================================================
// No requirements
// =============================================================

#[test]
fn no_requirements_always_allows() {
    for u in all_users() {
        let session = AuthState::resolved(u);
        assert_eq!(evaluate_access(&session, RouteRequirements::public(), LOCATION), AccessDecision::Allow);
    }
    assert_eq!(RouteRequirements::public(), RouteRequirements::default());
}

// =============================================================
// Contradictory requirements
// =============================================================

#[test]
fn validate_rejects_admin_and_non_admin() {
    assert_eq!(flags(false, true, true).validate(), Err(RequirementConflict::AdminAndNonAdmin));
    assert_eq!(flags(true, true, true).validate(), Err(RequirementConflict::AdminAndNonAdmin));
}

#[test]
fn validate_accepts_presets() {
    for req in [
        RouteRequirements::public(),
        RouteRequirements::authenticated(),
        RouteRequirements::admin(),
        RouteRequirements::member(),
    ] {
        assert_eq!(req.validate(), Ok(req));
    }
}

#[test]
fn contradictory_flags_follow_cascade() {
    let req = flags(false, true, true);
    assert_eq!(evaluate_access(&signed_in(Role::Admin), req, LOCATION), AccessDecision::RedirectToAdminHome);
    assert_eq!(evaluate_access(&signed_in(Role::Member), req, LOCATION), AccessDecision::RedirectToHome);
    assert_eq!(evaluate_access(&signed_out(), req, LOCATION), AccessDecision::RedirectToHome);
}

// =============================================================
// Purity
// =============================================================

#[test]
fn evaluation_is_repeatable() {
    for requirements in all_requirement_sets() {
        for u in all_users() {
            for loading in [false, true] {
                let session = AuthState { user: u.clone(), loading };
                let first = evaluate_access(&session, requirements, LOCATION);
                let second = evaluate_access(&session, requirements, LOCATION);
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn pending_and_allow_have_no_redirect() {
    assert_eq!(AccessDecision::Pending.redirect_href(), None);
    assert_eq!(AccessDecision::Allow.redirect_href(), None);
}
