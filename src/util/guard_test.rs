use super::*;
use crate::state::session::Identity;

fn logged_out() -> Session {
    let mut session = Session::default();
    session.apply_restore(None);
    session
}

fn logged_in(roles: Vec<Role>) -> Session {
    let mut session = logged_out();
    session.apply_login(
        Identity {
            id: 1,
            email: "user@example.com".to_owned(),
            organization_id: None,
            roles,
        },
        "tok".to_owned(),
    );
    session
}

// =============================================================
// Guard variants
// =============================================================

#[test]
fn authenticated_route_renders_for_logged_in_user() {
    let session = logged_in(vec![Role::Security]);
    assert_eq!(decide(Access::Authenticated, &session), Decision::Render);
}

#[test]
fn authenticated_route_redirects_logged_out_user_to_login() {
    let session = logged_out();
    assert_eq!(
        decide(Access::Authenticated, &session),
        Decision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn anonymous_route_renders_for_logged_out_user() {
    let session = logged_out();
    assert_eq!(decide(Access::AnonymousOnly, &session), Decision::Render);
}

#[test]
fn anonymous_route_redirects_logged_in_user_to_dashboard() {
    let session = logged_in(vec![]);
    assert_eq!(
        decide(Access::AnonymousOnly, &session),
        Decision::Redirect(DASHBOARD_PATH)
    );
}

#[test]
fn role_route_admits_user_holding_the_role() {
    let session = logged_in(vec![Role::Admin, Role::Security]);
    assert_eq!(decide(Access::Role(Role::Admin), &session), Decision::Render);
}

#[test]
fn role_route_denies_authenticated_user_without_the_role() {
    let session = logged_in(vec![Role::Security]);
    assert_eq!(
        decide(Access::Role(Role::Admin), &session),
        Decision::Redirect(NOT_PERMITTED_PATH)
    );
}

#[test]
fn unauthenticated_takes_precedence_over_role_check() {
    let session = logged_out();
    assert_eq!(
        decide(Access::Role(Role::Admin), &session),
        Decision::Redirect(LOGIN_PATH)
    );
}

// =============================================================
// The initializing gate
// =============================================================

#[test]
fn every_variant_defers_while_initializing() {
    let session = Session::default();
    for access in [
        Access::AnonymousOnly,
        Access::Authenticated,
        Access::Role(Role::Admin),
    ] {
        assert_eq!(decide(access, &session), Decision::Defer);
    }
}

#[test]
fn fresh_load_with_no_storage_then_admin_route_goes_to_login() {
    // Startup: initializing → restore finds nothing → /employees redirects
    // to login, not to the not-permitted page.
    let mut session = Session::default();
    assert_eq!(decide(Access::Role(Role::Admin), &session), Decision::Defer);
    session.apply_restore(None);
    let access = access_for_path("/employees").expect("employees is a known route");
    assert_eq!(decide(access, &session), Decision::Redirect(LOGIN_PATH));
}

#[test]
fn restored_admin_session_renders_admin_route() {
    let mut session = Session::default();
    session.apply_restore(Some((
        "abc".to_owned(),
        Identity {
            id: 1,
            email: "admin@example.com".to_owned(),
            organization_id: None,
            roles: vec![Role::Admin],
        },
    )));
    let access = access_for_path("/employees").expect("employees is a known route");
    assert_eq!(decide(access, &session), Decision::Render);
}

// =============================================================
// Route table lookup
// =============================================================

#[test]
fn lookup_matches_exact_prefix() {
    assert_eq!(access_for_path("/login"), Some(Access::AnonymousOnly));
    assert_eq!(access_for_path("/employees"), Some(Access::Role(Role::Admin)));
}

#[test]
fn lookup_matches_nested_paths_under_a_prefix() {
    assert_eq!(access_for_path("/video-cameras/3"), Some(Access::Authenticated));
    assert_eq!(
        access_for_path("/employees/3/edit"),
        Some(Access::Role(Role::Admin))
    );
}

#[test]
fn lookup_does_not_match_sibling_prefixes() {
    // "/alerts-archive" is not under "/alerts".
    assert_eq!(access_for_path("/alerts-archive"), None);
}

#[test]
fn unknown_path_has_no_entry() {
    assert_eq!(access_for_path("/no-such-page"), None);
}

// =============================================================
// Catch-all redirect
// =============================================================

#[test]
fn not_found_redirects_by_auth_state() {
    assert_eq!(not_found_redirect_target(true), DASHBOARD_PATH);
    assert_eq!(not_found_redirect_target(false), LOGIN_PATH);
}
