use super::*;

fn identity(roles: Vec<Role>) -> Identity {
    Identity {
        id: 1,
        email: "admin@example.com".to_owned(),
        organization_id: Some(7),
        roles,
    }
}

// =============================================================
// Defaults and the initializing phase
// =============================================================

#[test]
fn default_session_is_initializing_and_logged_out() {
    let session = Session::default();
    assert!(session.is_initializing());
    assert!(!session.is_authenticated());
    assert!(session.credential().is_none());
    assert!(session.identity().is_none());
}

#[test]
fn restore_with_record_authenticates_and_ends_initializing() {
    let mut session = Session::default();
    session.apply_restore(Some(("abc".to_owned(), identity(vec![Role::Admin]))));
    assert!(!session.is_initializing());
    assert!(session.is_authenticated());
    assert_eq!(session.credential(), Some("abc"));
    assert_eq!(session.roles(), Some(&[Role::Admin][..]));
}

#[test]
fn restore_without_record_ends_initializing_logged_out() {
    let mut session = Session::default();
    session.apply_restore(None);
    assert!(!session.is_initializing());
    assert!(!session.is_authenticated());
}

#[test]
fn restore_is_plain_assignment_and_safe_to_repeat() {
    let mut session = Session::default();
    session.apply_restore(None);
    session.apply_restore(Some(("abc".to_owned(), identity(vec![]))));
    assert!(!session.is_initializing());
    assert!(session.is_authenticated());
}

// =============================================================
// Login / logout pairing
// =============================================================

#[test]
fn login_sets_identity_and_credential_together() {
    let mut session = Session::default();
    session.apply_restore(None);
    session.apply_login(identity(vec![Role::Security]), "tok".to_owned());
    assert!(session.is_authenticated());
    assert_eq!(session.credential(), Some("tok"));
    assert_eq!(session.identity().map(|i| i.id), Some(1));
}

#[test]
fn logout_clears_identity_and_credential_together() {
    let mut session = Session::default();
    session.apply_restore(None);
    session.apply_login(identity(vec![Role::Admin]), "tok".to_owned());
    session.apply_logout();
    assert!(!session.is_authenticated());
    assert!(session.credential().is_none());
    assert!(session.identity().is_none());
}

#[test]
fn identity_present_iff_credential_present_across_transitions() {
    let mut session = Session::default();
    let check = |s: &Session| assert_eq!(s.identity().is_some(), s.credential().is_some());
    check(&session);
    session.apply_restore(None);
    check(&session);
    session.apply_login(identity(vec![]), "tok".to_owned());
    check(&session);
    session.apply_logout();
    check(&session);
}

// =============================================================
// Role predicates
// =============================================================

#[test]
fn role_predicates_false_when_logged_out() {
    let session = Session::default();
    assert!(!session.is_admin());
    assert!(!session.is_security());
    assert!(session.roles().is_none());
}

#[test]
fn admin_and_security_are_independent() {
    let mut session = Session::default();
    session.apply_login(identity(vec![Role::Security]), "tok".to_owned());
    assert!(!session.is_admin());
    assert!(session.is_security());
}

#[test]
fn both_roles_can_be_held_at_once() {
    let mut session = Session::default();
    session.apply_login(identity(vec![Role::Admin, Role::Security]), "tok".to_owned());
    assert!(session.is_admin());
    assert!(session.is_security());
}

#[test]
fn logged_in_with_no_roles_is_distinct_from_logged_out() {
    let mut session = Session::default();
    session.apply_login(identity(vec![]), "tok".to_owned());
    assert_eq!(session.roles(), Some(&[][..]));
    assert!(!session.is_admin());
    assert!(!session.is_security());
}

// =============================================================
// Identity wire format
// =============================================================

#[test]
fn identity_deserializes_role_names() {
    let parsed: Identity =
        serde_json::from_str(r#"{"id":1,"email":"a@b.com","organization_id":2,"roles":["ADMIN","SECURITY"]}"#)
            .expect("identity should parse");
    assert_eq!(parsed.roles, vec![Role::Admin, Role::Security]);
}

#[test]
fn identity_skips_unknown_role_names() {
    let parsed: Identity =
        serde_json::from_str(r#"{"id":1,"email":"a@b.com","roles":["ADMIN","AUDITOR"]}"#)
            .expect("unknown roles should not fail the identity");
    assert_eq!(parsed.roles, vec![Role::Admin]);
    assert_eq!(parsed.organization_id, None);
}

#[test]
fn identity_without_roles_field_parses_empty() {
    let parsed: Identity = serde_json::from_str(r#"{"id":1,"email":"a@b.com"}"#)
        .expect("roles field should default");
    assert!(parsed.roles.is_empty());
}
