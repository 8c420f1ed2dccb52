use super::*;
use crate::state::session::{Identity, Role};

fn session_with_roles(roles: Vec<Role>) -> Session {
    let mut session = Session::default();
    session.apply_restore(Some((
        "tok".to_owned(),
        Identity {
            id: 1,
            email: "user@example.com".to_owned(),
            organization_id: None,
            roles,
        },
    )));
    session
}

#[test]
fn admin_sees_every_menu_entry() {
    let session = session_with_roles(vec![Role::Admin]);
    let labels: Vec<&str> = visible_nav_items(&session)
        .iter()
        .map(|item| item.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Home",
            "Observer mode",
            "Video Cameras",
            "Alerts",
            "Employees",
            "Security Personnel",
        ]
    );
}

#[test]
fn security_user_does_not_see_admin_entries() {
    let session = session_with_roles(vec![Role::Security]);
    let labels: Vec<&str> = visible_nav_items(&session)
        .iter()
        .map(|item| item.label)
        .collect();
    assert!(!labels.contains(&"Employees"));
    assert!(!labels.contains(&"Security Personnel"));
    assert!(labels.contains(&"Alerts"));
}

#[test]
fn logged_out_session_sees_no_entries() {
    let mut session = Session::default();
    session.apply_restore(None);
    assert!(visible_nav_items(&session).is_empty());
}

#[test]
fn every_menu_path_has_an_access_entry() {
    for item in NAV_ITEMS {
        assert!(
            access_for_path(item.path).is_some(),
            "menu entry {} missing from the route-access table",
            item.path
        );
    }
}
