use super::*;
use crate::util::guard::{DASHBOARD_PATH, LOGIN_PATH};

#[test]
fn authenticated_visitors_go_to_the_dashboard() {
    assert_eq!(not_found_redirect_target(true), DASHBOARD_PATH);
}

#[test]
fn anonymous_visitors_go_to_login() {
    assert_eq!(not_found_redirect_target(false), LOGIN_PATH);
}
