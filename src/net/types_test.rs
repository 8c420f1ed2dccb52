use super::*;

#[test]
fn login_response_parses_user_and_token() {
    let parsed: LoginResponse = serde_json::from_str(
        r#"{"user":{"id":1,"email":"a@b.com","organization_id":4,"roles":["ADMIN"]},"token":"abc"}"#,
    )
    .expect("login response should parse");
    assert_eq!(parsed.token, "abc");
    assert_eq!(parsed.user.roles, vec![Role::Admin]);
}

#[test]
fn camera_tolerates_missing_optional_fields() {
    let parsed: Camera = serde_json::from_str(r#"{"id":3,"name":"lobby"}"#)
        .expect("camera should parse without location/status/ip/port");
    assert_eq!(parsed.name, "lobby");
    assert!(parsed.location.is_none());
    assert!(parsed.port.is_none());
}

#[test]
fn zone_defaults_to_no_points() {
    let parsed: Zone = serde_json::from_str(r#"{"id":1,"name":"Zone 1","video_camera_id":3}"#)
        .expect("zone should parse without points");
    assert!(parsed.points.is_empty());
}

#[test]
fn alert_parses_zone_scoped_payload() {
    let parsed: Alert = serde_json::from_str(
        r#"{"id":9,"status":"active","camera_id":3,"camera_name":"lobby","zone_id":5,"zone_name":"Zone 2","created_at":"2025-04-01T08:30:00"}"#,
    )
    .expect("alert should parse");
    assert_eq!(parsed.zone_name.as_deref(), Some("Zone 2"));
    assert!(parsed.message.is_none());
}

#[test]
fn employee_full_name_joins_both_parts() {
    let employee = Employee {
        id: 1,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: None,
        position: None,
    };
    assert_eq!(employee.full_name(), "Ada Lovelace");
}
