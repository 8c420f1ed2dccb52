use super::*;

fn draft(name: &str, port: &str) -> CameraForm {
    CameraForm {
        name: name.to_owned(),
        location: "Lobby".to_owned(),
        ip: "10.0.0.4".to_owned(),
        port: port.to_owned(),
    }
}

#[test]
fn camera_form_requires_a_name() {
    assert_eq!(
        validate_camera_form(&draft("  ", "8080")),
        Err("Camera name is required.")
    );
}

#[test]
fn camera_form_trims_fields() {
    let form = validate_camera_form(&draft(" lobby-cam ", "8080")).expect("valid form");
    assert_eq!(form.name, "lobby-cam");
}

#[test]
fn camera_form_rejects_non_numeric_port() {
    assert_eq!(
        validate_camera_form(&draft("lobby-cam", "eighty")),
        Err("Port must be a number.")
    );
}

#[test]
fn camera_form_allows_empty_port() {
    assert!(validate_camera_form(&draft("lobby-cam", "")).is_ok());
}
