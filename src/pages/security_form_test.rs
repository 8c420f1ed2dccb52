use super::*;

#[test]
fn security_form_requires_a_valid_email() {
    let draft = SecurityForm {
        email: "not-an-email".to_owned(),
        phone_number: String::new(),
    };
    assert_eq!(
        validate_security_form(&draft),
        Err("Enter a valid email address.")
    );
}

#[test]
fn security_form_trims_fields() {
    let draft = SecurityForm {
        email: " guard@example.com ".to_owned(),
        phone_number: " 555-0100 ".to_owned(),
    };
    let form = validate_security_form(&draft).expect("valid form");
    assert_eq!(form.email, "guard@example.com");
    assert_eq!(form.phone_number, "555-0100");
}
