use super::*;

#[test]
fn validate_email_trims_and_requires_at_sign() {
    assert_eq!(
        validate_email("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
    assert_eq!(validate_email("   "), Err("Enter a valid email address."));
    assert_eq!(validate_email("no-at-sign"), Err("Enter a valid email address."));
}

#[test]
fn validate_password_requires_value() {
    assert_eq!(validate_password("hunter2"), Ok("hunter2".to_owned()));
    assert_eq!(validate_password(""), Err("Enter your password."));
}

#[test]
fn validate_password_pair_requires_match() {
    assert_eq!(
        validate_password_pair("secret", "secret"),
        Ok("secret".to_owned())
    );
    assert_eq!(
        validate_password_pair("secret", "other"),
        Err("Passwords do not match.")
    );
    assert_eq!(validate_password_pair("", ""), Err("Enter a password."));
}

#[test]
fn validate_details_requires_both_fields() {
    assert_eq!(
        validate_details(" 555-0100 ", " Initech "),
        Ok(("555-0100".to_owned(), "Initech".to_owned()))
    );
    assert_eq!(
        validate_details("", "Initech"),
        Err("Please enter your phone number.")
    );
    assert_eq!(
        validate_details("555-0100", "  "),
        Err("Please enter your organization name.")
    );
}

#[test]
fn validate_code_trims_and_requires_value() {
    assert_eq!(validate_code(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_code("   "), Err("Please enter the code."));
}

#[test]
fn entry_flow_starts_at_the_email_step() {
    assert_eq!(Step::default(), Step::Email);
}
