use super::*;

fn draft(first: &str, last: &str, email: &str) -> EmployeeForm {
    EmployeeForm {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        position: " Analyst ".to_owned(),
    }
}

#[test]
fn employee_form_requires_both_names() {
    assert_eq!(
        validate_employee_form(&draft("", "Lovelace", "")),
        Err("First and last name are required.")
    );
    assert_eq!(
        validate_employee_form(&draft("Ada", "  ", "")),
        Err("First and last name are required.")
    );
}

#[test]
fn employee_form_validates_email_when_present() {
    assert_eq!(
        validate_employee_form(&draft("Ada", "Lovelace", "not-an-email")),
        Err("Enter a valid email address.")
    );
    assert!(validate_employee_form(&draft("Ada", "Lovelace", "")).is_ok());
}

#[test]
fn employee_form_trims_every_field() {
    let form =
        validate_employee_form(&draft(" Ada ", " Lovelace ", " ada@example.com ")).expect("valid");
    assert_eq!(form.first_name, "Ada");
    assert_eq!(form.last_name, "Lovelace");
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(form.position, "Analyst");
}
