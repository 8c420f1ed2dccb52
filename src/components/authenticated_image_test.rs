use super::*;

#[test]
fn initials_takes_first_letter_of_each_part() {
    assert_eq!(initials("Ada Lovelace"), "AL");
}

#[test]
fn initials_uppercases() {
    assert_eq!(initials("grace hopper"), "GH");
}

#[test]
fn initials_falls_back_to_question_mark() {
    assert_eq!(initials(""), "?");
    assert_eq!(initials("   "), "?");
}

#[test]
fn initials_handles_single_name() {
    assert_eq!(initials("Cher"), "C");
}
