//! Regression coverage for user field validation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("John Test", "John Test")]
#[case("john test", "John Test")]
#[case("  ada LOVELACE ", "Ada Lovelace")]
#[case("Clementina DuBuque", "Clementina Dubuque")]
#[case("mrs. dennis schulist", "Mrs. Dennis Schulist")]
#[case("o'neil mcDONALD", "O'Neil Mcdonald")]
fn full_names_are_title_cased(#[case] raw: &str, #[case] expected: &str) {
    let name = FullName::new(raw).expect("full name");
    assert_eq!(name.as_ref(), expected);
}

#[rstest]
#[case("John")]
#[case("John ")]
#[case("   ")]
#[case("")]
fn names_without_internal_space_are_rejected(#[case] raw: &str) {
    assert_eq!(FullName::new(raw), Err(UserValidationError::NameMissingSpace));
}

#[rstest]
#[case("123456", false)]
#[case("1234567", true)]
#[case("1-770-736-8031 x56442", true)]
fn phone_numbers_need_seven_characters(#[case] raw: &str, #[case] accepted: bool) {
    assert_eq!(PhoneNumber::new(raw).is_ok(), accepted);
}

#[rstest]
#[case("test@example.com", true)]
#[case("Rey.Padberg@karina.biz", true)]
#[case("not-an-email", false)]
#[case("a@b", false)]
#[case("a b@example.com", false)]
fn email_addresses_are_checked(#[case] raw: &str, #[case] accepted: bool) {
    assert_eq!(EmailAddress::new(raw).is_ok(), accepted);
}

#[test]
fn new_user_reports_first_failing_field() {
    let err = NewUser::try_new("John Test", "john", "test@example.com", "123")
        .expect_err("short phone");
    assert_eq!(err, UserValidationError::PhoneTooShort { min: PHONE_MIN_LEN });
    assert_eq!(err.field(), "phone");
    assert_eq!(err.code(), "phone_too_short");
}

#[test]
fn user_round_trips_through_plain_json() {
    let fields = NewUser::try_new("John Test", "John_Test", "test@example.com", "1234567890")
        .expect("valid user");
    let user = User::new(11, fields);

    let value = serde_json::to_value(&user).expect("serialise");
    assert_eq!(
        value,
        json!({
            "id": 11,
            "name": "John Test",
            "username": "John_Test",
            "email": "test@example.com",
            "phone": "1234567890"
        })
    );
}

#[test]
fn deserialising_applies_validation() {
    let invalid = json!({
        "id": 1, "name": "Cher", "username": "cher", "email": "cher@example.com", "phone": "1234567"
    });
    assert!(serde_json::from_value::<User>(invalid).is_err());
}
