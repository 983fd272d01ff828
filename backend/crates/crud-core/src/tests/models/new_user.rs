use crate::{CoreError, Flag, UserInput};

use googletest::prelude::*;

fn input(first: &str, last: &str, email: &str) -> UserInput {
    UserInput {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        address: None,
        gender: Flag::from("1"),
    }
}

fn failing_field(err: CoreError) -> Option<String> {
    match err {
        CoreError::Validation { field, .. } => field,
    }
}

#[test]
fn given_padded_input_when_normalized_then_fields_are_trimmed() {
    // Given
    let mut raw = input("  Jane ", " Smith", " jane@example.com ");
    raw.address = Some("  456 Oak Avenue ".to_string());

    // When
    let new_user = raw.normalize().unwrap();

    // Then
    assert_that!(new_user.first_name, eq("Jane"));
    assert_that!(new_user.last_name, eq("Smith"));
    assert_that!(new_user.email, eq("jane@example.com"));
    assert_eq!(new_user.address.as_deref(), Some("456 Oak Avenue"));
    assert_that!(new_user.gender, eq(true));
}

#[test]
fn given_blank_address_when_normalized_then_address_is_none() {
    let mut raw = input("Jane", "Smith", "jane@example.com");
    raw.address = Some("   ".to_string());

    let new_user = raw.normalize().unwrap();

    assert_that!(new_user.address, none());
}

#[test]
fn given_string_gender_when_normalized_then_coerced_to_bool() {
    let mut raw = input("Jane", "Smith", "jane@example.com");
    raw.gender = Flag::from("false");

    let new_user = raw.normalize().unwrap();

    assert_that!(new_user.gender, eq(false));
}

#[test]
fn given_blank_first_name_when_normalized_then_validation_error_on_first_name() {
    let result = input("   ", "Smith", "jane@example.com").normalize();

    assert_that!(result, err(anything()));
    let field = failing_field(result.unwrap_err());
    assert_eq!(field.as_deref(), Some("first_name"));
}

#[test]
fn given_overlong_last_name_when_normalized_then_validation_error_on_last_name() {
    let long_name = "x".repeat(101);
    let result = input("Jane", &long_name, "jane@example.com").normalize();

    let field = failing_field(result.unwrap_err());
    assert_eq!(field.as_deref(), Some("last_name"));
}

#[test]
fn given_malformed_email_when_normalized_then_validation_error_mentions_email() {
    let result = input("Jane", "Smith", "not-an-email").normalize();

    let err = result.unwrap_err();
    let CoreError::Validation { message, field, .. } = err;
    assert_eq!(field.as_deref(), Some("email"));
    assert_that!(message, eq("Must be a valid email address"));
}

#[test]
fn given_name_of_exactly_100_chars_when_normalized_then_ok() {
    let name = "a".repeat(100);
    let result = input(&name, "Smith", "jane@example.com").normalize();

    assert_that!(result, ok(anything()));
}
