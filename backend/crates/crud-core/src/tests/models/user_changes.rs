use crate::{CoreError, Flag, UserPatch};

use googletest::prelude::*;

#[test]
fn given_empty_patch_when_normalized_then_changes_are_empty() {
    let changes = UserPatch::default().normalize().unwrap();

    assert_that!(changes.is_empty(), eq(true));
}

#[test]
fn given_address_only_patch_when_normalized_then_only_address_is_set() {
    let patch = UserPatch {
        address: Some(" 1 Oak Lane ".to_string()),
        ..Default::default()
    };

    let changes = patch.normalize().unwrap();

    assert_eq!(changes.address, Some(Some("1 Oak Lane".to_string())));
    assert_that!(changes.first_name, none());
    assert_that!(changes.email, none());
    assert_that!(changes.gender, none());
}

#[test]
fn given_blank_address_when_normalized_then_address_is_cleared() {
    let patch = UserPatch {
        address: Some("".to_string()),
        ..Default::default()
    };

    let changes = patch.normalize().unwrap();

    assert_eq!(changes.address, Some(None));
}

#[test]
fn given_string_gender_when_normalized_then_coerced() {
    let patch = UserPatch {
        gender: Some(Flag::from("0")),
        ..Default::default()
    };

    let changes = patch.normalize().unwrap();

    assert_eq!(changes.gender, Some(false));
}

#[test]
fn given_blank_email_when_normalized_then_validation_error() {
    let patch = UserPatch {
        email: Some("  ".to_string()),
        ..Default::default()
    };

    let result = patch.normalize();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "email"
    ));
}
