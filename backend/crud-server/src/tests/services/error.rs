use crate::ServiceError;
use crate::services::error::EMAIL_TAKEN_MESSAGE;

use crud_core::CoreError;
use crud_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;

#[test]
fn test_unique_violation_becomes_conflict() {
    let error = ServiceError::from(DbError::UniqueViolation {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ServiceError::Conflict { .. }));
    assert_eq!(error.user_message(), Some(EMAIL_TAKEN_MESSAGE));
}

#[test]
fn test_other_db_errors_become_store_errors() {
    let error = ServiceError::from(DbError::Migration {
        message: "bad migration".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ServiceError::Store { .. }));
    assert_eq!(error.user_message(), None);
}

#[test]
fn test_core_validation_keeps_message_and_field() {
    let error = ServiceError::from(CoreError::Validation {
        message: "Must be a valid email address".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    });

    match error {
        ServiceError::Validation { message, field, .. } => {
            assert_eq!(message, "Must be a valid email address");
            assert_eq!(field.as_deref(), Some("email"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_not_found_has_no_user_message() {
    assert_eq!(ServiceError::not_found(7).user_message(), None);
}
