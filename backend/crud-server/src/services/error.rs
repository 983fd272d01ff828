//! Failures of the user operations, independent of how they are presented.

use crud_core::CoreError;
use crud_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email address already exists!";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Email already used by another user
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("User {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    /// Underlying data-access failure
    #[error("Store error: {source}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn email_taken() -> Self {
        Self::Conflict {
            message: EMAIL_TAKEN_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message fit for showing next to a form. `None` for failures the user
    /// cannot fix by editing their input.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. } | Self::Conflict { message, .. } => Some(message),
            Self::NotFound { .. } | Self::Store { .. } => None,
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// The store's unique constraint is authoritative: a violation that slipped
/// past the pre-check still surfaces as a conflict.
impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { .. } => Self::email_taken(),
            source => Self::Store {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
