use crate::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use validator::ValidationErrors;

/// Collapse validator output into a single `CoreError`, reporting the first
/// failing field in `field_order` so messages are stable between runs.
#[track_caller]
pub(crate) fn first_violation(errors: &ValidationErrors, field_order: &[&str]) -> CoreError {
    let location = ErrorLocation::from(Location::caller());
    let field_errors = errors.field_errors();

    for field in field_order {
        let found = field_errors.iter().find(|(name, _)| {
            let name: &str = name;
            name == *field
        });

        if let Some((_, violations)) = found
            && let Some(violation) = violations.first()
        {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));

            return CoreError::Validation {
                message,
                field: Some(field.to_string()),
                location,
            };
        }
    }

    CoreError::Validation {
        message: errors.to_string(),
        field: None,
        location,
    }
}

/// Trim a submitted value, turning blank input into `None`.
pub(crate) fn trimmed_or_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
