use crate::validation::{first_violation, trimmed_or_none};
use crate::{Flag, Result as CoreResult};

use serde::Deserialize;
use validator::Validate;

const FIELD_ORDER: &[&str] = &["first_name", "last_name", "email"];

/// Raw creation input as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    pub gender: Flag,
}

/// Normalized, validated creation input ready for the store.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUser {
    #[validate(length(
        min = 1,
        max = 100,
        message = "First name must be between 1-100 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Last name must be between 1-100 characters"
    ))]
    pub last_name: String,

    #[validate(
        length(min = 1, max = 255, message = "Email cannot be empty"),
        email(message = "Must be a valid email address")
    )]
    pub email: String,

    pub address: Option<String>,
    pub gender: bool,
}

impl UserInput {
    /// Trim text fields, coerce `gender` and validate the result.
    #[track_caller]
    pub fn normalize(self) -> CoreResult<NewUser> {
        let new_user = NewUser {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: trimmed_or_none(self.address),
            gender: self.gender.as_bool(),
        };

        new_user
            .validate()
            .map_err(|e| first_violation(&e, FIELD_ORDER))?;

        Ok(new_user)
    }
}
