use crate::validation::{first_violation, trimmed_or_none};
use crate::{Flag, Result as CoreResult};

use serde::Deserialize;
use validator::Validate;

const FIELD_ORDER: &[&str] = &["first_name", "last_name", "email"];

/// Partial update input. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// `Some("")` clears the address
    pub address: Option<String>,
    pub gender: Option<Flag>,
}

/// Normalized, validated update ready for the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UserChanges {
    #[validate(length(
        min = 1,
        max = 100,
        message = "First name must be between 1-100 characters"
    ))]
    pub first_name: Option<String>,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Last name must be between 1-100 characters"
    ))]
    pub last_name: Option<String>,

    #[validate(
        length(min = 1, max = 255, message = "Email cannot be empty"),
        email(message = "Must be a valid email address")
    )]
    pub email: Option<String>,

    /// Outer `None` = unchanged, `Some(None)` = cleared
    pub address: Option<Option<String>>,
    pub gender: Option<bool>,
}

impl UserPatch {
    #[track_caller]
    pub fn normalize(self) -> CoreResult<UserChanges> {
        let changes = UserChanges {
            first_name: self.first_name.map(|v| v.trim().to_string()),
            last_name: self.last_name.map(|v| v.trim().to_string()),
            email: self.email.map(|v| v.trim().to_string()),
            address: self.address.map(|v| trimmed_or_none(Some(v))),
            gender: self.gender.as_ref().map(Flag::as_bool),
        };

        changes
            .validate()
            .map_err(|e| first_violation(&e, FIELD_ORDER))?;

        Ok(changes)
    }
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.gender.is_none()
    }
}
