use crate::web::id_param::parse_id;

use crud_core::{Flag, UserInput, UserPatch};

use serde::Deserialize;

pub const REQUIRED_FIELDS_MESSAGE: &str = "First name, last name and email are required!";

/// Fields posted by the create and edit forms. Every field is optional so a
/// truncated submission is reported as a form error instead of a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserForm {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Radio value, "1" for male and "0" for female
    pub gender: Option<String>,
}

impl UserForm {
    pub fn id(&self) -> Option<i64> {
        parse_id(self.id.as_deref())
    }

    /// First name, last name or email missing or blank.
    pub fn missing_required(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|v| v.as_deref().is_none_or(|s| s.trim().is_empty()))
    }

    pub fn gender_flag(&self) -> Flag {
        Flag::from(self.gender.as_deref().unwrap_or_default())
    }

    pub fn to_input(&self) -> UserInput {
        UserInput {
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            address: self.address.clone(),
            gender: self.gender_flag(),
        }
    }

    /// The edit form always posts every field; a blank address clears it.
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            address: Some(self.address.clone().unwrap_or_default()),
            gender: self.gender.is_some().then(|| self.gender_flag()),
        }
    }
}
