use crate::web::user_form::UserForm;

use crud_core::User;

use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A user row as shown on the list page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub address: Option<String>,
    pub gender_label: &'static str,
    pub created_at: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
            email: user.email.clone(),
            address: user.address.clone(),
            gender_label: user.gender_label(),
            created_at: user.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Values that fill the create/edit form, either loaded from the store or
/// echoed back from a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub gender: bool,
}

impl From<&User> for FormValues {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            address: user.address.clone().unwrap_or_default(),
            gender: user.gender,
        }
    }
}

impl From<&UserForm> for FormValues {
    fn from(form: &UserForm) -> Self {
        let text = |value: &Option<String>| value.as_deref().unwrap_or("").trim().to_string();

        Self {
            id: form.id(),
            first_name: text(&form.first_name),
            last_name: text(&form.last_name),
            email: text(&form.email),
            address: text(&form.address),
            gender: form.gender_flag().as_bool(),
        }
    }
}
