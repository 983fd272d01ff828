use crud_core::User;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User DTO for JSON serialization. Timestamps are RFC 3339.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub address: Option<String>,
    pub gender: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            full_name: u.full_name(),
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            address: u.address,
            gender: u.gender,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
