//! User entity - the single record type managed by the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user. `id` and both timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all users, compared case-insensitively
    pub email: String,
    pub address: Option<String>,
    /// true = male, false = female
    pub gender: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn gender_label(&self) -> &'static str {
        if self.gender { "Male" } else { "Female" }
    }
}
