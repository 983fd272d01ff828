use crud_core::{NewUser, User};
use crud_db::UserRepository;

use chrono::{Duration, Utc};

/// Creates a NewUser with sensible defaults
pub fn new_user(first_name: &str, email: &str) -> NewUser {
    NewUser {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: email.to_string(),
        address: Some("1 Test Street".to_string()),
        gender: true,
    }
}

/// Inserts users in order with strictly increasing creation times
pub async fn insert_users_in_order(repo: &UserRepository, names: &[&str]) -> Vec<User> {
    let base = Utc::now();
    let mut users = Vec::new();

    for (i, name) in names.iter().enumerate() {
        let email = format!("{}@example.com", name.to_lowercase());
        let created_at = base + Duration::seconds(i as i64);
        let user = repo
            .create(&new_user(name, &email), created_at)
            .await
            .expect("Failed to insert user");
        users.push(user);
    }

    users
}
