use crate::User;

use chrono::Utc;

fn user(gender: bool) -> User {
    let now = Utc::now();
    User {
        id: 1,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        address: None,
        gender,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_full_name() {
    assert_eq!(user(true).full_name(), "John Doe");
}

#[test]
fn test_gender_label() {
    assert_eq!(user(true).gender_label(), "Male");
    assert_eq!(user(false).gender_label(), "Female");
}
