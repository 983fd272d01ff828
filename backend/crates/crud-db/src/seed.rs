//! Demo records for a fresh database.

use crate::{Database, Result as DbErrorResult, UserRepository};

use crud_core::NewUser;

use chrono::{Duration, Utc};
use log::info;

const DEMO_USERS: &[(&str, &str, &str, &str, bool)] = &[
    (
        "John",
        "Doe",
        "john.doe@example.com",
        "123 Main Street, New York, NY 10001",
        true,
    ),
    (
        "Jane",
        "Smith",
        "jane.smith@example.com",
        "456 Oak Avenue, Los Angeles, CA 90210",
        false,
    ),
    (
        "Mike",
        "Johnson",
        "mike.johnson@example.com",
        "789 Pine Road, Chicago, IL 60601",
        true,
    ),
    (
        "Sarah",
        "Williams",
        "sarah.williams@example.com",
        "321 Elm Street, Houston, TX 77001",
        false,
    ),
    (
        "David",
        "Brown",
        "david.brown@example.com",
        "654 Maple Drive, Phoenix, AZ 85001",
        true,
    ),
];

/// Insert the demo users when the table is empty. Returns how many rows were
/// inserted (0 when the table already had data).
pub async fn seed_demo_users(database: &Database) -> DbErrorResult<usize> {
    let repo = UserRepository::new(database);

    if repo.count(None).await? > 0 {
        return Ok(0);
    }

    let base = Utc::now();
    for (offset, (first_name, last_name, email, address, gender)) in DEMO_USERS.iter().enumerate() {
        let new_user = NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            address: Some(address.to_string()),
            gender: *gender,
        };
        // Spread timestamps so listing order matches seed order
        let created_at = base + Duration::milliseconds(offset as i64);
        repo.create(&new_user, created_at).await?;
    }

    info!("Seeded {} demo users", DEMO_USERS.len());
    Ok(DEMO_USERS.len())
}
