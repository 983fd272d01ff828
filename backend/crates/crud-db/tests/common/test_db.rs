use crud_db::Database;

/// Creates an in-memory database with migrations run
pub async fn create_test_database() -> Database {
    Database::open_in_memory()
        .await
        .expect("Failed to create test database")
}
