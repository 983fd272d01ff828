pub mod connection;
pub mod error;
pub mod repositories;
pub mod seed;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use seed::seed_demo_users;
