use crate::services::user_service::UserService;

use crud_config::{Environment, PaginationConfig};
use crud_db::Database;

/// Shared handler state. Cloned per request; clones share the store pool.
#[derive(Clone, Debug)]
pub struct AppState {
    pub users: UserService,
    pub environment: Environment,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(database: &Database, environment: Environment, pagination: PaginationConfig) -> Self {
        Self {
            users: UserService::new(database),
            environment,
            pagination,
        }
    }
}
