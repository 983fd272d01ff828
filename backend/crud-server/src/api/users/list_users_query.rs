use crud_config::PaginationConfig;
use crud_core::PageRequest;

use axum::extract::{Query, rejection::QueryRejection};
use log::debug;
use serde::Deserialize;

/// Query parameters for listing users. Values are kept as text and parsed
/// leniently so a malformed `page` or `limit` falls back to its default.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListUsersQuery {
    pub fn page_request(&self, config: &PaginationConfig) -> PageRequest {
        PageRequest::parse(
            self.page.as_deref(),
            self.limit.as_deref(),
            self.search.as_deref(),
            config.default_limit,
            config.max_limit,
        )
    }
}

/// A query string that fails to deserialize (a repeated key, say) is treated
/// as empty, so the handler falls back to its defaults.
pub fn lenient_query<T: Default>(query: Result<Query<T>, QueryRejection>) -> T {
    match query {
        Ok(Query(query)) => query,
        Err(e) => {
            debug!("Ignoring malformed query string: {}", e);
            T::default()
        }
    }
}
