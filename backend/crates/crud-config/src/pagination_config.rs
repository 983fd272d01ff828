use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_PAGE_LIMIT, DEFAULT_PAGE_LIMIT};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size when the request does not name one
    pub default_limit: u32,
    /// Upper bound for a requested page size
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::pagination(
                "pagination.default_limit must be at least 1",
            ));
        }

        if self.default_limit > self.max_limit {
            return Err(ConfigError::pagination(format!(
                "pagination.default_limit ({}) cannot exceed pagination.max_limit ({})",
                self.default_limit, self.max_limit
            )));
        }

        Ok(())
    }
}
