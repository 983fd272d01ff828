//! Pagination and search parameters for listing users.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// A request for one page of users, optionally filtered by a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    /// Case-insensitive substring matched against first name, last name,
    /// email and address
    pub search: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, limit: u32, search: Option<String>) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// Build a request from raw query-string values.
    ///
    /// Missing, non-numeric or non-positive `page`/`limit` values fall back to
    /// the defaults. `limit` is clamped to `max_limit`.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        search: Option<&str>,
        default_limit: u32,
        max_limit: u32,
    ) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit)
            .unwrap_or(default_limit)
            .min(max_limit.max(1));

        Self::new(page, limit, search.map(str::to_string))
    }

    /// Number of rows to skip: `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

fn parse_positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}
