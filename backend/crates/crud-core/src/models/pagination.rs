use crate::PageRequest;

use serde::Serialize;

/// Pagination metadata shown alongside a page of users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(request: &PageRequest, total: i64) -> Self {
        let limit = i64::from(request.limit.max(1));
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: (total.max(0) + limit - 1) / limit,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        i64::from(self.page) < self.total_pages
    }
}
