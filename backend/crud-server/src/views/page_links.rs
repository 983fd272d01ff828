//! Navigation links for the paginated user list.

use crud_core::{PageRequest, Pagination};

use serde::Serialize;
use url::form_urlencoded;

const LIST_PATH: &str = "/users";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: i64,
    pub href: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
    pub pages: Vec<PageLink>,
}

impl PageLinks {
    /// Links for every page of `pagination`, keeping the active limit and
    /// search term in each URL.
    pub fn new(request: &PageRequest, pagination: &Pagination) -> Self {
        let href = |page: i64| page_href(page, request.limit, request.search.as_deref());
        let current = i64::from(pagination.page);

        Self {
            previous: pagination.has_previous().then(|| href(current - 1)),
            next: pagination.has_next().then(|| href(current + 1)),
            pages: (1..=pagination.total_pages)
                .map(|number| PageLink {
                    number,
                    href: href(number),
                    current: number == current,
                })
                .collect(),
        }
    }
}

fn page_href(page: i64, limit: u32, search: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    query.append_pair("limit", &limit.to_string());
    if let Some(search) = search {
        query.append_pair("search", search);
    }

    format!("{}?{}", LIST_PATH, query.finish())
}
