use serde::Deserialize;

/// `?id=` on the edit and delete routes
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Parse a user id. Anything other than a positive integer is `None`.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

/// The path segment wins when it holds a valid id, else the query string.
pub fn resolve_id(path: Option<&str>, query: &IdQuery) -> Option<i64> {
    parse_id(path).or_else(|| parse_id(query.id.as_deref()))
}
