use serde::Serialize;

/// Head counts over the whole table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: i64,
    pub male_count: i64,
    pub female_count: i64,
}
