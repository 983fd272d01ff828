use crate::api::users::list_users_query::ListUsersQuery;

use serde::Deserialize;

/// Query string of `GET /users`: list parameters plus the notice left by
/// the previous redirect.
#[derive(Debug, Default, Deserialize)]
pub struct UsersPageQuery {
    #[serde(flatten)]
    pub list: ListUsersQuery,
    pub success: Option<String>,
    pub error: Option<String>,
}
