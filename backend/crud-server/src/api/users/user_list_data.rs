use crate::api::users::user_dto::UserDto;

use crud_core::Pagination;

use serde::Serialize;

/// `data` of the user list response
#[derive(Debug, Serialize)]
pub struct UserListData {
    pub users: Vec<UserDto>,
    pub pagination: Pagination,
}
