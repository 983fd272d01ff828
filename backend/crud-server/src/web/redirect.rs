//! Redirects back to the user list carrying a one-shot notice.

use axum::response::Redirect;
use url::form_urlencoded;

const LIST_PATH: &str = "/users";

pub const INVALID_ID: &str = "Invalid user ID";
pub const USER_NOT_FOUND: &str = "User not found";
pub const NOT_UPDATED: &str = "User not found or could not be updated";
pub const NOT_DELETED: &str = "User not found or could not be deleted";
pub const CREATED: &str = "User created successfully";
pub const UPDATED: &str = "User updated successfully";
pub const DELETED: &str = "User deleted successfully";

pub fn success(message: &str) -> Redirect {
    Redirect::to(&list_url("success", message))
}

pub fn error(message: &str) -> Redirect {
    Redirect::to(&list_url("error", message))
}

/// `/users?<key>=<message>` with the message form-encoded
pub fn list_url(key: &str, message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, message)
        .finish();

    format!("{}?{}", LIST_PATH, query)
}
