use crate::AppState;
use crate::views;
use crate::web::error::{Result as WebResult, WebError};

use axum::{
    extract::State,
    http::Uri,
    response::Html,
};
use serde::Serialize;

#[derive(Serialize)]
struct HomePage {
    title: &'static str,
    message: &'static str,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> WebResult<Html<String>> {
    let page = HomePage {
        title: "Home",
        message: "Welcome to the User CRUD Application",
    };

    views::render(views::HOME, page)
        .map(Html)
        .map_err(|e| WebError::internal("Failed to render home page", e, state.environment))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> WebError {
    WebError::not_found(uri.to_string())
}
