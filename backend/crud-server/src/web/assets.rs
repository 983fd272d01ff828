use axum::{http::header, response::IntoResponse};

const STYLESHEET: &str = include_str!("../../static/app.css");

/// GET /static/app.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}
