use crate::WebError;
use crate::web::error::GENERIC_MESSAGE;

use crud_config::Environment;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_text(error: WebError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_internal_error_in_development_shows_detail() {
    let error = WebError::internal("Failed to fetch users", "pool timed out", Environment::Development);

    let (status, body) = body_text(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Failed to fetch users: pool timed out"));
}

#[tokio::test]
async fn test_internal_error_in_production_hides_detail() {
    let error = WebError::internal("Failed to fetch users", "pool timed out", Environment::Production);

    let (status, body) = body_text(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains(GENERIC_MESSAGE));
    assert!(!body.contains("pool timed out"));
}

#[tokio::test]
async fn test_not_found_names_the_path() {
    let (status, body) = body_text(WebError::not_found("/nowhere")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("nowhere was not found."));
}
