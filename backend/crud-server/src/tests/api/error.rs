use crate::api::error::STORE_FAILURE;
use crate::{ApiError, ServiceError};

use crud_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn store_error() -> ServiceError {
    ServiceError::from(DbError::Initialization {
        message: "disk on fire".into(),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[tokio::test]
async fn test_internal_error_returns_500_envelope() {
    let error = ApiError::from_service("Failed to retrieve users", store_error());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to retrieve users");
    assert_eq!(json["error"], STORE_FAILURE);
    assert!(json.get("data").is_none());
}

#[test]
fn test_store_details_are_not_exposed() {
    let error = ApiError::from_service("Failed to get user statistics", store_error());

    let ApiError::Internal { error, .. } = error;
    assert!(!error.contains("disk on fire"));
}
