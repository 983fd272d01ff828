//! REST API error types
//!
//! Every failure is reported in the same envelope as a success, with
//! `success: false` and a status code matching the failure.

use crate::api::envelope::ApiResponse;
use crate::services::error::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const STORE_FAILURE: &str = "Database operation failed";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Internal server error (500)
    #[error("Internal error: {message}: {error} {location}")]
    Internal {
        /// What the endpoint was doing, e.g. "Failed to retrieve users"
        message: String,
        /// Client-safe description of the cause
        error: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Wrap a service failure. Store details are logged, never returned.
    #[track_caller]
    pub fn from_service(message: impl Into<String>, e: ServiceError) -> Self {
        let error = match e {
            ServiceError::Store { ref source, .. } => {
                log::error!("Database error: {}", source);
                STORE_FAILURE.to_string()
            }
            ref other => other.user_message().unwrap_or(STORE_FAILURE).to_string(),
        };

        ApiError::Internal {
            message: message.into(),
            error,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Internal { message, error, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure(message, error),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
