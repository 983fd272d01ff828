//! HTML error pages.
//!
//! Unexpected failures render `error.html` with a 500. The underlying error
//! text is only shown in the development environment.

use crate::views;

use crud_config::Environment;

use std::fmt::Display;
use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const GENERIC_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum WebError {
    /// Unexpected failure (500)
    #[error("Internal error: {context}: {detail} {location}")]
    Internal {
        context: String,
        detail: String,
        show_detail: bool,
        location: ErrorLocation,
    },

    /// Unknown route (404)
    #[error("Page not found: {path} {location}")]
    NotFound {
        path: String,
        location: ErrorLocation,
    },
}

#[derive(Serialize)]
struct ErrorPage<'a> {
    title: &'a str,
    message: &'a str,
}

impl WebError {
    /// `context` names the failed action, e.g. "Failed to fetch users".
    #[track_caller]
    pub fn internal(context: impl Into<String>, error: impl Display, environment: Environment) -> Self {
        Self::Internal {
            context: context.into(),
            detail: error.to_string(),
            show_detail: environment.is_development(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Text shown on the page.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal {
                context,
                detail,
                show_detail: true,
                ..
            } => format!("{}: {}", context, detail),
            Self::Internal { .. } => GENERIC_MESSAGE.to_string(),
            Self::NotFound { path, .. } => format!("The page {} was not found.", path),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Internal { .. } => "Error",
            Self::NotFound { .. } => "404 - Page Not Found",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::Internal { .. } => log::error!("{}", self),
            Self::NotFound { .. } => log::warn!("{}", self),
        }

        let status = self.status();
        let message = self.public_message();
        let page = ErrorPage {
            title: self.title(),
            message: &message,
        };

        match views::render(views::ERROR, page) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                log::error!("Failed to render error page: {}", e);
                (status, message).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
