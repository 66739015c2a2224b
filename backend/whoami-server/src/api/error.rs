//! Error types for the whoami endpoint
//!
//! Errors are answered with a plain-text body holding the client-facing
//! message; the full error, including where it was raised, only goes to the log.

use whoami_core::CoreError;

use std::panic::Location;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            ApiError::BadRequest { ref message, .. } => {
                log::warn!("{}", self);
                message.clone()
            }
            ApiError::Internal { ref message, .. } => {
                log::error!("{}", self);
                message.clone()
            }
        };

        (status, [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], message).into_response()
    }
}

/// Malformed input is the caller's fault; every other failure is ours
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        log::debug!("Identity resolution failed: {}", e);

        if e.is_client_error() {
            ApiError::BadRequest {
                message: e.message(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::Internal {
                message: e.message(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
