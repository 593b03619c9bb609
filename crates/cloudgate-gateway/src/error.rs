//! API error types and responses.
//!
//! This module defines the standard error format for all API responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use cloudgate_aws::CloudError;

/// API error type that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/empty required parameter or malformed form body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The outbound cloud call did not complete within the deadline.
    #[error("cloud request timed out")]
    RemoteTimeout,

    /// Internal server error. The message is generic; the underlying
    /// cause is only ever logged server-side.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

/// Error details.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RemoteTimeout | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::RemoteTimeout => "remote_timeout",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Convenience constructor for a missing required parameter.
    #[must_use]
    pub fn required(name: &str) -> Self {
        Self::BadRequest(format!("parameter '{name}' is required"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = self.to_string();

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CloudError> for ApiError {
    fn from(err: CloudError) -> Self {
        // Remote detail stays in the server log; clients get a
        // generic message per endpoint.
        tracing::error!(error = %err, "Cloud adapter error");
        match err {
            CloudError::Remote { service, .. } => {
                Self::Internal(format!("{service} request failed"))
            }
            CloudError::NoAuthorizationData
            | CloudError::TokenEncoding(_)
            | CloudError::TokenFormat => {
                Self::Internal("invalid authorization token format".to_string())
            }
            CloudError::MissingField(_) => Self::Internal("malformed cloud response".to_string()),
            CloudError::Io(_) => Self::Internal("local i/o error".to_string()),
            CloudError::Credentials(_) => Self::Internal("credential error".to_string()),
        }
    }
}
