//! Adapter error types.
//!
//! Every failure an adapter can produce funnels into [`CloudError`].
//! Remote failures keep their full source chain in the message so the
//! gateway can log them; the client only ever sees a generic message.

use aws_smithy_types::error::display::DisplayErrorContext;
use thiserror::Error;

/// A result type using `CloudError`.
pub type Result<T> = std::result::Result<T, CloudError>;

/// Errors that can occur in cloud adapter operations.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The remote service returned an error (not found, access denied,
    /// throttled, network failure).
    #[error("{service} request failed: {message}")]
    Remote {
        /// The AWS service that failed.
        service: &'static str,
        /// Rendered error chain from the SDK.
        message: String,
    },

    /// The registry returned no authorization records.
    #[error("registry response contained no authorization data")]
    NoAuthorizationData,

    /// The registry token was not valid base64.
    #[error("registry token is not valid base64: {0}")]
    TokenEncoding(#[from] base64::DecodeError),

    /// The decoded registry token had no `username:password` separator.
    #[error("registry token is missing the ':' separator")]
    TokenFormat,

    /// A required field was absent from an otherwise successful response.
    #[error("response was missing the {0} field")]
    MissingField(&'static str),

    /// Local I/O failure while staging an upload.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// No credentials could be resolved from the environment.
    #[error("unable to resolve AWS credentials: {0}")]
    Credentials(String),
}

impl CloudError {
    /// Wrap an SDK error, rendering its full source chain.
    pub fn remote<E>(service: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Remote {
            service,
            message: DisplayErrorContext(&err).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_names_service() {
        let err = CloudError::remote("ssm", std::io::Error::other("connection reset"));
        let rendered = err.to_string();
        assert!(rendered.starts_with("ssm request failed"));
        assert!(rendered.contains("connection reset"));
    }

    #[test]
    fn missing_field_display() {
        assert_eq!(
            CloudError::MissingField("Account").to_string(),
            "response was missing the Account field"
        );
    }
}
