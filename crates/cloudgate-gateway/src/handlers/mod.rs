//! HTTP request handlers.
//!
//! This module contains all the endpoint handlers for the gateway API.

pub mod health;
pub mod identity;
pub mod objects;
pub mod params;
pub mod registry;

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

/// Run one outbound cloud call under the configured deadline.
///
/// An elapsed deadline cancels the call (the future is dropped) and
/// surfaces as [`ApiError::RemoteTimeout`].
pub(crate) async fn with_deadline<T>(
    deadline: Duration,
    call: impl Future<Output = cloudgate_aws::Result<T>> + Send,
) -> Result<T, ApiError> {
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(_) => Err(ApiError::RemoteTimeout),
    }
}

/// Reject a missing or empty required field.
pub(crate) fn require(field: &str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::required(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_empty() {
        assert!(require("name", None).is_err());
        assert!(require("name", Some(String::new())).is_err());
        assert_eq!(require("name", Some("db".into())).unwrap(), "db");
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_elapsing_maps_to_timeout() {
        let err = with_deadline(Duration::from_secs(30), async {
            tokio::time::sleep(Duration::from_secs(31)).await;
            Ok(())
        })
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::RemoteTimeout));
    }

    #[tokio::test]
    async fn completed_call_passes_through() {
        let value = with_deadline(Duration::from_secs(30), async { Ok(42) })
            .await
            .unwrap();
        assert_eq!(value, 42);
    }
}
