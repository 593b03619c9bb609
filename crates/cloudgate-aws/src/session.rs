//! Process-wide AWS session.
//!
//! The session wraps the resolved SDK configuration (credentials,
//! region, endpoints). It is built once at startup, never mutated, and
//! handed by reference to each adapter constructor.

use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;

use crate::error::{CloudError, Result};

/// Immutable credential-and-region bundle shared by every adapter.
#[derive(Debug, Clone)]
pub struct CloudSession {
    config: SdkConfig,
}

impl CloudSession {
    /// Resolve configuration from the standard AWS chain (environment
    /// variables, shared profile, or attached execution role) and force
    /// credential resolution so a misconfigured host fails at startup
    /// rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::Credentials` if no credentials can be
    /// resolved from the environment.
    pub async fn from_env() -> Result<Self> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let provider = config
            .credentials_provider()
            .ok_or_else(|| CloudError::Credentials("no credentials provider configured".into()))?;
        let credentials = provider
            .provide_credentials()
            .await
            .map_err(|err| CloudError::Credentials(err.to_string()))?;

        tracing::info!(
            access_key_id = %credentials.access_key_id(),
            region = ?config.region(),
            "AWS credentials resolved"
        );

        Ok(Self { config })
    }

    /// Build a session from an already-loaded SDK configuration.
    ///
    /// Used by tests to point the adapters at a stub endpoint.
    #[must_use]
    pub fn from_config(config: SdkConfig) -> Self {
        Self { config }
    }

    /// The underlying SDK configuration.
    #[must_use]
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }
}
