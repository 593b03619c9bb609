//! SSM Parameter Store adapter.

use async_trait::async_trait;
use aws_sdk_ssm::types::ParameterType;

use crate::error::{CloudError, Result};
use crate::session::CloudSession;

/// Capability interface for a remote key/value configuration service.
///
/// The gateway depends on this trait so test doubles can be injected
/// without touching a real AWS client.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch a parameter's value, requesting decryption for
    /// `SecureString` entries.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::Remote` if the call fails (including a
    /// missing or unauthorized parameter).
    async fn get(&self, name: &str) -> Result<String>;

    /// Create or update a parameter.
    ///
    /// `kind` is passed through untranslated; the remote service
    /// enforces the accepted parameter types.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::Remote` if the call fails.
    async fn put(&self, name: &str, value: &str, kind: &str) -> Result<()>;
}

/// `ParameterStore` backed by AWS Systems Manager.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    /// Create an adapter bound to the shared session.
    #[must_use]
    pub fn new(session: &CloudSession) -> Self {
        Self {
            client: aws_sdk_ssm::Client::new(session.sdk_config()),
        }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get(&self, name: &str) -> Result<String> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| CloudError::remote("ssm", err))?;

        let value = output
            .parameter()
            .and_then(|parameter| parameter.value())
            .ok_or(CloudError::MissingField("Parameter.Value"))?;

        Ok(value.to_string())
    }

    async fn put(&self, name: &str, value: &str, kind: &str) -> Result<()> {
        self.client
            .put_parameter()
            .name(name)
            .value(value)
            .r#type(ParameterType::from(kind))
            .send()
            .await
            .map_err(|err| CloudError::remote("ssm", err))?;

        tracing::debug!(name, "parameter stored");
        Ok(())
    }
}
