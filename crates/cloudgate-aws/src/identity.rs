//! STS caller identity adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CloudError, Result};
use crate::session::CloudSession;

/// The identity bound to the process's credentials.
///
/// Serializes with the field names the AWS API uses on the wire, so
/// the gateway's JSON matches `aws sts get-caller-identity` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallerIdentity {
    /// AWS account id.
    pub account: String,
    /// Principal ARN.
    pub arn: String,
    /// Unique principal id.
    pub user_id: String,
}

/// Capability interface for a remote identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Report the identity associated with the current credentials.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::Remote` if the call fails.
    async fn whoami(&self) -> Result<CallerIdentity>;
}

/// `IdentityProvider` backed by AWS STS.
#[derive(Debug, Clone)]
pub struct StsIdentityProvider {
    client: aws_sdk_sts::Client,
}

impl StsIdentityProvider {
    /// Create an adapter bound to the shared session.
    #[must_use]
    pub fn new(session: &CloudSession) -> Self {
        Self {
            client: aws_sdk_sts::Client::new(session.sdk_config()),
        }
    }
}

#[async_trait]
impl IdentityProvider for StsIdentityProvider {
    async fn whoami(&self) -> Result<CallerIdentity> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| CloudError::remote("sts", err))?;

        Ok(CallerIdentity {
            account: output
                .account()
                .ok_or(CloudError::MissingField("Account"))?
                .to_string(),
            arn: output.arn().ok_or(CloudError::MissingField("Arn"))?.to_string(),
            user_id: output
                .user_id()
                .ok_or(CloudError::MissingField("UserId"))?
                .to_string(),
        })
    }
}
