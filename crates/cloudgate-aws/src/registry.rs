//! ECR registry authentication adapter.
//!
//! The registry issues short-lived docker credentials as a single
//! base64 blob in `username:password` form. The adapter returns the
//! raw token; [`RegistryCredentials::parse`] decodes and splits it.

use async_trait::async_trait;
use base64::prelude::*;

use crate::error::{CloudError, Result};
use crate::session::CloudSession;

/// Capability interface for a container-registry credential service.
#[async_trait]
pub trait RegistryAuth: Send + Sync {
    /// Fetch the base64-encoded authorization token from the first
    /// authorization record.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::Remote` if the call fails and
    /// `CloudError::NoAuthorizationData` if the response carries no
    /// records.
    async fn authorization_token(&self) -> Result<String>;
}

/// Decoded registry login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    /// Registry username (`AWS` for ECR).
    pub username: String,
    /// Short-lived registry password.
    pub password: String,
}

impl RegistryCredentials {
    /// Decode a base64 `username:password` token, splitting on the
    /// first colon so passwords containing colons survive.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::TokenEncoding` for malformed base64 and
    /// `CloudError::TokenFormat` if the separator is absent.
    pub fn parse(token: &str) -> Result<Self> {
        let decoded = BASE64_STANDARD.decode(token)?;
        let decoded = String::from_utf8(decoded).map_err(|_| CloudError::TokenFormat)?;

        let (username, password) = decoded.split_once(':').ok_or(CloudError::TokenFormat)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// `RegistryAuth` backed by AWS ECR.
#[derive(Debug, Clone)]
pub struct EcrRegistryAuth {
    client: aws_sdk_ecr::Client,
}

impl EcrRegistryAuth {
    /// Create an adapter bound to the shared session.
    #[must_use]
    pub fn new(session: &CloudSession) -> Self {
        Self {
            client: aws_sdk_ecr::Client::new(session.sdk_config()),
        }
    }
}

#[async_trait]
impl RegistryAuth for EcrRegistryAuth {
    async fn authorization_token(&self) -> Result<String> {
        let output = self
            .client
            .get_authorization_token()
            .send()
            .await
            .map_err(|err| CloudError::remote("ecr", err))?;

        let record = output
            .authorization_data()
            .first()
            .ok_or(CloudError::NoAuthorizationData)?;

        let token = record
            .authorization_token()
            .ok_or(CloudError::MissingField("authorizationToken"))?;

        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_first_colon() {
        let token = BASE64_STANDARD.encode("AWS:secret:with:colons");
        let creds = RegistryCredentials::parse(&token).unwrap();
        assert_eq!(creds.username, "AWS");
        assert_eq!(creds.password, "secret:with:colons");
    }

    #[test]
    fn parse_rejects_bad_base64() {
        let err = RegistryCredentials::parse("not-base64!!!").unwrap_err();
        assert!(matches!(err, CloudError::TokenEncoding(_)));
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let token = BASE64_STANDARD.encode("no-separator-here");
        let err = RegistryCredentials::parse(&token).unwrap_err();
        assert!(matches!(err, CloudError::TokenFormat));
    }

    #[test]
    fn parse_rejects_non_utf8_payload() {
        let token = BASE64_STANDARD.encode([0xff, 0xfe, b':', 0xfd]);
        let err = RegistryCredentials::parse(&token).unwrap_err();
        assert!(matches!(err, CloudError::TokenFormat));
    }
}
