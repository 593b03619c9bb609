//! Gateway application state.
//!
//! This module defines the shared state that is available to all
//! request handlers: one trait object per cloud capability plus the
//! gateway configuration. Nothing here is mutated after startup.

use std::sync::Arc;

use cloudgate_aws::{IdentityProvider, ObjectStore, ParameterStore, RegistryAuth};

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// Handlers only see the capability traits, so tests can swap in
/// in-memory doubles for the AWS clients.
#[derive(Clone)]
pub struct GatewayState {
    /// Parameter store adapter (SSM).
    pub params: Arc<dyn ParameterStore>,
    /// Object store adapter (S3).
    pub objects: Arc<dyn ObjectStore>,
    /// Registry credential adapter (ECR).
    pub registry: Arc<dyn RegistryAuth>,
    /// Identity adapter (STS).
    pub identity: Arc<dyn IdentityProvider>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl GatewayState {
    /// Create a new gateway state.
    #[must_use]
    pub fn new(
        params: Arc<dyn ParameterStore>,
        objects: Arc<dyn ObjectStore>,
        registry: Arc<dyn RegistryAuth>,
        identity: Arc<dyn IdentityProvider>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            params,
            objects,
            registry,
            identity,
            config,
        }
    }
}
