//! Gateway configuration types.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen port.
    #[serde(default = "GatewayConfig::default_port")]
    pub port: u16,

    /// Deadline for a single outbound cloud call, in seconds.
    #[serde(default = "GatewayConfig::default_remote_timeout")]
    pub remote_timeout_seconds: u64,

    /// Maximum request body size in bytes (bounds uploads).
    #[serde(default = "GatewayConfig::default_max_body")]
    pub max_body_bytes: usize,
}

impl GatewayConfig {
    const fn default_port() -> u16 {
        3000
    }

    const fn default_remote_timeout() -> u64 {
        30
    }

    const fn default_max_body() -> usize {
        64 * 1024 * 1024 // 64 MiB
    }

    /// Build a configuration from the environment.
    ///
    /// `PORT` overrides the listen port; an unparseable value falls
    /// back to the default with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => {
                    tracing::warn!(value = %port, default = config.port, "Ignoring unparseable PORT");
                }
            }
        }

        config
    }

    /// Get the remote-call deadline as a `Duration`.
    #[must_use]
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_seconds)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: Self::default_port(),
            remote_timeout_seconds: Self::default_remote_timeout(),
            max_body_bytes: Self::default_max_body(),
        }
    }
}
