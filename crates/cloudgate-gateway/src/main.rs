//! Cloudgate - HTTP gateway over SSM, S3, ECR, and STS.
//!
//! This is the composition root: resolve cloud credentials (fatal if
//! they cannot be resolved), construct the four adapters against the
//! shared session, wire up the router, and serve.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloudgate_aws::{
    CloudSession, EcrRegistryAuth, S3ObjectStore, SsmParameterStore, StsIdentityProvider,
};
use cloudgate_gateway::{create_router, GatewayConfig, GatewayState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cloudgate=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cloudgate");

    let config = GatewayConfig::from_env();
    tracing::info!(
        port = config.port,
        remote_timeout_seconds = config.remote_timeout_seconds,
        "Gateway configuration loaded"
    );

    // Credential resolution is the one fatal startup step: a host
    // without a usable credential chain must not start serving.
    let session = match CloudSession::from_env().await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(error = %err, "Failed to resolve cloud credentials");
            std::process::exit(1);
        }
    };

    let state = GatewayState::new(
        Arc::new(SsmParameterStore::new(&session)),
        Arc::new(S3ObjectStore::new(&session)),
        Arc::new(EcrRegistryAuth::new(&session)),
        Arc::new(StsIdentityProvider::new(&session)),
        config.clone(),
    );

    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    let listen_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
