//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, identity, objects, params, registry};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health` - Liveness check (no cloud call)
/// - `GET /ssm?name=…` - Fetch a parameter value (plain text)
/// - `POST /ssm` - Store a parameter (form: `name`, `value`, `type`)
/// - `GET /s3?bucket=…&key=…` - Stream an object download
/// - `POST /s3?bucket=…&key=…` - Upload a multipart `file` field
/// - `GET /ecr/login` - Registry password (plain text)
/// - `GET /sts` - Caller identity (JSON)
///
/// Unlisted methods on these paths get a 405 from the router; unknown
/// paths get a 404.
pub fn create_router(state: GatewayState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/ssm",
            get(params::get_parameter).post(params::put_parameter),
        )
        .route("/s3", get(objects::download).post(objects::upload))
        .route("/ecr/login", get(registry::login))
        .route("/sts", get(identity::whoami))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
