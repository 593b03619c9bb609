//! Registry login endpoint.
//!
//! `GET /ecr/login` exchanges the caller's cloud credentials for a
//! short-lived registry password, returned as plain text so it can be
//! piped straight into `docker login --password-stdin`.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;

use cloudgate_aws::RegistryCredentials;

use crate::error::ApiError;
use crate::handlers::with_deadline;
use crate::state::GatewayState;

/// Fetch and decode a registry password.
///
/// Only the first authorization record is used. The token is decoded
/// from base64 `username:password` form; the response body is the
/// password portion alone.
///
/// # Errors
///
/// Returns 500 if the remote call fails or the token cannot be
/// decoded.
pub async fn login(State(state): State<Arc<GatewayState>>) -> Result<impl IntoResponse, ApiError> {
    let token = with_deadline(
        state.config.remote_timeout(),
        state.registry.authorization_token(),
    )
    .await?;

    let credentials = RegistryCredentials::parse(&token)?;

    Ok(credentials.password)
}
