//! Caller identity endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::ApiError;
use crate::handlers::with_deadline;
use crate::state::GatewayState;

/// Report the identity bound to the gateway's credentials as JSON
/// (`{"Account":…,"Arn":…,"UserId":…}`).
///
/// # Errors
///
/// Returns 500 if the remote call fails.
pub async fn whoami(State(state): State<Arc<GatewayState>>) -> Result<impl IntoResponse, ApiError> {
    let identity =
        with_deadline(state.config.remote_timeout(), state.identity.whoami()).await?;

    Ok(Json(identity))
}
