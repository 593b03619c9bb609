//! Parameter store endpoints.
//!
//! `GET /ssm?name=…` returns a parameter's (decrypted) value as plain
//! text. `POST /ssm` with form fields `name`, `value`, `type` creates
//! or updates a parameter.

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Form;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::{require, with_deadline};
use crate::state::GatewayState;

/// Query parameters for parameter retrieval.
#[derive(Debug, Deserialize)]
pub struct GetParameterQuery {
    /// Parameter name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Form body for parameter creation.
#[derive(Debug, Deserialize)]
pub struct PutParameterForm {
    /// Parameter name.
    #[serde(default)]
    pub name: Option<String>,
    /// Parameter value.
    #[serde(default)]
    pub value: Option<String>,
    /// Parameter kind (e.g. `String`, `SecureString`, `StringList`);
    /// validated by the remote service, not here.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Fetch a parameter's value.
///
/// # Errors
///
/// Returns 400 if `name` is missing or empty and 500 if the remote
/// call fails.
pub async fn get_parameter(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<GetParameterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require("name", query.name)?;

    let value = with_deadline(state.config.remote_timeout(), state.params.get(&name)).await?;

    Ok(value)
}

/// Create or update a parameter.
///
/// # Errors
///
/// Returns 400 if the form body is malformed or any of `name`,
/// `value`, `type` is missing or empty, and 500 if the remote call
/// fails.
pub async fn put_parameter(
    State(state): State<Arc<GatewayState>>,
    form: Result<Form<PutParameterForm>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Form(form) = form.map_err(|err| ApiError::BadRequest(format!("invalid form data: {err}")))?;

    let name = require("name", form.name)?;
    let value = require("value", form.value)?;
    let kind = require("type", form.kind)?;

    with_deadline(
        state.config.remote_timeout(),
        state.params.put(&name, &value, &kind),
    )
    .await?;

    tracing::info!(%name, "parameter stored");
    Ok(StatusCode::OK)
}
