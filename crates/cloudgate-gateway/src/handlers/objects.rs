//! Object store endpoints.
//!
//! `GET /s3?bucket=…&key=…` streams an object straight through to the
//! response body. `POST /s3?bucket=…&key=…` accepts a multipart `file`
//! field, stages it in a temporary file, and uploads it.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Multipart, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;

use crate::error::ApiError;
use crate::handlers::{require, with_deadline};
use crate::state::GatewayState;

/// Query parameters addressing an object.
#[derive(Debug, Deserialize)]
pub struct ObjectQuery {
    /// Bucket name.
    #[serde(default)]
    pub bucket: Option<String>,
    /// Object key.
    #[serde(default)]
    pub key: Option<String>,
}

impl ObjectQuery {
    fn require(self) -> Result<(String, String), ApiError> {
        Ok((require("bucket", self.bucket)?, require("key", self.key)?))
    }
}

/// Stream an object back to the client.
///
/// The body is copied chunk by chunk; the object is never buffered in
/// memory. If the remote stream fails after the 200 header has been
/// flushed, the response is truncated and no error status can be sent.
///
/// # Errors
///
/// Returns 400 if `bucket` or `key` is missing or empty and 500 if
/// the object cannot be opened.
pub async fn download(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<ObjectQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (bucket, key) = query.require()?;

    let stream = with_deadline(
        state.config.remote_timeout(),
        state.objects.get(&bucket, &key),
    )
    .await?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        Body::from_stream(stream),
    ))
}

/// Upload a multipart `file` field to the object store.
///
/// The incoming stream is staged in a temporary file because the
/// upload call needs a replayable body. The temp file's guard deletes
/// it on every exit path, including validation and remote failures.
///
/// # Errors
///
/// Returns 400 if `bucket` or `key` is missing, the multipart body is
/// malformed, or it carries no `file` field; 500 on staging or upload
/// failure.
pub async fn upload(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<ObjectQuery>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let (bucket, key) = query.require()?;

    let staged = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|err| ApiError::BadRequest(format!("invalid multipart body: {err}")))?;

        match field {
            Some(field) if field.name() == Some("file") => break stage_upload(field).await?,
            Some(_) => {}
            None => return Err(ApiError::required("file")),
        }
    };

    with_deadline(
        state.config.remote_timeout(),
        state.objects.put(&bucket, &key, staged.path()),
    )
    .await?;

    tracing::info!(%bucket, %key, "object uploaded");
    Ok(StatusCode::OK)
}

/// Copy a multipart field into a temporary file and flush it.
///
/// The returned guard owns the file; dropping it deletes the file.
async fn stage_upload(
    mut field: axum::extract::multipart::Field<'_>,
) -> Result<tempfile::NamedTempFile, ApiError> {
    let staged = tempfile::NamedTempFile::new().map_err(stage_error)?;

    let mut sink = tokio::fs::File::create(staged.path())
        .await
        .map_err(stage_error)?;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|err| ApiError::BadRequest(format!("error reading uploaded file: {err}")))?
    {
        sink.write_all(&chunk).await.map_err(stage_error)?;
    }

    sink.flush().await.map_err(stage_error)?;

    Ok(staged)
}

fn stage_error(err: std::io::Error) -> ApiError {
    tracing::error!(error = %err, "Failed to stage upload");
    ApiError::Internal("error staging uploaded file".to_string())
}
