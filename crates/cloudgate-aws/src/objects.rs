//! S3 object store adapter.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use futures::stream::BoxStream;
use tokio_util::io::ReaderStream;

use crate::error::{CloudError, Result};
use crate::session::CloudSession;

/// A streamed object body. Chunks arrive lazily; the whole object is
/// never held in memory.
pub type ObjectStream = BoxStream<'static, std::io::Result<Bytes>>;

/// Capability interface for a remote blob store addressed by
/// bucket and key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Open a streaming read of the named object.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::Remote` if the object cannot be opened.
    /// Failures after the first chunk surface as stream errors.
    async fn get(&self, bucket: &str, key: &str) -> Result<ObjectStream>;

    /// Upload the file at `source` as the named object.
    ///
    /// Takes a path rather than a stream because the underlying put
    /// call needs a replayable body. The caller owns staging the data
    /// and deleting the file afterwards.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::Io` if the source cannot be read and
    /// `CloudError::Remote` if the upload fails.
    async fn put(&self, bucket: &str, key: &str, source: &Path) -> Result<()>;
}

/// `ObjectStore` backed by AWS S3.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Create an adapter bound to the shared session.
    #[must_use]
    pub fn new(session: &CloudSession) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(session.sdk_config()),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<ObjectStream> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| CloudError::remote("s3", err))?;

        Ok(Box::pin(ReaderStream::new(output.body.into_async_read())))
    }

    async fn put(&self, bucket: &str, key: &str, source: &Path) -> Result<()> {
        let body = ByteStream::from_path(source)
            .await
            .map_err(|err| CloudError::Io(std::io::Error::other(err)))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|err| CloudError::remote("s3", err))?;

        tracing::debug!(bucket, key, "object uploaded");
        Ok(())
    }
}
