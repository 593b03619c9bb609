//! AWS adapters for the cloudgate HTTP gateway.
//!
//! Each remote service the gateway fronts is wrapped behind a small
//! capability trait with exactly the operations the gateway needs:
//!
//! - [`ParameterStore`] — SSM get/put with decryption-on-read
//! - [`ObjectStore`] — S3 streamed download and file upload
//! - [`RegistryAuth`] — ECR authorization token retrieval
//! - [`IdentityProvider`] — STS caller identity
//!
//! All four AWS implementations share one immutable [`CloudSession`],
//! resolved from the environment at startup. The traits exist so the
//! gateway's handlers can be exercised against in-memory doubles.
//!
//! # Example
//!
//! ```no_run
//! use cloudgate_aws::{CloudSession, ParameterStore, SsmParameterStore};
//!
//! # async fn example() -> cloudgate_aws::Result<()> {
//! let session = CloudSession::from_env().await?;
//! let params = SsmParameterStore::new(&session);
//! let value = params.get("/app/db-password").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod identity;
pub mod objects;
pub mod params;
pub mod registry;
pub mod session;

pub use error::{CloudError, Result};
pub use identity::{CallerIdentity, IdentityProvider, StsIdentityProvider};
pub use objects::{ObjectStore, ObjectStream, S3ObjectStore};
pub use params::{ParameterStore, SsmParameterStore};
pub use registry::{EcrRegistryAuth, RegistryAuth, RegistryCredentials};
pub use session::CloudSession;
