//! HTTP gateway exposing four AWS operations as plain REST endpoints.
//!
//! Each endpoint is a thin translation: parse query/form parameters,
//! issue exactly one cloud call through an adapter trait, and stream
//! or serialize the result back:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      Clients                        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                  cloudgate-gateway                  │
//! │   ┌──────────┐  ┌───────────────┐  ┌────────────┐  │
//! │   │  Router  │  │   Handlers    │  │  Deadline  │  │
//! │   │          │  │ (validation)  │  │  (30 s)    │  │
//! │   └──────────┘  └───────────────┘  └────────────┘  │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!           ┌──────────┬───┴──────┬──────────┐
//!           ▼          ▼          ▼          ▼
//!      ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐
//!      │  SSM   │ │   S3   │ │  ECR   │ │  STS   │
//!      └────────┘ └────────┘ └────────┘ └────────┘
//! ```
//!
//! The gateway is stateless between requests; the only process-wide
//! value is the immutable cloud session the adapters are built from.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cloudgate_aws::{
//!     CloudSession, EcrRegistryAuth, S3ObjectStore, SsmParameterStore, StsIdentityProvider,
//! };
//! use cloudgate_gateway::{create_router, GatewayConfig, GatewayState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = CloudSession::from_env().await?;
//!
//! let state = GatewayState::new(
//!     Arc::new(SsmParameterStore::new(&session)),
//!     Arc::new(S3ObjectStore::new(&session)),
//!     Arc::new(EcrRegistryAuth::new(&session)),
//!     Arc::new(StsIdentityProvider::new(&session)),
//!     GatewayConfig::default(),
//! );
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::GatewayState;
