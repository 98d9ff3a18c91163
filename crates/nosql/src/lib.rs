//! # nosql
//!
//! Typed client for the Sakura Cloud NoSQL appliance API.
//!
//! Operations are grouped by resource. [`DatabaseOp`] covers the appliance
//! lifecycle, [`InstanceOp`] works on one running database and [`BackupOp`]
//! manages its backups. Every operation performs exactly one request and
//! returns either the typed payload or an [`Error`] labelled with the
//! operation name, such as `Database.Read`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use nosql::{new_client, DatabaseApi, DatabaseOp};
//!
//! # async fn run() -> nosql::Result<()> {
//! let client = new_client()?;
//! let databases = DatabaseOp::new(Arc::new(client));
//! for appliance in databases.list().await? {
//!     println!("{:?}", appliance.name);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backup;
pub mod client;
pub mod database;
pub mod instance;
mod outcome;

pub use backup::{BackupApi, BackupOp};
pub use client::{
    new_client, new_client_from_config, new_client_with_api_url, user_agent, NosqlClientBuilder,
    BIGINT_AS_INT_HEADER,
};
pub use database::{DatabaseApi, DatabaseOp};
pub use instance::{InstanceApi, InstanceOp};

pub use nosql_apis::{models, NosqlApi, V1Client};
pub use nosql_core::config::{NosqlClientConfig, DEFAULT_API_ROOT_URL};
pub use nosql_core::{ApiError, ApplianceId, BackupUuid, Cause, Error, Result, TransportError};
