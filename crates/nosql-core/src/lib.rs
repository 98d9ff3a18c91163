//! # nosql-core
//!
//! Core types and utilities for working with the Sakura Cloud NoSQL appliance API.
//!
//! This crate provides the error wrapper, configuration, HTTP client settings and
//! typed identifiers shared by the transport client and the operation groups.
//!
//! ## Modules
//!
//! - [`error`] - Error wrapper, API error and transport error types
//! - [`id`] - Typed identifiers for appliances and backups
//! - [`config`] - Client configuration, environment loading and validation
//! - [`client`] - HTTP client settings and timeouts
//! - [`query`] - Query-string assembly helper

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod id;
pub mod query;

// Re-export commonly used types
pub use error::{ApiError, Cause, Error, Result, TransportError};
pub use id::{ApplianceId, BackupUuid};
