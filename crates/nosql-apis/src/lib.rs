//! Low-level v1 transport client for the Sakura Cloud NoSQL appliance API.
//!
//! Provides the wire models, the per-call response shapes and an asynchronous
//! reqwest client implementing [`NosqlApi`]. Higher level operation groups live
//! in the `nosql` crate.

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod response;

#[cfg(feature = "mock")]
pub use client::MockNosqlApi;
pub use client::{NosqlApi, RequestCustomizer, V1Client, V1ClientBuilder};
pub use models::{
    ErrorResponse, GetParameterResponse, ListDbParams, NodeHealth, NodeHealthStatus,
    NosqlAppliance, NosqlBackup, NosqlBackupResponse, NosqlCreateRequest,
    NosqlCreateRequestAppliance, NosqlCreateResponse, NosqlGetResponse, NosqlGetVersionResponse,
    NosqlListResponse, NosqlOkResponse, NosqlParameter, NosqlParameterUpdate,
    NosqlPutVersionRequest, NosqlRepairRequest, NosqlSettings, NosqlStatus, NosqlStatusResponse,
    NosqlUpdateRequest, NosqlUpdateRequestAppliance, NosqlVersionInfo, PutParameterRequest,
    RecoverStatus, RepairType,
};
pub use response::{ApiResponse, Documented};

/// Result of a single transport call.
pub type TransportResult<T> = std::result::Result<T, nosql_core::TransportError>;
