//! Wire models of the NoSQL appliance API.
//!
//! Field names follow the provider's PascalCase JSON. Every response field is
//! optional or defaulted because the API omits empty values.

use chrono::{DateTime, Utc};
use nosql_core::query::QueryParams;
use nosql_core::{ApplianceId, BackupUuid};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Appliance class used by NoSQL databases.
pub const NOSQL_CLASS: &str = "nosql";
/// Service class of a NoSQL database.
pub const NOSQL_SERVICE_CLASS: &str = "cloud/nosql/beta";
/// Service class of additional NoSQL nodes.
pub const NOSQL_NODE_SERVICE_CLASS: &str = "cloud/nosql/beta/node";
/// Plan used when adding nodes to an existing database.
pub const NOSQL_NODE_PLAN_ID: u64 = 51116;

/// Deserialize a scalar that may arrive as a string, number or boolean into a string.
pub fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }))
}

/// Deserialize a success flag that may be a boolean or a string such as `"Accepted"`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "false" => Some(false),
            "" => None,
            _ => Some(true),
        },
        _ => None,
    }))
}

/// Plan reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Plan ID.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// Scheduled backup settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlBackupSettings {
    /// Backup destination connection string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<String>,
    /// Days of week the backup runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<String>,
    /// Time of day (`HH:MM`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Number of generations to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<u32>,
}

/// Repair schedule entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlRepairSchedule {
    /// Days of week (incremental repair).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<String>,
    /// Interval in weeks (full repair).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Day of week (full repair).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    /// Time of day (`HH:MM`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Repair settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlRepairSettings {
    /// Incremental repair schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental: Option<NosqlRepairSchedule>,
    /// Full repair schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<NosqlRepairSchedule>,
}

/// Appliance settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlSettings {
    /// Networks allowed to connect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_network: Vec<String>,
    /// Database user password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Reserved IP address.
    #[serde(
        rename = "ReserveIPAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reserve_ip_address: Option<String>,
    /// Backup settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<NosqlBackupSettings>,
    /// Repair settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair: Option<NosqlRepairSettings>,
}

/// Zone reference by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneName {
    /// Zone name, for example `tk1b`.
    pub name: String,
}

/// Appliance the added nodes attach to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PrimaryNodesAppliance {
    /// Primary appliance ID.
    #[serde(rename = "ID")]
    pub id: ApplianceId,
    /// Zone of the primary appliance.
    pub zone: ZoneName,
}

/// Primary node reference used by node addition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PrimaryNodes {
    /// Primary appliance.
    pub appliance: PrimaryNodesAppliance,
}

/// NoSQL specific remark block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlRemarkNosql {
    /// Database engine name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_engine: Option<String>,
    /// Database engine version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    /// Default user name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
    /// Disk size in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<u64>,
    /// Memory size in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    /// Number of nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u32>,
    /// Listening port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Storage type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    /// Number of virtual cores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtualcore: Option<u32>,
    /// Zone name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Primary appliance when this appliance holds added nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_nodes: Option<PrimaryNodes>,
}

/// Server entry in the remark block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RemarkServer {
    /// IP address of the server.
    #[serde(
        rename = "UserIPAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_ip_address: Option<String>,
}

/// Network entry in the remark block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RemarkNetwork {
    /// Default gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_route: Option<String>,
    /// Netmask length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_mask_len: Option<u8>,
}

/// Zone entry in the remark block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemarkZone {
    /// Zone ID.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Appliance remark.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlRemark {
    /// NoSQL specific values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosql: Option<NosqlRemarkNosql>,
    /// Servers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<RemarkServer>,
    /// Network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<RemarkNetwork>,
    /// Zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<RemarkZone>,
}

/// Instance (power) state of an appliance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplianceInstance {
    /// Power status, for example `up` or `down`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the status last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_changed_at: Option<DateTime<Utc>>,
}

/// Appliance descriptor as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlAppliance {
    /// Appliance ID.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ApplianceId>,
    /// Name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Appliance class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Service class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
    /// Plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    /// Settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<NosqlSettings>,
    /// Hash of the applied settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_hash: Option<String>,
    /// Remark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<NosqlRemark>,
    /// Availability, for example `available` or `migrating`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Instance state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<ApplianceInstance>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Appliance payload for create requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlCreateRequestAppliance {
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    /// Settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<NosqlSettings>,
    /// Remark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<NosqlRemark>,
    /// Appliance class, set by the operation group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Service class, set by the operation group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
}

/// Envelope for create requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlCreateRequest {
    /// Appliance payload.
    pub appliance: NosqlCreateRequestAppliance,
}

/// Appliance payload for update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlUpdateRequestAppliance {
    /// Name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<NosqlSettings>,
}

/// Envelope for update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlUpdateRequest {
    /// Appliance payload.
    pub appliance: NosqlUpdateRequestAppliance,
}

/// Query parameters for listing appliances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDbParams {
    /// Appliance class filter.
    pub class: String,
    /// Offset of the first result.
    pub from: Option<u32>,
    /// Maximum number of results.
    pub count: Option<u32>,
}

impl ListDbParams {
    /// Parameters selecting NoSQL appliances only.
    #[must_use]
    pub fn nosql() -> Self {
        Self {
            class: NOSQL_CLASS.to_string(),
            from: None,
            count: None,
        }
    }

    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("Filter.Class", &self.class)
            .with_opt("From", self.from)
            .with_opt("Count", self.count)
    }
}

impl Default for ListDbParams {
    fn default() -> Self {
        Self::nosql()
    }
}

/// Response of the list call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlListResponse {
    /// Offset of the first result.
    #[serde(default)]
    pub from: u32,
    /// Number of results in this page.
    #[serde(default)]
    pub count: u32,
    /// Total number of matching appliances.
    #[serde(default)]
    pub total: u32,
    /// Appliances.
    #[serde(default)]
    pub appliances: Vec<NosqlAppliance>,
    /// Success flag.
    #[serde(rename = "is_ok", default, skip_serializing_if = "Option::is_none")]
    pub is_ok: Option<bool>,
}

/// Response of create calls (database creation and node addition).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlCreateResponse {
    /// Created appliance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance: Option<NosqlAppliance>,
    /// Success flag.
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub success: Option<bool>,
    /// Success flag.
    #[serde(rename = "is_ok", default, skip_serializing_if = "Option::is_none")]
    pub is_ok: Option<bool>,
}

/// Response of the read call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlGetResponse {
    /// Appliance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance: Option<NosqlAppliance>,
    /// Success flag.
    #[serde(rename = "is_ok", default, skip_serializing_if = "Option::is_none")]
    pub is_ok: Option<bool>,
}

/// Response of action-only calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlOkResponse {
    /// Success flag.
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub success: Option<bool>,
    /// Success flag.
    #[serde(rename = "is_ok", default, skip_serializing_if = "Option::is_none")]
    pub is_ok: Option<bool>,
}

/// Status block of a NoSQL appliance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlStatus {
    /// Overall status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Running database version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Settings response wrapper of the status call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlSettingsResponse {
    /// NoSQL status block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosql: Option<NosqlStatus>,
}

/// Appliance wrapper of the status call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlStatusAppliance {
    /// Settings response.
    #[serde(default)]
    pub settings_response: NosqlSettingsResponse,
}

/// Response of the status call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlStatusResponse {
    /// Appliance.
    #[serde(default)]
    pub appliance: NosqlStatusAppliance,
}

/// Backup descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlBackup {
    /// Backup ID.
    #[serde(rename = "BackupID")]
    pub backup_id: BackupUuid,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Backup status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Backup list payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlBackupList {
    /// Backups.
    #[serde(default)]
    pub backups: Vec<NosqlBackup>,
}

/// Response of the backup list call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlBackupResponse {
    /// Backup list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosql: Option<NosqlBackupList>,
}

/// Version information of an appliance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlVersionInfo {
    /// Running version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Versions the appliance can be upgraded to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upgradable_versions: Vec<String>,
    /// State of an ongoing upgrade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Response of the version call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlGetVersionResponse {
    /// Version information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosql: Option<NosqlVersionInfo>,
}

/// Target version of an upgrade.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlVersion {
    /// Version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Upgrade request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlPutVersionRequest {
    /// Target version.
    pub nosql: NosqlVersion,
}

/// Database parameter as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlParameter {
    /// Parameter ID.
    #[serde(
        default,
        deserialize_with = "deserialize_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub setting_item_id: Option<String>,
    /// Parameter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting_item: Option<String>,
    /// Current value.
    #[serde(
        default,
        deserialize_with = "deserialize_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub setting_value: Option<String>,
    /// Default value.
    #[serde(
        default,
        deserialize_with = "deserialize_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,
    /// Human readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value type, for example `int` or `string`.
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

/// Parameter list payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlParameterList {
    /// Parameters.
    #[serde(default)]
    pub parameters: Vec<NosqlParameter>,
}

/// Response of the parameter read call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GetParameterResponse {
    /// Parameter list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosql: Option<NosqlParameterList>,
}

/// Parameter value to set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlParameterUpdate {
    /// Parameter ID.
    pub setting_item_id: String,
    /// New value.
    pub setting_value: String,
}

impl NosqlParameterUpdate {
    /// Create a parameter update.
    #[must_use]
    pub fn new(setting_item_id: impl Into<String>, setting_value: impl Into<String>) -> Self {
        Self {
            setting_item_id: setting_item_id.into(),
            setting_value: setting_value.into(),
        }
    }
}

/// Parameter update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PutParameterRequestNosql {
    /// Parameters.
    pub parameters: Vec<NosqlParameterUpdate>,
}

/// Parameter update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PutParameterRequest {
    /// Payload.
    pub nosql: PutParameterRequestNosql,
}

/// Node health status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeHealthStatus {
    /// All nodes are healthy.
    Healthy,
    /// At least one node is degraded.
    Degraded,
    /// The cluster is unhealthy.
    Unhealthy,
    /// Status not reported or not recognised.
    #[default]
    #[serde(other)]
    Unknown,
}

impl NodeHealthStatus {
    /// Returns the status as the API spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeHealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node health payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeHealthNosql {
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NodeHealthStatus>,
}

/// Response of the node health call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeHealth {
    /// Payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosql: Option<NodeHealthNosql>,
}

/// Outcome of a node recovery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecoverStatus {
    /// Recovery finished (HTTP 200).
    Completed,
    /// Recovery accepted and still running (HTTP 202).
    InProgress,
}

impl RecoverStatus {
    /// Returns `ok` or `in_progress`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "ok",
            Self::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for RecoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of repair to run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RepairType {
    /// Full repair.
    Full,
    /// Incremental repair.
    Incremental,
}

/// Repair payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlRepairRequestNosql {
    /// Repair kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_type: Option<RepairType>,
}

/// Repair request, echoed back by the API on success.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NosqlRepairRequest {
    /// Payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosql: Option<NosqlRepairRequestNosql>,
}

impl NosqlRepairRequest {
    /// Build a repair request of the given kind.
    #[must_use]
    pub const fn new(repair_type: RepairType) -> Self {
        Self {
            nosql: Some(NosqlRepairRequestNosql {
                repair_type: Some(repair_type),
            }),
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Whether the error is fatal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fatal: Option<bool>,
    /// Request serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// HTTP status line, for example `404 Not Found`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Machine readable error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl ErrorResponse {
    /// Build an error body carrying only a message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            error_msg: Some(message.into()),
            ..Self::default()
        }
    }

    /// Message supplied by the API, empty when absent.
    #[must_use]
    pub fn message(&self) -> &str {
        self.error_msg.as_deref().unwrap_or_default()
    }
}
