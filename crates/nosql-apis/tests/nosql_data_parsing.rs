//! Integration tests for parsing NoSQL appliance API data.
//!
//! These tests validate that the nosql-apis models can deserialize recorded
//! API responses.

use chrono::{TimeZone, Utc};
use nosql_apis::models::{
    GetParameterResponse, NosqlBackupResponse, NosqlGetVersionResponse, NosqlListResponse,
    NosqlStatusResponse, NOSQL_NODE_PLAN_ID, NOSQL_NODE_SERVICE_CLASS,
};
use nosql_core::{ApplianceId, BackupUuid};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

fn load_list() -> NosqlListResponse {
    let json_data = load_fixture("appliance_list.json");
    serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize appliance list: {}\nJSON: {}",
            e, json_data
        )
    })
}

#[test]
fn test_deserialize_appliance_list() {
    let list = load_list();

    assert_eq!(list.total, 2);
    assert_eq!(list.appliances.len(), 2, "Expected 2 appliances in test data");
    assert_eq!(list.is_ok, Some(true));
}

#[test]
fn test_appliance_fields() {
    let list = load_list();
    let db = &list.appliances[0];

    assert_eq!(db.id, Some(ApplianceId::new("113601234567")));
    assert_eq!(db.name.as_deref(), Some("orders-db"));
    assert_eq!(db.tags, vec!["production", "orders"]);
    assert_eq!(db.plan.as_ref().and_then(|p| p.id), Some(51114));
    assert_eq!(
        db.instance.as_ref().and_then(|i| i.status.as_deref()),
        Some("up")
    );
    assert_eq!(
        db.created_at,
        Some(Utc.with_ymd_and_hms(2025, 3, 18, 1, 5, 0).unwrap())
    );

    let settings = db.settings.as_ref().expect("settings present");
    assert_eq!(settings.source_network, vec!["192.0.2.0/24"]);
    assert_eq!(settings.reserve_ip_address.as_deref(), Some("192.0.2.20"));
    let backup = settings.backup.as_ref().expect("backup settings present");
    assert_eq!(backup.rotate, Some(7));
    let full = settings
        .repair
        .as_ref()
        .and_then(|r| r.full.as_ref())
        .expect("full repair schedule present");
    assert_eq!(full.interval, Some(7));
    assert_eq!(full.day_of_week.as_deref(), Some("sat"));

    let remark = db.remark.as_ref().expect("remark present");
    let nosql = remark.nosql.as_ref().expect("nosql remark present");
    assert_eq!(nosql.database_engine.as_deref(), Some("Cassandra"));
    assert_eq!(nosql.port, Some(9042));
    assert_eq!(nosql.nodes, Some(3));
    assert_eq!(remark.servers.len(), 3);
    assert_eq!(
        remark.network.as_ref().and_then(|n| n.network_mask_len),
        Some(24)
    );

    // Unmodelled fields are kept
    assert!(db.extra.contains_key("Disk"));
    assert!(db.extra.contains_key("Icon"));
}

#[test]
fn test_numeric_id_and_primary_nodes() {
    let list = load_list();
    let nodes = &list.appliances[1];

    assert_eq!(nodes.id, Some(ApplianceId::new("113601234999")));
    assert_eq!(
        nodes.service_class.as_deref(),
        Some(NOSQL_NODE_SERVICE_CLASS)
    );
    assert_eq!(
        nodes.plan.as_ref().and_then(|p| p.id),
        Some(NOSQL_NODE_PLAN_ID)
    );

    let primary = nodes
        .remark
        .as_ref()
        .and_then(|r| r.nosql.as_ref())
        .and_then(|n| n.primary_nodes.as_ref())
        .expect("primary nodes present");
    assert_eq!(primary.appliance.id.as_str(), "113601234567");
    assert_eq!(primary.appliance.zone.name, "tk1b");
}

#[test]
fn test_deserialize_status() {
    let json_data = load_fixture("appliance_status.json");
    let response: NosqlStatusResponse = serde_json::from_str(&json_data).unwrap();

    let status = response
        .appliance
        .settings_response
        .nosql
        .expect("status block present");
    assert_eq!(status.status.as_deref(), Some("healthy"));
    assert_eq!(status.version.as_deref(), Some("4.1.4"));
    assert!(status.extra.contains_key("Nodes"));
}

#[test]
fn test_deserialize_backups() {
    let json_data = load_fixture("backups.json");
    let response: NosqlBackupResponse = serde_json::from_str(&json_data).unwrap();

    let backups = response.nosql.expect("backup list present").backups;
    assert_eq!(backups.len(), 2);
    assert_eq!(
        backups[0].backup_id,
        "3f0e9a36-6f0c-4a55-9d39-1c57a8f2b101"
            .parse::<BackupUuid>()
            .unwrap()
    );
    assert_eq!(backups[0].size, Some(73_400_320));
    assert_eq!(backups[1].size, None);
    assert_eq!(backups[1].status.as_deref(), Some("running"));
}

#[test]
fn test_deserialize_parameters() {
    let json_data = load_fixture("parameters.json");
    let response: GetParameterResponse = serde_json::from_str(&json_data).unwrap();

    let parameters = response.nosql.expect("parameter list present").parameters;
    assert_eq!(parameters.len(), 3);
    assert_eq!(parameters[0].setting_value.as_deref(), Some("32"));
    assert_eq!(parameters[0].value_type.as_deref(), Some("int"));
    assert_eq!(parameters[1].setting_value.as_deref(), Some("false"));
    assert_eq!(parameters[1].default_value.as_deref(), Some("true"));
    assert_eq!(parameters[2].setting_value, None);
}

#[test]
fn test_deserialize_version() {
    let json_data = load_fixture("version.json");
    let response: NosqlGetVersionResponse = serde_json::from_str(&json_data).unwrap();

    let info = response.nosql.expect("version info present");
    assert_eq!(info.version.as_deref(), Some("4.1.4"));
    assert_eq!(info.upgradable_versions, vec!["4.1.5", "5.0.2"]);
    assert_eq!(info.state.as_deref(), Some("idle"));
}
