//! Database operations.
//!
//! Databases are NoSQL appliances. Listing is filtered to the `nosql` class and
//! creation always forces the NoSQL class and service class.

use crate::outcome::resolve;
use async_trait::async_trait;
use nosql_apis::models::{NOSQL_CLASS, NOSQL_SERVICE_CLASS};
use nosql_apis::{
    Documented, ListDbParams, NosqlApi, NosqlAppliance, NosqlCreateRequest,
    NosqlCreateRequestAppliance, NosqlCreateResponse, NosqlStatus, NosqlUpdateRequest,
    NosqlUpdateRequestAppliance,
};
use nosql_core::{ApplianceId, Result};
use std::sync::Arc;

/// Database capability.
#[async_trait]
pub trait DatabaseApi: Send + Sync {
    /// List NoSQL appliances.
    async fn list(&self) -> Result<Vec<NosqlAppliance>>;

    /// Create a database.
    async fn create(&self, request: NosqlCreateRequestAppliance) -> Result<NosqlCreateResponse>;

    /// Read a database.
    async fn read(&self, id: &ApplianceId) -> Result<NosqlAppliance>;

    /// Update a database. Call [`DatabaseApi::apply_changes`] to apply the new settings.
    async fn update(&self, id: &ApplianceId, request: NosqlUpdateRequestAppliance) -> Result<()>;

    /// Delete a database.
    async fn delete(&self, id: &ApplianceId) -> Result<()>;

    /// Apply pending configuration changes.
    async fn apply_changes(&self, id: &ApplianceId) -> Result<()>;

    /// Get the runtime status block.
    async fn get_status(&self, id: &ApplianceId) -> Result<NosqlStatus>;
}

/// Database operation group.
#[derive(Clone)]
pub struct DatabaseOp {
    client: Arc<dyn NosqlApi>,
}

impl DatabaseOp {
    /// Create the operation group on top of a transport client.
    #[must_use]
    pub fn new(client: Arc<dyn NosqlApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DatabaseApi for DatabaseOp {
    async fn list(&self) -> Result<Vec<NosqlAppliance>> {
        let result = self.client.list_db(&ListDbParams::nosql()).await;
        resolve("Database.List", Documented::COMMON, result).map(|list| list.appliances)
    }

    async fn create(&self, mut request: NosqlCreateRequestAppliance) -> Result<NosqlCreateResponse> {
        request.class = Some(NOSQL_CLASS.to_string());
        request.service_class = Some(NOSQL_SERVICE_CLASS.to_string());

        let result = self
            .client
            .create_db(&NosqlCreateRequest { appliance: request })
            .await;
        resolve("Database.Create", Documented::WITH_CONFLICT, result)
    }

    async fn read(&self, id: &ApplianceId) -> Result<NosqlAppliance> {
        let result = self.client.get_db(id).await;
        resolve("Database.Read", Documented::WITH_NOT_FOUND, result)
            .map(|response| response.appliance.unwrap_or_default())
    }

    async fn update(&self, id: &ApplianceId, request: NosqlUpdateRequestAppliance) -> Result<()> {
        let result = self
            .client
            .update_db(id, &NosqlUpdateRequest { appliance: request })
            .await;
        resolve("Database.Update", Documented::COMMON, result).map(drop)
    }

    async fn delete(&self, id: &ApplianceId) -> Result<()> {
        let result = self.client.delete_db(id).await;
        resolve("Database.Delete", Documented::COMMON, result).map(drop)
    }

    async fn apply_changes(&self, id: &ApplianceId) -> Result<()> {
        let result = self.client.update_config_db(id).await;
        resolve("Database.ApplyChanges", Documented::BAD_REQUEST_ONLY, result).map(drop)
    }

    async fn get_status(&self, id: &ApplianceId) -> Result<NosqlStatus> {
        let result = self.client.confirm_status_db(id).await;
        resolve("Database.GetStatus", Documented::COMMON, result)
            .map(|response| response.appliance.settings_response.nosql.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosql_apis::V1Client;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_op(server: &MockServer) -> DatabaseOp {
        let client = V1Client::new(server.uri()).unwrap();
        DatabaseOp::new(Arc::new(client))
    }

    fn error_body(status: &str, message: &str) -> serde_json::Value {
        json!({
            "is_fatal": true,
            "serial": "0123456789abcdef",
            "status": status,
            "error_code": "error",
            "error_msg": message
        })
    }

    fn db_id() -> ApplianceId {
        ApplianceId::new("113600000001")
    }

    #[tokio::test]
    async fn test_list_returns_appliances() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appliance"))
            .and(query_param("Filter.Class", "nosql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "From": 0,
                "Count": 2,
                "Total": 2,
                "Appliances": [
                    {"ID": "113600000001", "Name": "db01"},
                    {"ID": "113600000002", "Name": "db02"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let appliances = test_op(&server).list().await.unwrap();
        assert_eq!(appliances.len(), 2);
        assert_eq!(appliances[1].id, Some(ApplianceId::new("113600000002")));
    }

    #[tokio::test]
    async fn test_create_forces_classes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/appliance"))
            .and(body_partial_json(json!({
                "Appliance": {
                    "Name": "db01",
                    "Class": "nosql",
                    "ServiceClass": "cloud/nosql/beta"
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "Appliance": {"ID": "113600000001", "Name": "db01"},
                "Success": "Accepted",
                "is_ok": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = NosqlCreateRequestAppliance {
            name: "db01".into(),
            class: Some("something-else".into()),
            ..NosqlCreateRequestAppliance::default()
        };
        let created = test_op(&server).create(request).await.unwrap();
        assert_eq!(created.success, Some(true));
        assert_eq!(
            created.appliance.and_then(|a| a.id),
            Some(ApplianceId::new("113600000001"))
        );
    }

    #[tokio::test]
    async fn test_create_failure_codes() {
        for (status, line) in [
            (400, "400 Bad Request"),
            (401, "401 Unauthorized"),
            (409, "409 Conflict"),
            (500, "500 Internal Server Error"),
        ] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/appliance"))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(error_body(line, "create failed")),
                )
                .mount(&server)
                .await;

            let err = test_op(&server)
                .create(NosqlCreateRequestAppliance::default())
                .await
                .unwrap_err();
            assert_eq!(err.label(), "Database.Create");
            assert_eq!(err.status_code(), Some(status));
            assert_eq!(err.api_error().unwrap().message(), "create failed");
        }
    }

    #[tokio::test]
    async fn test_read_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appliance/113600000001"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(error_body("404 Not Found", "no such db")),
            )
            .mount(&server)
            .await;

        let err = test_op(&server).read(&db_id()).await.unwrap_err();
        assert!(err.api_error().unwrap().is_not_found());
        assert_eq!(
            err.to_string(),
            "nosql: Database.Read: API error 404: no such db"
        );
    }

    #[tokio::test]
    async fn test_read_returns_appliance() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appliance/113600000001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Appliance": {"ID": 113600000001_u64, "Name": "db01", "Availability": "available"},
                "is_ok": true
            })))
            .mount(&server)
            .await;

        let appliance = test_op(&server).read(&db_id()).await.unwrap();
        assert_eq!(appliance.id, Some(db_id()));
        assert_eq!(appliance.availability.as_deref(), Some("available"));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/appliance/113600000001"))
            .and(body_partial_json(json!({"Appliance": {"Description": "updated"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Success": true, "is_ok": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/appliance/113600000001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Success": true, "is_ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let op = test_op(&server);
        let request = NosqlUpdateRequestAppliance {
            description: Some("updated".into()),
            ..NosqlUpdateRequestAppliance::default()
        };
        op.update(&db_id(), request).await.unwrap();
        op.delete(&db_id()).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_not_found_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/appliance/113600000001"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(error_body("404 Not Found", "gone")),
            )
            .mount(&server)
            .await;

        let err = test_op(&server).delete(&db_id()).await.unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.code(), 0);
        assert_eq!(api.message(), "");
        assert_eq!(api.error_code(), "UNEXPECTED_RESPONSE");
    }

    #[tokio::test]
    async fn test_apply_changes_only_documents_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/appliance/113600000001/config"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(error_body("401 Unauthorized", "denied")),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/appliance/113600000002/config"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(error_body("400 Bad Request", "invalid")),
            )
            .mount(&server)
            .await;

        let op = test_op(&server);
        let err = op.apply_changes(&db_id()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(0));

        let err = op
            .apply_changes(&ApplianceId::new("113600000002"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.api_error().unwrap().message(), "invalid");
    }

    #[tokio::test]
    async fn test_get_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appliance/113600000001/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Appliance": {
                    "SettingsResponse": {
                        "Nosql": {"Status": "running", "Version": "4.1.4"}
                    }
                }
            })))
            .mount(&server)
            .await;

        let status = test_op(&server).get_status(&db_id()).await.unwrap();
        assert_eq!(status.status.as_deref(), Some("running"));
        assert_eq!(status.version.as_deref(), Some("4.1.4"));
    }

    #[tokio::test]
    async fn test_transport_failure_has_code_zero() {
        // Nothing listens on the discard port.
        let client = V1Client::new("http://127.0.0.1:9").unwrap();
        let op = DatabaseOp::new(Arc::new(client));

        let err = op.list().await.unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.code(), 0);
        assert!(api.transport_error().is_some());
        assert_eq!(api.error_code(), "TRANSPORT_ERROR");
    }
}
