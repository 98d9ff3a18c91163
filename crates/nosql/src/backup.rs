//! Backup operations on a single database.

use crate::outcome::resolve;
use async_trait::async_trait;
use nosql_apis::{Documented, NosqlApi, NosqlBackup};
use nosql_core::{ApplianceId, BackupUuid, Result};
use std::sync::Arc;

/// Backup capability.
#[async_trait]
pub trait BackupApi: Send + Sync {
    /// List backups.
    async fn list(&self) -> Result<Vec<NosqlBackup>>;

    /// Take a backup now.
    async fn create(&self) -> Result<()>;

    /// Restore the database from a backup.
    async fn restore(&self, id: BackupUuid) -> Result<()>;

    /// Delete a backup.
    async fn delete(&self, id: BackupUuid) -> Result<()>;
}

/// Backup operation group bound to one database.
#[derive(Clone)]
pub struct BackupOp {
    client: Arc<dyn NosqlApi>,
    db_id: ApplianceId,
}

impl BackupOp {
    /// Create the operation group.
    #[must_use]
    pub fn new(client: Arc<dyn NosqlApi>, db_id: ApplianceId) -> Self {
        Self { client, db_id }
    }
}

#[async_trait]
impl BackupApi for BackupOp {
    async fn list(&self) -> Result<Vec<NosqlBackup>> {
        let result = self.client.get_backups(&self.db_id).await;
        resolve("Backup.List", Documented::COMMON, result)
            .map(|response| response.nosql.map(|list| list.backups).unwrap_or_default())
    }

    async fn create(&self) -> Result<()> {
        let result = self.client.create_backup(&self.db_id).await;
        resolve("Backup.Create", Documented::WITH_NOT_FOUND, result).map(drop)
    }

    async fn restore(&self, id: BackupUuid) -> Result<()> {
        let result = self.client.restore_backup(&self.db_id, id).await;
        resolve("Backup.Restore", Documented::WITH_NOT_FOUND, result).map(drop)
    }

    async fn delete(&self, id: BackupUuid) -> Result<()> {
        let result = self.client.delete_backup(&self.db_id, id).await;
        resolve("Backup.Delete", Documented::WITH_NOT_FOUND, result).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosql_apis::{ApiResponse, ErrorResponse, MockNosqlApi, NosqlOkResponse, V1Client};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BACKUP_ID: &str = "3f0e9a36-6f0c-4a55-9d39-1c57a8f2b101";

    fn db_id() -> ApplianceId {
        ApplianceId::new("113600000001")
    }

    fn backup_id() -> BackupUuid {
        BACKUP_ID.parse().unwrap()
    }

    fn test_op(server: &MockServer) -> BackupOp {
        let client = V1Client::new(server.uri()).unwrap();
        BackupOp::new(Arc::new(client), db_id())
    }

    #[tokio::test]
    async fn test_list_backups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appliance/113600000001/nosql/backups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Nosql": {
                    "Backups": [
                        {"BackupID": BACKUP_ID, "CreatedAt": "2025-03-19T01:30:12+09:00", "Status": "completed"}
                    ]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let backups = test_op(&server).list().await.unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(backups[0].backup_id, backup_id());
        assert_eq!(backups[0].status.as_deref(), Some("completed"));
    }

    #[tokio::test]
    async fn test_list_without_payload_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appliance/113600000001/nosql/backups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        assert!(test_op(&server).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_restore_delete() {
        let server = MockServer::start().await;
        let ok = json!({"Success": true, "is_ok": true});
        Mock::given(method("POST"))
            .and(path("/appliance/113600000001/nosql/backups"))
            .respond_with(ResponseTemplate::new(202).set_body_json(ok.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!(
                "/appliance/113600000001/nosql/backups/{BACKUP_ID}/restore"
            )))
            .respond_with(ResponseTemplate::new(202).set_body_json(ok.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!(
                "/appliance/113600000001/nosql/backups/{BACKUP_ID}"
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok))
            .expect(1)
            .mount(&server)
            .await;

        let op = test_op(&server);
        op.create().await.unwrap();
        op.restore(backup_id()).await.unwrap();
        op.delete(backup_id()).await.unwrap();
    }

    #[tokio::test]
    async fn test_restore_not_found_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!(
                "/appliance/113600000001/nosql/backups/{BACKUP_ID}/restore"
            )))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "is_fatal": true,
                "status": "404 Not Found",
                "error_code": "not_found",
                "error_msg": "backup not found"
            })))
            .mount(&server)
            .await;

        let err = test_op(&server).restore(backup_id()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "nosql: Backup.Restore: API error 404: backup not found"
        );
    }

    #[tokio::test]
    async fn test_documented_failure_codes() {
        for code in [400_u16, 401, 404, 500] {
            let body = ErrorResponse::with_message(format!("failed with {code}"));
            let shape = move || -> ApiResponse<NosqlOkResponse> {
                let body = body.clone();
                match code {
                    400 => ApiResponse::BadRequest(body),
                    401 => ApiResponse::Unauthorized(body),
                    404 => ApiResponse::NotFound(body),
                    _ => ApiResponse::ServerError(body),
                }
            };

            let mut mock = MockNosqlApi::new();
            let create_shape = shape.clone();
            mock.expect_create_backup()
                .times(1)
                .returning(move |_| Ok(create_shape()));
            let restore_shape = shape.clone();
            mock.expect_restore_backup()
                .withf(|id, backup| id.as_str() == "113600000001" && backup.to_string() == BACKUP_ID)
                .times(1)
                .returning(move |_, _| Ok(restore_shape()));
            mock.expect_delete_backup()
                .times(1)
                .returning(move |_, _| Ok(shape()));

            let op = BackupOp::new(Arc::new(mock), db_id());
            let expected = format!("failed with {code}");
            for err in [
                op.create().await.unwrap_err(),
                op.restore(backup_id()).await.unwrap_err(),
                op.delete(backup_id()).await.unwrap_err(),
            ] {
                assert_eq!(err.status_code(), Some(code));
                assert_eq!(err.api_error().unwrap().message(), expected);
            }
        }
    }

    #[tokio::test]
    async fn test_list_not_found_is_undocumented() {
        let mut mock = MockNosqlApi::new();
        mock.expect_get_backups()
            .times(1)
            .returning(|_| Ok(ApiResponse::NotFound(ErrorResponse::with_message("gone"))));

        let op = BackupOp::new(Arc::new(mock), db_id());
        let err = op.list().await.unwrap_err();
        assert_eq!(err.status_code(), Some(0));
        assert_eq!(err.api_error().unwrap().message(), "");
    }
}
