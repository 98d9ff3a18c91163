//! Instance operations on a single database.

use crate::outcome::resolve;
use async_trait::async_trait;
use nosql_apis::models::{
    NosqlVersion, Plan, PrimaryNodes, PrimaryNodesAppliance, PutParameterRequestNosql, ZoneName,
    NOSQL_CLASS, NOSQL_NODE_PLAN_ID, NOSQL_NODE_SERVICE_CLASS,
};
use nosql_apis::{
    Documented, NodeHealthStatus, NosqlApi, NosqlCreateRequest, NosqlCreateRequestAppliance,
    NosqlCreateResponse, NosqlParameter, NosqlParameterUpdate, NosqlPutVersionRequest,
    NosqlRepairRequest, NosqlVersionInfo, PutParameterRequest, RecoverStatus, RepairType,
};
use nosql_core::config::NosqlClientConfig;
use nosql_core::{ApplianceId, Error, Result};
use std::sync::Arc;

/// Instance capability.
#[async_trait]
pub trait InstanceApi: Send + Sync {
    /// Get the running and upgradable versions.
    async fn get_version(&self) -> Result<NosqlVersionInfo>;

    /// Upgrade to the given version.
    async fn upgrade_version(&self, version: &str) -> Result<()>;

    /// Get the database parameters.
    async fn get_parameters(&self) -> Result<Vec<NosqlParameter>>;

    /// Set database parameters.
    async fn set_parameters(&self, parameters: Vec<NosqlParameterUpdate>) -> Result<()>;

    /// Get the node health status.
    async fn get_node_health(&self) -> Result<NodeHealthStatus>;

    /// Add nodes to the database. Requires a zone.
    async fn add_nodes(&self, request: NosqlCreateRequestAppliance) -> Result<NosqlCreateResponse>;

    /// Recover failed nodes.
    async fn recover(&self) -> Result<RecoverStatus>;

    /// Run a repair.
    async fn repair(&self, repair_type: RepairType) -> Result<()>;

    /// Power on.
    async fn start(&self) -> Result<()>;

    /// Power off.
    async fn stop(&self) -> Result<()>;
}

/// Instance operation group bound to one database.
#[derive(Clone)]
pub struct InstanceOp {
    client: Arc<dyn NosqlApi>,
    db_id: ApplianceId,
    zone: Option<String>,
}

impl InstanceOp {
    /// Create the operation group without a zone. [`InstanceApi::add_nodes`] will fail.
    #[must_use]
    pub fn new(client: Arc<dyn NosqlApi>, db_id: ApplianceId) -> Self {
        Self {
            client,
            db_id,
            zone: None,
        }
    }

    /// Create the operation group with the zone the database lives in.
    #[must_use]
    pub fn with_zone(client: Arc<dyn NosqlApi>, db_id: ApplianceId, zone: impl Into<String>) -> Self {
        Self {
            client,
            db_id,
            zone: Some(zone.into()),
        }
    }

    /// Create the operation group taking the zone from a client configuration.
    #[must_use]
    pub fn from_config(
        client: Arc<dyn NosqlApi>,
        db_id: ApplianceId,
        config: &NosqlClientConfig,
    ) -> Self {
        Self {
            client,
            db_id,
            zone: config.zone.clone(),
        }
    }

    /// Database this group operates on.
    #[must_use]
    pub fn db_id(&self) -> &ApplianceId {
        &self.db_id
    }

    fn zone(&self) -> Option<&str> {
        self.zone.as_deref().filter(|zone| !zone.is_empty())
    }
}

#[async_trait]
impl InstanceApi for InstanceOp {
    async fn get_version(&self) -> Result<NosqlVersionInfo> {
        let result = self.client.get_version(&self.db_id).await;
        resolve("Instance.GetVersion", Documented::COMMON, result)
            .map(|response| response.nosql.unwrap_or_default())
    }

    async fn upgrade_version(&self, version: &str) -> Result<()> {
        let request = NosqlPutVersionRequest {
            nosql: NosqlVersion {
                version: Some(version.to_string()),
            },
        };
        let result = self.client.put_version(&self.db_id, &request).await;
        resolve("Instance.UpgradeVersion", Documented::COMMON, result).map(drop)
    }

    async fn get_parameters(&self) -> Result<Vec<NosqlParameter>> {
        let result = self.client.get_parameter(&self.db_id).await;
        resolve("Instance.GetParameters", Documented::COMMON, result)
            .map(|response| response.nosql.map(|list| list.parameters).unwrap_or_default())
    }

    async fn set_parameters(&self, parameters: Vec<NosqlParameterUpdate>) -> Result<()> {
        let request = PutParameterRequest {
            nosql: PutParameterRequestNosql { parameters },
        };
        let result = self.client.put_parameter(&self.db_id, &request).await;
        resolve("Instance.SetParameters", Documented::COMMON, result).map(drop)
    }

    async fn get_node_health(&self) -> Result<NodeHealthStatus> {
        let result = self.client.get_node_health(&self.db_id).await;
        resolve("Instance.GetNodeHealth", Documented::COMMON, result).map(|health| {
            health
                .nosql
                .and_then(|nosql| nosql.status)
                .unwrap_or_default()
        })
    }

    async fn add_nodes(&self, mut request: NosqlCreateRequestAppliance) -> Result<NosqlCreateResponse> {
        let Some(zone) = self.zone() else {
            return Err(Error::config(
                "Instance.AddNodes",
                "zone must be specified via InstanceOp::with_zone",
            ));
        };

        request.class = Some(NOSQL_CLASS.to_string());
        request.plan = Some(Plan {
            id: Some(NOSQL_NODE_PLAN_ID),
        });
        request.service_class = Some(NOSQL_NODE_SERVICE_CLASS.to_string());
        request
            .remark
            .get_or_insert_with(Default::default)
            .nosql
            .get_or_insert_with(Default::default)
            .primary_nodes = Some(PrimaryNodes {
            appliance: PrimaryNodesAppliance {
                id: self.db_id.clone(),
                zone: ZoneName {
                    name: zone.to_string(),
                },
            },
        });

        let result = self
            .client
            .create_db(&NosqlCreateRequest { appliance: request })
            .await;
        resolve("Instance.AddNodes", Documented::WITH_CONFLICT, result)
    }

    async fn recover(&self) -> Result<RecoverStatus> {
        let result = self.client.recover_node(&self.db_id).await;
        resolve("Instance.Recover", Documented::COMMON, result)
    }

    async fn repair(&self, repair_type: RepairType) -> Result<()> {
        let request = NosqlRepairRequest::new(repair_type);
        let result = self.client.post_repair(&self.db_id, &request).await;
        resolve("Instance.Repair", Documented::COMMON, result).map(drop)
    }

    async fn start(&self) -> Result<()> {
        let result = self.client.put_power(&self.db_id).await;
        resolve("Instance.Start", Documented::WITH_NOT_FOUND, result).map(drop)
    }

    async fn stop(&self) -> Result<()> {
        let result = self.client.delete_power(&self.db_id).await;
        resolve("Instance.Stop", Documented::WITH_NOT_FOUND, result).map(drop)
    }
}
