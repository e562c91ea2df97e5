//! Maintenance service implementation

use tracing::{debug, info};
use crate::forms::{FormLimits, Validate};
use crate::models::{
    CreateMaintenanceRequest, Maintenance, MaintenanceServerStats, UpdateMaintenanceRequest,
};
use crate::status::{MaintenanceAction, StatusAction};
use crate::utils::errors::Result;
use crate::utils::logging;
use super::api_client::ApiClient;
use super::events::{not_found_as, StatusPatch};

/// Maintenance service for the admin dashboard
#[derive(Clone, Debug)]
pub struct MaintenanceService {
    client: ApiClient,
    limits: FormLimits,
}

impl MaintenanceService {
    pub fn new(client: ApiClient, limits: FormLimits) -> Self {
        Self { client, limits }
    }

    /// Fetch every maintenance record
    pub async fn list(&self) -> Result<Vec<Maintenance>> {
        self.client.require_auth()?;
        let records: Vec<Maintenance> = self.client.get_list("maintenance/").await?;
        debug!(count = records.len(), "Fetched maintenance records");
        Ok(records)
    }

    pub async fn get(&self, id: i64) -> Result<Maintenance> {
        self.client.require_auth()?;
        self.client
            .get(&format!("maintenance/{}/", id))
            .await
            .map_err(|e| not_found_as(e, "maintenance record", id))
    }

    /// Validate and submit a new maintenance record
    pub async fn create(&self, request: &CreateMaintenanceRequest) -> Result<Maintenance> {
        self.client.require_auth()?;
        request.validate(&self.limits)?;

        let record: Maintenance = self.client.post("maintenance/", request).await?;
        info!(maintenance_id = record.id, title = %record.title, "Maintenance scheduled");
        Ok(record)
    }

    pub async fn update(&self, id: i64, request: &UpdateMaintenanceRequest) -> Result<Maintenance> {
        self.client.require_auth()?;
        let record = self
            .client
            .patch(&format!("maintenance/{}/", id), request)
            .await
            .map_err(|e| not_found_as(e, "maintenance record", id))?;
        info!(maintenance_id = id, "Maintenance updated");
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.require_auth()?;
        self.client
            .delete(&format!("maintenance/{}/", id))
            .await
            .map_err(|e| not_found_as(e, "maintenance record", id))?;
        info!(maintenance_id = id, "Maintenance deleted");
        Ok(())
    }

    /// Server-computed statistics
    pub async fn statistics(&self) -> Result<MaintenanceServerStats> {
        self.client.require_auth()?;
        self.client.get("maintenance/statistics/").await
    }

    /// Request the status change behind one action button
    ///
    /// The action is checked against the local table first; the server
    /// remains the authority on whether the transition is allowed.
    pub async fn apply_action(&self, record: &Maintenance, action: MaintenanceAction) -> Result<Maintenance> {
        self.client.require_auth()?;
        let target = action.check(record.status)?;
        logging::log_status_change("maintenance", record.id, record.status.as_str(), target.as_str());

        self.client
            .patch(&format!("maintenance/{}/", record.id), &StatusPatch { status: target })
            .await
            .map_err(|e| not_found_as(e, "maintenance record", record.id))
    }
}
