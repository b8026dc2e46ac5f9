use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use domain::catalog::{CatalogItem, ItemKind};
use domain::intake::DraftLine;
use domain::session::Principal;
use domain::shipments::Shipment;

use crate::error::ClientError;

/// Login credentials forwarded to the remote system.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// An aggregated intake batch of one item kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub kind: ItemKind,
    pub lines: Vec<DraftLine>,
}

/// One line of a dispense submission.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DispenseLine {
    pub item_id: String,
    pub quantity: u32,
}

/// A full dispensing transaction: one patient, one employee, one branch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispenseSubmission {
    pub command_id: String,
    pub patient_id: String,
    pub employee_id: String,
    pub branch_id: String,
    pub medicine_lines: Vec<DispenseLine>,
    pub device_lines: Vec<DispenseLine>,
}

/// Remote system of record reachable over HTTP+JSON.
///
/// Calls resolve independently and may complete out of order; callers
/// own any ordering they need.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Principal, ClientError>;

    /// Catalog items, optionally scoped to one location.
    async fn list_items(&self, location: Option<&str>) -> Result<Vec<CatalogItem>, ClientError>;
    async fn create_item(&self, item: &CatalogItem) -> Result<(), ClientError>;
    async fn update_item(&self, item: &CatalogItem) -> Result<(), ClientError>;
    async fn delete_item(&self, item_id: &str) -> Result<(), ClientError>;

    /// Records an aggregated intake batch, one call per item kind.
    async fn record_intake(&self, submission: &IntakeSubmission) -> Result<(), ClientError>;

    /// Submits a cart as one atomic transaction.
    async fn submit_dispense(&self, submission: &DispenseSubmission) -> Result<(), ClientError>;

    async fn list_shipments(&self, branch: Option<&str>) -> Result<Vec<Shipment>, ClientError>;
    async fn create_shipment(&self, shipment: &Shipment) -> Result<(), ClientError>;
    async fn accept_shipment(&self, id: &str) -> Result<(), ClientError>;
    async fn reject_shipment(&self, id: &str, reason: &str) -> Result<(), ClientError>;
    async fn cancel_shipment(&self, id: &str) -> Result<(), ClientError>;
    /// Puts a rejected shipment back to pending for another attempt.
    async fn retry_shipment(&self, id: &str) -> Result<(), ClientError>;
}
