//! In-memory remote used by tests and demos.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use domain::catalog::{CatalogItem, ItemKind};
use domain::session::Principal;
use domain::shipments::Shipment;

use crate::error::ClientError;
use crate::remote::{Credentials, DispenseSubmission, IntakeSubmission, RemoteStore};

/// A catalog item with branch scope and fixed prices, for seeding.
pub fn sample_item(id: &str, kind: ItemKind, quantity: u32) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: format!("item {id}"),
        kind,
        branch_id: Some("branch-1".to_string()),
        quantity,
        purchase_price: Decimal::from(10),
        sell_price: Decimal::from(15),
    }
}

fn find_shipment<'a>(
    shipments: &'a mut Vec<Shipment>,
    id: &str,
) -> Result<&'a mut Shipment, ClientError> {
    shipments
        .iter_mut()
        .find(|shipment| shipment.id == id)
        .ok_or(ClientError::Api {
            status: 404,
            message: format!("shipment {id} not found"),
        })
}

/// [`RemoteStore`] backed by in-memory state.
///
/// Records every submission it receives; failures are injected by
/// handing `fail_dispense_with` the status and body the HTTP remote
/// would have read off the wire.
#[derive(Default)]
pub struct MockRemote {
    pub items: Mutex<Vec<CatalogItem>>,
    pub shipments: Mutex<Vec<Shipment>>,
    pub intake_calls: Mutex<Vec<IntakeSubmission>>,
    pub dispense_calls: Mutex<Vec<DispenseSubmission>>,
    pub dispense_failure: Mutex<Option<(u16, String)>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        let mock = Self::new();
        *mock.items.lock().unwrap() = items;
        mock
    }

    pub fn fail_dispense_with(&self, status: u16, body: &str) {
        *self.dispense_failure.lock().unwrap() = Some((status, body.to_string()));
    }
}

#[async_trait]
impl RemoteStore for MockRemote {
    async fn login(&self, credentials: &Credentials) -> Result<Principal, ClientError> {
        Ok(Principal {
            id: "emp-1".to_string(),
            login: credentials.login.clone(),
            role: "branch".to_string(),
            display_name: Some("Branch Employee".to_string()),
        })
    }

    async fn list_items(&self, location: Option<&str>) -> Result<Vec<CatalogItem>, ClientError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|item| match location {
                Some(location) => item.branch_id.as_deref() == Some(location),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create_item(&self, item: &CatalogItem) -> Result<(), ClientError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &CatalogItem) -> Result<(), ClientError> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(())
            }
            None => Err(ClientError::Api {
                status: 404,
                message: format!("item {} not found", item.id),
            }),
        }
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), ClientError> {
        self.items.lock().unwrap().retain(|item| item.id != item_id);
        Ok(())
    }

    async fn record_intake(&self, submission: &IntakeSubmission) -> Result<(), ClientError> {
        self.intake_calls.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn submit_dispense(&self, submission: &DispenseSubmission) -> Result<(), ClientError> {
        if let Some((status, message)) = self.dispense_failure.lock().unwrap().take() {
            return Err(ClientError::Api { status, message });
        }
        self.dispense_calls.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn list_shipments(&self, branch: Option<&str>) -> Result<Vec<Shipment>, ClientError> {
        let shipments = self.shipments.lock().unwrap();
        Ok(shipments
            .iter()
            .filter(|shipment| match branch {
                Some(branch) => shipment.branch_id.as_deref() == Some(branch),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create_shipment(&self, shipment: &Shipment) -> Result<(), ClientError> {
        self.shipments.lock().unwrap().push(shipment.clone());
        Ok(())
    }

    async fn accept_shipment(&self, id: &str) -> Result<(), ClientError> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = find_shipment(&mut shipments, id)?;
        shipment.status = Some("accepted".to_string());
        shipment.accepted = Some(true);
        Ok(())
    }

    async fn reject_shipment(&self, id: &str, reason: &str) -> Result<(), ClientError> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = find_shipment(&mut shipments, id)?;
        shipment.status = Some("rejected".to_string());
        shipment.rejection_reason = Some(reason.to_string());
        Ok(())
    }

    async fn cancel_shipment(&self, id: &str) -> Result<(), ClientError> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = find_shipment(&mut shipments, id)?;
        shipment.status = Some("cancelled".to_string());
        Ok(())
    }

    async fn retry_shipment(&self, id: &str) -> Result<(), ClientError> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = find_shipment(&mut shipments, id)?;
        shipment.status = Some("pending".to_string());
        shipment.rejected = None;
        shipment.rejection_reason = None;
        Ok(())
    }
}
