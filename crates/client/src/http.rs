use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use domain::catalog::CatalogItem;
use domain::session::Principal;
use domain::shipments::Shipment;

use crate::config::Config;
use crate::error::ClientError;
use crate::remote::{Credentials, DispenseSubmission, IntakeSubmission, RemoteStore};

/// HTTP+JSON implementation of [`RemoteStore`].
pub struct HttpRemote {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRemote {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_failure(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        ClientError::Api { status, message }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }
        Ok(())
    }

    async fn post_returning<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait]
impl RemoteStore for HttpRemote {
    async fn login(&self, credentials: &Credentials) -> Result<Principal, ClientError> {
        self.post_returning("/sessions", credentials).await
    }

    async fn list_items(&self, location: Option<&str>) -> Result<Vec<CatalogItem>, ClientError> {
        let query: Vec<(&str, &str)> = match location {
            Some(location) => vec![("location", location)],
            None => vec![],
        };
        self.get_json("/items", &query).await
    }

    async fn create_item(&self, item: &CatalogItem) -> Result<(), ClientError> {
        self.post_json("/items", item).await
    }

    async fn update_item(&self, item: &CatalogItem) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/items/{}", item.id)))
            .json(item)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }
        Ok(())
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/items/{item_id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }
        Ok(())
    }

    async fn record_intake(&self, submission: &IntakeSubmission) -> Result<(), ClientError> {
        self.post_json("/items/intake", submission).await
    }

    async fn submit_dispense(&self, submission: &DispenseSubmission) -> Result<(), ClientError> {
        self.post_json("/dispenses", submission).await
    }

    async fn list_shipments(&self, branch: Option<&str>) -> Result<Vec<Shipment>, ClientError> {
        let query: Vec<(&str, &str)> = match branch {
            Some(branch) => vec![("branch", branch)],
            None => vec![],
        };
        self.get_json("/shipments", &query).await
    }

    async fn create_shipment(&self, shipment: &Shipment) -> Result<(), ClientError> {
        self.post_json("/shipments", shipment).await
    }

    async fn accept_shipment(&self, id: &str) -> Result<(), ClientError> {
        self.post_json(&format!("/shipments/{id}/accept"), &()).await
    }

    async fn reject_shipment(&self, id: &str, reason: &str) -> Result<(), ClientError> {
        self.post_json(
            &format!("/shipments/{id}/reject"),
            &serde_json::json!({ "reason": reason }),
        )
        .await
    }

    async fn cancel_shipment(&self, id: &str) -> Result<(), ClientError> {
        self.post_json(&format!("/shipments/{id}/cancel"), &()).await
    }

    async fn retry_shipment(&self, id: &str) -> Result<(), ClientError> {
        self.post_json(&format!("/shipments/{id}/retry"), &()).await
    }
}
