//! HTTP client for the remote row-storage API.
//!
//! The backend exposes one logical table behind a single endpoint and
//! identifies rows in request *bodies*, not resource paths:
//!
//! - `GET`    — the whole table, wrapped in a `{"data": [...]}` envelope
//! - `POST`   — a JSON array of new rows (we always send one)
//! - `PUT`    — a row object with its `_id` merged in
//! - `DELETE` — a JSON array of ids (we always send one)
//!
//! These shapes are kept byte-compatible with the deployed table, so this
//! client interoperates with rows written by other frontends.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::ItemStore;
use crate::error::{PantriError, Result};
use crate::model::{Item, ItemDraft};

pub struct HttpStore {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Item>,
}

impl HttpStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Read the body and parse it ourselves so a non-JSON or malformed
    /// response surfaces as [`PantriError::Format`], not a transport error.
    async fn json_body(response: Response) -> Result<Value> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| PantriError::Format(err.to_string()))
    }

    fn require_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(PantriError::Validation("item id is required".into()));
        }
        Ok(())
    }

    /// PUT body: the draft's fields merged with the target `_id`. The row
    /// API has no path-parameterized resources.
    fn update_body(id: &str, draft: &ItemDraft) -> Result<Value> {
        let mut body = serde_json::to_value(draft)?;
        body["_id"] = Value::String(id.to_string());
        Ok(body)
    }
}

#[async_trait::async_trait]
impl ItemStore for HttpStore {
    async fn list(&self) -> Result<Vec<Item>> {
        debug!(endpoint = %self.endpoint, "listing rows");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: ListEnvelope =
            serde_json::from_str(&body).map_err(|err| PantriError::Format(err.to_string()))?;
        debug!(rows = envelope.data.len(), "listed rows");
        Ok(envelope.data)
    }

    async fn create(&self, draft: &ItemDraft) -> Result<()> {
        draft.validate()?;

        debug!(name = %draft.name, "creating row");
        // The row API takes a batch: a one-element array, not a bare object.
        let response = self
            .client
            .post(&self.endpoint)
            .json(&[draft])
            .send()
            .await?
            .error_for_status()?;

        let ack = Self::json_body(response).await?;
        debug!(%ack, "create acknowledged");
        Ok(())
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<()> {
        Self::require_id(id)?;
        draft.validate()?;

        let body = Self::update_body(id, draft)?;

        debug!(%id, "updating row");
        let response = self.client.put(&self.endpoint).json(&body).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(PantriError::NotFound(id.to_string()));
        }
        let response = response.error_for_status()?;

        Self::json_body(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        Self::require_id(id)?;

        debug!(%id, "deleting row");
        let response = self
            .client
            .delete(&self.endpoint)
            .json(&[id])
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(PantriError::NotFound(id.to_string()));
        }
        let response = response.error_for_status()?;

        // A 2xx with a non-JSON body still counts as a malformed response.
        Self::json_body(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Unit};

    // Unroutable on purpose: these tests prove the precondition checks fire
    // before any request is attempted.
    fn store() -> HttpStore {
        HttpStore::new("http://192.0.2.1/rows/none")
    }

    fn draft(name: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            category: Category::Fruit,
            quantity: 1.0,
            unit: Unit::Piece,
            expiry: None,
        }
    }

    #[tokio::test]
    async fn delete_with_empty_id_fails_before_the_network() {
        let err = store().delete("").await.unwrap_err();
        assert!(matches!(err, PantriError::Validation(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn update_with_empty_id_fails_before_the_network() {
        let err = store().update(" ", &draft("Apel")).await.unwrap_err();
        assert!(matches!(err, PantriError::Validation(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn create_with_invalid_draft_fails_before_the_network() {
        let err = store().create(&draft("")).await.unwrap_err();
        assert!(matches!(err, PantriError::Validation(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn update_with_invalid_draft_fails_before_the_network() {
        let mut bad = draft("Apel");
        bad.quantity = -2.0;
        let err = store().update("64f1", &bad).await.unwrap_err();
        assert!(matches!(err, PantriError::Validation(_)), "got {:?}", err);
    }

    #[test]
    fn update_body_merges_the_id_with_the_wire_fields() {
        let mut d = draft("Apel");
        d.quantity = 3.0;
        let body = HttpStore::update_body("64f1", &d).unwrap();

        assert_eq!(body["_id"], "64f1");
        assert_eq!(body["nama"], "Apel");
        assert_eq!(body["kategori"], "Buah");
        assert_eq!(body["jumlah"], 3.0);
        assert_eq!(body["satuan"], "pcs");
        assert_eq!(body["tanggal_kadaluarsa"], Value::Null);
    }

    #[test]
    fn missing_data_envelope_is_a_format_error() {
        let err = serde_json::from_str::<ListEnvelope>("{\"rows\": []}")
            .map_err(|e| PantriError::Format(e.to_string()))
            .unwrap_err();
        assert!(matches!(err, PantriError::Format(_)));
    }
}
