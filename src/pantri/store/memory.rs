//! In-memory store for testing. Mirrors the remote store's observable
//! semantics: opaque string ids assigned on create, replace-style updates,
//! and the same validation and not-found behavior.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::ItemStore;
use crate::error::{PantriError, Result};
use crate::model::{Item, ItemDraft};

#[derive(Default)]
pub struct InMemoryStore {
    items: Mutex<Vec<Item>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    fn require_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(PantriError::Validation("item id is required".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.lock().await.clone())
    }

    async fn create(&self, draft: &ItemDraft) -> Result<()> {
        draft.validate()?;
        let mut items = self.items.lock().await;
        items.push(Item {
            id: Uuid::new_v4().to_string(),
            name: draft.name.clone(),
            category: draft.category,
            quantity: draft.quantity,
            unit: draft.unit,
            expiry: draft.expiry,
        });
        Ok(())
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<()> {
        Self::require_id(id)?;
        draft.validate()?;

        let mut items = self.items.lock().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| PantriError::NotFound(id.to_string()))?;

        item.name = draft.name.clone();
        item.category = draft.category;
        item.quantity = draft.quantity;
        item.unit = draft.unit;
        item.expiry = draft.expiry;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        Self::require_id(id)?;

        let mut items = self.items.lock().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(PantriError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
