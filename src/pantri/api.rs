//! # API Facade
//!
//! Thin facade over the command layer: the single entry point for every
//! pantri operation, whatever the front-end. It dispatches, it does not do
//! business logic, I/O, or presentation. The current instant is always an
//! argument so the core stays clock-free and testable.

use chrono::{DateTime, Utc};

use crate::commands;
use crate::error::Result;
use crate::model::ItemDraft;
use crate::store::ItemStore;

/// The main API facade, generic over the storage backend.
///
/// Production uses `PantriApi<HttpStore>`; tests use
/// `PantriApi<InMemoryStore>`.
pub struct PantriApi<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> PantriApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list_items(&self, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, now).await
    }

    pub async fn add_item(
        &self,
        draft: ItemDraft,
        now: DateTime<Utc>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, draft, now).await
    }

    pub async fn edit_item(
        &self,
        index: usize,
        changes: commands::ItemChanges,
        now: DateTime<Utc>,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&self.store, index, changes, now).await
    }

    pub async fn remove_items(
        &self,
        indexes: &[usize],
        now: DateTime<Utc>,
    ) -> Result<commands::CmdResult> {
        commands::remove::run(&self.store, indexes, now).await
    }
}

pub use commands::{CmdMessage, CmdResult, DisplayItem, ExpiryChange, ItemChanges, MessageLevel};
