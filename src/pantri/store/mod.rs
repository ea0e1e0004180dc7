//! # Storage Layer
//!
//! This module defines the storage abstraction for pantri. The [`ItemStore`]
//! trait lets the command layer work against different backends.
//!
//! ## Implementations
//!
//! - [`http::HttpStore`]: Production client for the remote row-storage API.
//!   One fixed endpoint represents the whole table; the wire shapes are the
//!   backend's, quirks included (see the module docs).
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, same validation and not-found semantics.
//!
//! ## Call Semantics
//!
//! Every operation is independent: no transactions, no batching, no retry
//! policy, no timeouts. A caller issuing overlapping calls must not assume
//! any ordering between them; the command layer serializes its own calls
//! and re-fetches after each mutation instead.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Item, ItemDraft};

pub mod http;
pub mod memory;

/// Abstract interface for item storage.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, in the order the store keeps them.
    async fn list(&self) -> Result<Vec<Item>>;

    /// Create a new item; the store assigns its id.
    async fn create(&self, draft: &ItemDraft) -> Result<()>;

    /// Replace all mutable fields of the item identified by `id`.
    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<()>;

    /// Remove the item identified by `id`. The id becomes invalid for all
    /// future operations.
    async fn delete(&self, id: &str) -> Result<()>;
}
