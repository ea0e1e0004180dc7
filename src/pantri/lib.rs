//! # Pantri Architecture
//!
//! Pantri is a **UI-agnostic inventory library**: all persistence lives in a
//! remote row-storage HTTP API, and all terminal concerns live in the binary.
//! The library in between knows nothing about either end.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: list/add/edit/remove, index resolution   │
//! │  - Takes the current instant as an argument, never reads    │
//! │    the wall clock                                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ItemStore trait                                 │
//! │  - HttpStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Model
//!
//! The remote store is the single source of truth. Every mutating command
//! (`add`, `edit`, `remove`) is followed by an unconditional full re-fetch;
//! there is no local cache, no optimistic update, and no conflict detection.
//! Two clients editing the same row concurrently will silently overwrite one
//! another; last write wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`expiry`]: Pure expiry classification (expired / expiring soon)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `ItemDraft`, `Category`, `Unit`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod expiry;
pub mod model;
pub mod store;
