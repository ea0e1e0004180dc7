use chrono::NaiveDate;

use crate::expiry::ExpiryReport;
use crate::model::{Category, Item, ItemDraft, Unit};

pub mod add;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod remove;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An item paired with its 1-based position in the current listing. Indexes
/// are transient: only meaningful against the listing they came from, and
/// re-derived from a fresh fetch on every command.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub index: usize,
    pub item: Item,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<DisplayItem>,
    pub report: Option<ExpiryReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed = items;
        self
    }

    pub fn with_report(mut self, report: ExpiryReport) -> Self {
        self.report = Some(report);
        self
    }
}

/// What to do with an item's expiry date during an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryChange {
    Keep,
    Clear,
    Set(NaiveDate),
}

/// A partial edit. Unset fields keep the item's current values; the merge
/// produces the full-field draft the store's replace-style update expects.
#[derive(Debug, Clone)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub expiry: ExpiryChange,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.unit.is_none()
            && self.expiry == ExpiryChange::Keep
    }

    pub fn apply_to(&self, item: &Item) -> ItemDraft {
        ItemDraft {
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            category: self.category.unwrap_or(item.category),
            quantity: self.quantity.unwrap_or(item.quantity),
            unit: self.unit.unwrap_or(item.unit),
            expiry: match self.expiry {
                ExpiryChange::Keep => item.expiry,
                ExpiryChange::Clear => None,
                ExpiryChange::Set(date) => Some(date),
            },
        }
    }
}
