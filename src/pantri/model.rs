use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PantriError, Result};

/// Item category. The serde names are the strings the deployed row table
/// stores; rows with anything else are rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Buah")]
    Fruit,
    #[serde(rename = "Sayuran")]
    Vegetable,
    #[serde(rename = "Daging")]
    Meat,
    #[serde(rename = "Susu")]
    Dairy,
    #[serde(rename = "Bahan Makanan")]
    Staple,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fruit,
        Category::Vegetable,
        Category::Meat,
        Category::Dairy,
        Category::Staple,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruit => "Fruit",
            Category::Vegetable => "Vegetable",
            Category::Meat => "Meat",
            Category::Dairy => "Dairy",
            Category::Staple => "Staple",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fruit" => Ok(Category::Fruit),
            "vegetable" => Ok(Category::Vegetable),
            "meat" => Ok(Category::Meat),
            "dairy" => Ok(Category::Dairy),
            "staple" => Ok(Category::Staple),
            _ => Err(format!(
                "Unknown category '{}' (expected fruit, vegetable, meat, dairy or staple)",
                s
            )),
        }
    }
}

/// Measurement unit. Serde names follow the table's existing rows, spelling
/// included ("mililiter", "pcs").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kilogram")]
    Kilogram,
    #[serde(rename = "gram")]
    Gram,
    #[serde(rename = "liter")]
    Liter,
    #[serde(rename = "mililiter")]
    Milliliter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Kilogram,
        Unit::Gram,
        Unit::Liter,
        Unit::Milliliter,
        Unit::Piece,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Liter => "l",
            Unit::Milliliter => "ml",
            Unit::Piece => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" => Ok(Unit::Kilogram),
            "g" | "gram" => Ok(Unit::Gram),
            "l" | "liter" => Ok(Unit::Liter),
            "ml" | "mililiter" | "milliliter" => Ok(Unit::Milliliter),
            "pcs" | "piece" | "pieces" => Ok(Unit::Piece),
            _ => Err(format!(
                "Unknown unit '{}' (expected kg, g, l, ml or pcs)",
                s
            )),
        }
    }
}

/// An inventory row as the remote store returns it. Field names map onto the
/// table's columns; `id` is assigned by the store and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "kategori")]
    pub category: Category,
    #[serde(rename = "jumlah")]
    pub quantity: f64,
    #[serde(rename = "satuan")]
    pub unit: Unit,
    #[serde(
        rename = "tanggal_kadaluarsa",
        default,
        deserialize_with = "lenient_date"
    )]
    pub expiry: Option<NaiveDate>,
}

impl Item {
    /// Full-field draft for the replace-style update the store expects.
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            expiry: self.expiry,
        }
    }
}

/// What `create` and `update` send: an item without its store-assigned id.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDraft {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "kategori")]
    pub category: Category,
    #[serde(rename = "jumlah")]
    pub quantity: f64,
    #[serde(rename = "satuan")]
    pub unit: Unit,
    #[serde(rename = "tanggal_kadaluarsa")]
    pub expiry: Option<NaiveDate>,
}

impl ItemDraft {
    /// Required-field check, run before any request is issued.
    ///
    /// Category and unit cannot be absent here (the enums make that state
    /// unrepresentable), so the remaining runtime checks are the name and
    /// the quantity.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PantriError::Validation("name must not be empty".into()));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(PantriError::Validation(
                "quantity must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

/// Expiry dates are lenient on the way in: rows written by other clients can
/// hold anything, and an absent, null, empty or unparseable value means
/// "does not expire". This is deliberate policy: a bad date must not make
/// the whole listing fail.
fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| NaiveDate::from_str(s).ok()))
}
