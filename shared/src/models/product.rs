//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity (catalog view)
///
/// Read-only to the engine; records come from the external catalog
/// listing endpoint. Prices default to zero when the catalog omits
/// them; the engine computes a flagged zero-amount line instead of
/// rejecting partial data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier assigned by the catalog service
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Free-text packaging label (e.g. "500ML", "160ML")
    pub units: String,
    /// Coarse grouping ("milk", "curd"), used only for report grouping
    pub category: String,
    /// Wholesale unit price
    #[serde(default, rename = "wholeSalePrice", with = "rust_decimal::serde::float")]
    pub whole_sale_price: Decimal,
    /// Retail unit price
    #[serde(default, with = "rust_decimal::serde::float")]
    pub retail_price: Decimal,
}

impl Product {
    /// Classification key: name and packaging label joined by a space.
    /// This is the exact string the settlement rules pattern-match on.
    pub fn key(&self) -> String {
        format!("{} {}", self.name, self.units)
    }
}
