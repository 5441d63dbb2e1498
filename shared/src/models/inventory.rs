//! Inventory Record Models
//!
//! Flat per-product payloads POSTed to the external inventory API on
//! save. The engine never persists anything itself; it only produces
//! these records from a computed report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::settlement::HandlingMode;

/// Origin of an inventory record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Van/route settlement line (issued vs. returned, with amounts)
    Van,
    /// Shop stock count (count only, no amounts)
    Shop,
}

/// One settled product line, as the inventory endpoint expects it
///
/// Quantities are the raw operator-entered counts; amounts are the
/// derived settlement values. `quantityPrice` is the legacy name for
/// the issued-quantity amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub product_id: String,
    pub name: String,
    pub units: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub return_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub return_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_sold_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Business date, serialized as YYYY-MM-DD
    pub added_date: NaiveDate,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub handling_mode: HandlingMode,
}

/// One shop stock-count line (sibling payload to [`InventoryRecord`])
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopCountRecord {
    pub product_id: String,
    pub name: String,
    pub units: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Business date, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

impl ShopCountRecord {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        units: impl Into<String>,
        quantity: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            units: units.into(),
            quantity,
            date,
            record_type: RecordType::Shop,
        }
    }
}
