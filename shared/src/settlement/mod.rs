//! Settlement report types
//!
//! The report is a pure function of its line inputs: every derived
//! field below is recomputed in full by the engine on each edit, never
//! entered or cached. The structs here only carry state; the rule
//! table and the arithmetic live in the `van-settle` crate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{InventoryRecord, Product, RecordType};

/// Unit the operator used when entering counts for one line
///
/// Chosen per line, independently of the product's settlement rule.
/// Issued and returned counts of a line always share one mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlingMode {
    /// Counted in cases; converted via the rule's case size
    Case,
    /// Already in the rule's native charge basis
    #[default]
    Volume,
    /// Counted in discrete pieces; converted via the rule's
    /// liters-per-piece factor when it defines one
    Discrete,
}

/// One product line of a settlement report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementLine {
    pub product: Product,
    pub handling_mode: HandlingMode,
    /// Raw issued count, in the unit implied by `handling_mode`
    #[serde(with = "rust_decimal::serde::float")]
    pub issued_quantity: Decimal,
    /// Raw returned count, same unit as `issued_quantity`
    #[serde(with = "rust_decimal::serde::float")]
    pub returned_quantity: Decimal,

    // -- Derived (recomputed by the engine on every edit) --
    /// Issued count converted to the rule's charge basis
    #[serde(with = "rust_decimal::serde::float")]
    pub chargeable_issued: Decimal,
    /// Returned count converted to the rule's charge basis
    #[serde(with = "rust_decimal::serde::float")]
    pub chargeable_returned: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub return_amount: Decimal,
    /// May be negative when returns exceed issues; surfaced as-is so
    /// operators can spot entry mistakes
    #[serde(with = "rust_decimal::serde::float")]
    pub net_sold_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Name of the settlement rule that priced this line (audit trail)
    pub matched_rule: String,
    /// The rule billed against an absent/zero price; line computed to
    /// zero and needs operator review
    pub missing_price: bool,
}

impl SettlementLine {
    /// Fresh zeroed line for a catalog product
    pub fn new(product: Product) -> Self {
        Self {
            product,
            handling_mode: HandlingMode::default(),
            issued_quantity: Decimal::ZERO,
            returned_quantity: Decimal::ZERO,
            chargeable_issued: Decimal::ZERO,
            chargeable_returned: Decimal::ZERO,
            quantity_amount: Decimal::ZERO,
            return_amount: Decimal::ZERO,
            net_sold_quantity: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            matched_rule: String::new(),
            missing_price: false,
        }
    }

    /// True when the operator entered anything for this line
    pub fn has_activity(&self) -> bool {
        self.issued_quantity > Decimal::ZERO || self.returned_quantity > Decimal::ZERO
    }
}

/// Aggregate over a group of lines (one category, or the whole report)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SettlementTotals {
    /// Sum of chargeable issued quantities
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity_amount: Decimal,
    /// Sum of chargeable returned quantities
    #[serde(with = "rust_decimal::serde::float")]
    pub return_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub return_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl SettlementTotals {
    /// Fold one computed line into this aggregate
    pub fn add_line(&mut self, line: &SettlementLine) {
        self.quantity += line.chargeable_issued;
        self.quantity_amount += line.quantity_amount;
        self.return_quantity += line.chargeable_returned;
        self.return_amount += line.return_amount;
        self.total_amount += line.total_amount;
    }
}

/// Settlement report for one route and business date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementReport {
    /// Business date, serialized as YYYY-MM-DD
    pub business_date: NaiveDate,
    /// Lines grouped by category, in first-seen catalog order
    pub lines: Vec<SettlementLine>,
    pub category_totals: BTreeMap<String, SettlementTotals>,
    pub grand_total: SettlementTotals,
    /// Operator-entered cash hand-back; independent of per-line
    /// return amounts
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_returned: Decimal,
    /// `grand_total.total_amount - cash_returned`; may be negative
    #[serde(with = "rust_decimal::serde::float")]
    pub net_settlement: Decimal,
}

impl SettlementReport {
    /// Look up a line by product id
    pub fn line(&self, product_id: &str) -> Option<&SettlementLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Mutable lookup by product id
    pub fn line_mut(&mut self, product_id: &str) -> Option<&mut SettlementLine> {
        self.lines.iter_mut().find(|l| l.product.id == product_id)
    }

    /// Lines flagged for operator review (rule billed a missing price)
    pub fn flagged_lines(&self) -> impl Iterator<Item = &SettlementLine> {
        self.lines.iter().filter(|l| l.missing_price)
    }

    /// True when no line has any entered quantity
    pub fn is_empty(&self) -> bool {
        !self.lines.iter().any(SettlementLine::has_activity)
    }

    /// Serialize the report into per-product inventory records.
    ///
    /// Only lines with activity are included, matching the save filter
    /// the inventory endpoint expects.
    pub fn to_records(&self) -> Vec<InventoryRecord> {
        self.lines
            .iter()
            .filter(|l| l.has_activity())
            .map(|l| InventoryRecord {
                product_id: l.product.id.clone(),
                name: l.product.name.clone(),
                units: l.product.units.clone(),
                quantity: l.issued_quantity,
                quantity_price: l.quantity_amount,
                return_quantity: l.returned_quantity,
                return_amount: l.return_amount,
                net_sold_quantity: l.net_sold_quantity,
                total_amount: l.total_amount,
                added_date: self.business_date,
                record_type: RecordType::Van,
                handling_mode: l.handling_mode,
            })
            .collect()
    }
}
