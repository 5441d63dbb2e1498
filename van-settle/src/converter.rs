//! Unit Converter
//!
//! Converts a raw operator-entered count into the charge basis its
//! settlement rule prices against. Applied identically to issued and
//! returned quantities; a line's two counts always share one handling
//! mode.

use rust_decimal::Decimal;
use shared::HandlingMode;

use crate::rules::SettlementRule;

/// Convert a raw count into the rule's chargeable quantity.
///
/// - `Case`: raw count times the rule's case size.
/// - `Volume`: unchanged, already in the charge basis.
/// - `Discrete`: raw pieces times the rule's liters-per-piece factor;
///   unchanged when the rule defines none (pieces are then treated as
///   already-chargeable units).
pub fn to_chargeable_quantity(
    raw_qty: Decimal,
    rule: &SettlementRule,
    mode: HandlingMode,
) -> Decimal {
    match mode {
        HandlingMode::Case => raw_qty * Decimal::from(rule.case_size),
        HandlingMode::Volume => raw_qty,
        HandlingMode::Discrete => match rule.piece_liter_factor {
            Some(factor) => raw_qty * factor,
            None => raw_qty,
        },
    }
}
