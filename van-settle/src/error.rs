//! Engine error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised at the engine's input boundary.
///
/// The settlement arithmetic itself never fails: unclassified products
/// fall to the default rule and missing prices compute to flagged
/// zero-amount lines. Only operator input that violates the engine's
/// preconditions (non-negative, bounded quantities) is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettleError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} exceeds maximum allowed ({max}), got {value}")]
    AmountTooLarge {
        field: &'static str,
        value: Decimal,
        max: Decimal,
    },

    #[error("product {0} is not part of this report")]
    UnknownProduct(String),
}
