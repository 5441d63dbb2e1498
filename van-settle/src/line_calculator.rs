//! Line Settlement Calculator
//!
//! Applies a product's settlement rule to one line's issued and
//! returned counts, producing every derived amount. All arithmetic is
//! `Decimal`; no rounding is applied, display formatting is a
//! presentation concern outside the engine.

use rust_decimal::Decimal;
use shared::{HandlingMode, Product};

use crate::converter::to_chargeable_quantity;
use crate::rules::classify;

/// Derived amounts for one settled line
#[derive(Debug, Clone, PartialEq)]
pub struct LineAmounts {
    pub chargeable_issued: Decimal,
    pub chargeable_returned: Decimal,
    pub quantity_amount: Decimal,
    pub return_amount: Decimal,
    /// Negative when returns exceed issues; never clamped
    pub net_sold_quantity: Decimal,
    pub total_amount: Decimal,
    /// Name of the rule that priced this line
    pub rule_name: &'static str,
    /// The rule billed against an absent/zero price
    pub missing_price: bool,
}

/// Settle one line: classify, convert, and price.
///
/// Flat-override rules bill the *raw* entered counts in every handling
/// mode: the flat rate is defined per raw unit, not per converted
/// unit. All other rules bill the chargeable (converted) quantities at
/// `unit_price x multiplier`.
pub fn settle_line(
    product: &Product,
    mode: HandlingMode,
    issued_quantity: Decimal,
    returned_quantity: Decimal,
) -> LineAmounts {
    let rule = classify(product);

    let chargeable_issued = to_chargeable_quantity(issued_quantity, rule, mode);
    let chargeable_returned = to_chargeable_quantity(returned_quantity, rule, mode);
    let net_sold_quantity = chargeable_issued - chargeable_returned;

    let (quantity_amount, return_amount, total_amount, missing_price) = match rule.flat_rate {
        Some(flat) => (
            issued_quantity * flat,
            returned_quantity * flat,
            (issued_quantity - returned_quantity) * flat,
            false,
        ),
        None => {
            let rate = rule.rate(product);
            (
                chargeable_issued * rate,
                chargeable_returned * rate,
                net_sold_quantity * rate,
                rule.bills_missing_price(product),
            )
        }
    };

    LineAmounts {
        chargeable_issued,
        chargeable_returned,
        quantity_amount,
        return_amount,
        net_sold_quantity,
        total_amount,
        rule_name: rule.name,
        missing_price,
    }
}
