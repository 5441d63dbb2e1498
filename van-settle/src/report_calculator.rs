//! Report Calculator
//!
//! Builds and recomputes settlement reports. A report is a pure
//! function of its current line inputs: every edit path here ends in
//! [`recalculate`], which rederives each line's amounts and all totals
//! from scratch. Aggregation is a plain fold, deterministic for the
//! same line list regardless of ordering.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{HandlingMode, Product, SettlementLine, SettlementReport, SettlementTotals};

use crate::error::SettleError;
use crate::line_calculator::settle_line;
use crate::validation::{validate_cash_returned, validate_quantity};

/// Build a fresh report for one business date from the catalog
/// listing: one zeroed line per product, grouped by category in
/// first-seen catalog order.
pub fn new_report(products: Vec<Product>, business_date: NaiveDate) -> SettlementReport {
    let mut category_order: Vec<String> = Vec::new();
    for p in &products {
        if !category_order.iter().any(|c| c == &p.category) {
            category_order.push(p.category.clone());
        }
    }

    let mut lines: Vec<SettlementLine> = products.into_iter().map(SettlementLine::new).collect();
    // Stable sort keeps catalog order within each category
    lines.sort_by_key(|l| {
        category_order
            .iter()
            .position(|c| c == &l.product.category)
            .unwrap_or(usize::MAX)
    });

    let mut report = SettlementReport {
        business_date,
        lines,
        category_totals: BTreeMap::new(),
        grand_total: SettlementTotals::default(),
        cash_returned: Decimal::ZERO,
        net_settlement: Decimal::ZERO,
    };
    recalculate(&mut report);
    report
}

/// Apply an operator edit to one line, then recompute the report.
///
/// Issued and returned counts are set together with their shared
/// handling mode; mixing modes between the two counts of a line is
/// not expressible.
pub fn set_line_quantities(
    report: &mut SettlementReport,
    product_id: &str,
    mode: HandlingMode,
    issued_quantity: Decimal,
    returned_quantity: Decimal,
) -> Result<(), SettleError> {
    validate_quantity("issued quantity", issued_quantity)?;
    validate_quantity("returned quantity", returned_quantity)?;

    let line = report
        .line_mut(product_id)
        .ok_or_else(|| SettleError::UnknownProduct(product_id.to_string()))?;
    line.handling_mode = mode;
    line.issued_quantity = issued_quantity;
    line.returned_quantity = returned_quantity;

    recalculate(report);
    Ok(())
}

/// Set the report-level cash hand-back, then recompute.
pub fn set_cash_returned(
    report: &mut SettlementReport,
    amount: Decimal,
) -> Result<(), SettleError> {
    validate_cash_returned(amount)?;
    report.cash_returned = amount;
    recalculate(report);
    Ok(())
}

/// Recompute every derived field of the report from its line inputs.
pub fn recalculate(report: &mut SettlementReport) {
    let mut category_totals: BTreeMap<String, SettlementTotals> = BTreeMap::new();
    let mut grand_total = SettlementTotals::default();

    for line in &mut report.lines {
        let amounts = settle_line(
            &line.product,
            line.handling_mode,
            line.issued_quantity,
            line.returned_quantity,
        );
        line.chargeable_issued = amounts.chargeable_issued;
        line.chargeable_returned = amounts.chargeable_returned;
        line.quantity_amount = amounts.quantity_amount;
        line.return_amount = amounts.return_amount;
        line.net_sold_quantity = amounts.net_sold_quantity;
        line.total_amount = amounts.total_amount;
        line.matched_rule = amounts.rule_name.to_string();
        line.missing_price = amounts.missing_price;

        category_totals
            .entry(line.product.category.clone())
            .or_default()
            .add_line(line);
        grand_total.add_line(line);
    }

    report.category_totals = category_totals;
    report.grand_total = grand_total;
    report.net_settlement = report.grand_total.total_amount - report.cash_returned;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, units: &str, category: &str, wholesale: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            units: units.to_string(),
            category: category.to_string(),
            whole_sale_price: Decimal::from(wholesale),
            retail_price: Decimal::from(wholesale + 5),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn test_new_report_groups_lines_by_first_seen_category() {
        // Catalog interleaves categories; lines regroup, milk first
        let report = new_report(
            vec![
                product("1", "TM", "500ML", "milk", 30),
                product("2", "CURD", "500ML", "curd", 20),
                product("3", "FCM", "500ML", "milk", 24),
            ],
            date(),
        );

        let categories: Vec<&str> = report
            .lines
            .iter()
            .map(|l| l.product.category.as_str())
            .collect();
        assert_eq!(categories, ["milk", "milk", "curd"]);
        // Catalog order preserved within the category
        assert_eq!(report.lines[0].product.id, "1");
        assert_eq!(report.lines[1].product.id, "3");
        assert!(report.is_empty());
        assert_eq!(report.grand_total, SettlementTotals::default());
    }

    #[test]
    fn test_edit_recomputes_line_and_totals() {
        let mut report = new_report(vec![product("1", "TM", "500ML", "milk", 30)], date());

        set_line_quantities(
            &mut report,
            "1",
            HandlingMode::Case,
            Decimal::from(2),
            Decimal::from(1),
        )
        .unwrap();

        let line = report.line("1").unwrap();
        assert_eq!(line.matched_rule, "TM_500ML");
        assert_eq!(line.quantity_amount, Decimal::from(1440));
        assert_eq!(line.total_amount, Decimal::from(720));

        let milk = &report.category_totals["milk"];
        assert_eq!(milk.quantity, Decimal::from(24));
        assert_eq!(milk.return_quantity, Decimal::from(12));
        assert_eq!(milk.total_amount, Decimal::from(720));
        assert_eq!(report.grand_total.total_amount, Decimal::from(720));
        assert_eq!(report.net_settlement, Decimal::from(720));
    }

    #[test]
    fn test_edit_unknown_product_is_rejected() {
        let mut report = new_report(vec![product("1", "TM", "500ML", "milk", 30)], date());
        let err = set_line_quantities(
            &mut report,
            "99",
            HandlingMode::Volume,
            Decimal::ONE,
            Decimal::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, SettleError::UnknownProduct("99".to_string()));
    }

    #[test]
    fn test_invalid_quantity_leaves_report_untouched() {
        let mut report = new_report(vec![product("1", "TM", "500ML", "milk", 30)], date());
        let before = report.clone();

        let err = set_line_quantities(
            &mut report,
            "1",
            HandlingMode::Case,
            Decimal::from(-2),
            Decimal::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, SettleError::NegativeAmount { .. }));
        assert_eq!(report, before);
    }

    #[test]
    fn test_cash_returned_folds_into_net_settlement() {
        let mut report = new_report(vec![product("1", "TM", "500ML", "milk", 30)], date());
        set_line_quantities(
            &mut report,
            "1",
            HandlingMode::Case,
            Decimal::from(2),
            Decimal::from(1),
        )
        .unwrap();

        set_cash_returned(&mut report, Decimal::from(200)).unwrap();
        assert_eq!(report.net_settlement, Decimal::from(520));

        // Exceeding the grand total is allowed; the result goes negative
        set_cash_returned(&mut report, Decimal::from(1000)).unwrap();
        assert_eq!(report.net_settlement, Decimal::from(-280));

        assert!(set_cash_returned(&mut report, Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_recalculate_is_idempotent() {
        let mut report = new_report(
            vec![
                product("1", "TM", "500ML", "milk", 30),
                product("2", "CURD MINI", "110ML", "curd", 5),
            ],
            date(),
        );
        set_line_quantities(
            &mut report,
            "2",
            HandlingMode::Discrete,
            Decimal::from(200),
            Decimal::from(50),
        )
        .unwrap();

        let once = report.clone();
        recalculate(&mut report);
        assert_eq!(report, once);
    }

    #[test]
    fn test_missing_price_line_is_flagged_and_zero() {
        let mut report = new_report(vec![product("1", "SM", "500ML", "milk", 0)], date());
        set_line_quantities(
            &mut report,
            "1",
            HandlingMode::Case,
            Decimal::from(3),
            Decimal::ZERO,
        )
        .unwrap();

        let flagged: Vec<&SettlementLine> = report.flagged_lines().collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].product.id, "1");
        assert_eq!(flagged[0].total_amount, Decimal::ZERO);
        // The chargeable quantity still aggregates
        assert_eq!(report.grand_total.quantity, Decimal::from(36));
        assert_eq!(report.grand_total.total_amount, Decimal::ZERO);
    }
}
