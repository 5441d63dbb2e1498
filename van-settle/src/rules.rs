//! Settlement Rule Table
//!
//! The single source of truth for product-specific conversion and
//! pricing policy. Each catalog product classifies to exactly one rule
//! by case-sensitive substring matching over `name + " " + units`,
//! tested in fixed table order; first match wins. Products no row
//! matches fall back to [`DEFAULT_RULE`] and stay billable at their
//! raw wholesale price.

use rust_decimal::Decimal;
use shared::Product;

/// Which descriptor price a rule bills against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBasis {
    Wholesale,
    Retail,
}

/// One row of the settlement rule table
#[derive(Debug, Clone)]
pub struct SettlementRule {
    /// Stable rule name, surfaced on every settled line for auditing
    pub name: &'static str,
    /// Substrings the classification key must contain
    requires: &'static [&'static str],
    /// Substrings that disqualify the key
    excludes: &'static [&'static str],
    pub price_basis: PriceBasis,
    /// Units per case, applied in Case handling mode; 1 when the
    /// product is not case-packed
    pub case_size: u32,
    /// Multiplier applied on top of the unit price
    pub rate_multiplier: Decimal,
    /// Fixed per-raw-unit rate replacing price x multiplier entirely
    pub flat_rate: Option<Decimal>,
    /// Liters per discrete piece, applied in Discrete handling mode
    pub piece_liter_factor: Option<Decimal>,
}

const FLAT_FCM_1000ML: Decimal = Decimal::from_parts(72, 0, 0, false, 0);
const LITERS_PER_160ML_POUCH: Decimal = Decimal::from_parts(16, 0, 0, false, 2);
const LITERS_PER_110ML_CUP: Decimal = Decimal::from_parts(11, 0, 0, false, 2);

/// Named rules, evaluated in this exact order.
///
/// Row 4 (`TM_500ML`) also matches DTM keys, since `"DTM"` contains
/// `"TM"`; row 5 carries identical parameters, so first-match keeps
/// the invoice unchanged either way. See the shadowing test below.
pub static RULES: [SettlementRule; 8] = [
    SettlementRule {
        name: "FCM_500ML",
        requires: &["FCM", "500ML"],
        excludes: &[],
        price_basis: PriceBasis::Wholesale,
        case_size: 1,
        rate_multiplier: Decimal::TWO,
        flat_rate: None,
        piece_liter_factor: None,
    },
    SettlementRule {
        name: "FCM_1000ML",
        requires: &["FCM", "1000ML"],
        excludes: &[],
        price_basis: PriceBasis::Wholesale,
        case_size: 1,
        rate_multiplier: Decimal::ONE,
        flat_rate: Some(FLAT_FCM_1000ML),
        piece_liter_factor: None,
    },
    SettlementRule {
        name: "SM_500ML",
        requires: &["SM", "500ML"],
        excludes: &[],
        price_basis: PriceBasis::Wholesale,
        case_size: 12,
        rate_multiplier: Decimal::TWO,
        flat_rate: None,
        piece_liter_factor: None,
    },
    SettlementRule {
        name: "TM_500ML",
        requires: &["TM", "500ML"],
        excludes: &["MINI"],
        price_basis: PriceBasis::Wholesale,
        case_size: 12,
        rate_multiplier: Decimal::TWO,
        flat_rate: None,
        piece_liter_factor: None,
    },
    SettlementRule {
        name: "DTM_500ML",
        requires: &["DTM", "500ML"],
        excludes: &[],
        price_basis: PriceBasis::Wholesale,
        case_size: 12,
        rate_multiplier: Decimal::TWO,
        flat_rate: None,
        piece_liter_factor: None,
    },
    SettlementRule {
        name: "TM_MINI_160ML",
        requires: &["TM MINI", "160ML"],
        excludes: &[],
        price_basis: PriceBasis::Wholesale,
        case_size: 60,
        rate_multiplier: Decimal::ONE,
        flat_rate: None,
        piece_liter_factor: Some(LITERS_PER_160ML_POUCH),
    },
    SettlementRule {
        name: "CURD_500ML",
        requires: &["CURD", "500ML"],
        excludes: &["MINI"],
        price_basis: PriceBasis::Retail,
        case_size: 12,
        rate_multiplier: Decimal::TWO,
        flat_rate: None,
        piece_liter_factor: None,
    },
    SettlementRule {
        name: "CURD_MINI_110ML",
        requires: &["CURD MINI", "110ML"],
        excludes: &[],
        price_basis: PriceBasis::Wholesale,
        case_size: 84,
        rate_multiplier: Decimal::ONE,
        flat_rate: None,
        piece_liter_factor: Some(LITERS_PER_110ML_CUP),
    },
];

/// Catch-all: raw wholesale unit price, no case or piece handling.
/// Deliberate policy: every unclassified product stays billable.
pub static DEFAULT_RULE: SettlementRule = SettlementRule {
    name: "DEFAULT",
    requires: &[],
    excludes: &[],
    price_basis: PriceBasis::Wholesale,
    case_size: 1,
    rate_multiplier: Decimal::ONE,
    flat_rate: None,
    piece_liter_factor: None,
};

impl SettlementRule {
    /// Case-sensitive substring test against a classification key
    pub fn matches(&self, key: &str) -> bool {
        self.requires.iter().all(|s| key.contains(s))
            && !self.excludes.iter().any(|s| key.contains(s))
    }

    /// The descriptor price this rule bills against
    pub fn unit_price(&self, product: &Product) -> Decimal {
        match self.price_basis {
            PriceBasis::Wholesale => product.whole_sale_price,
            PriceBasis::Retail => product.retail_price,
        }
    }

    /// Per-unit rate: flat override when set, otherwise the selected
    /// unit price times the rule's multiplier
    pub fn rate(&self, product: &Product) -> Decimal {
        self.flat_rate
            .unwrap_or_else(|| self.unit_price(product) * self.rate_multiplier)
    }

    /// True when the rule bills against a price the descriptor lacks
    /// (absent prices deserialize to zero)
    pub fn bills_missing_price(&self, product: &Product) -> bool {
        self.flat_rate.is_none() && self.unit_price(product).is_zero()
    }
}

/// Classify a product to its settlement rule, first match wins.
pub fn classify(product: &Product) -> &'static SettlementRule {
    let key = product.key();
    for rule in RULES.iter() {
        if rule.matches(&key) {
            tracing::debug!(rule = rule.name, key = %key, "classified product");
            return rule;
        }
    }
    tracing::debug!(key = %key, "no settlement rule matched, billing at default rate");
    &DEFAULT_RULE
}
