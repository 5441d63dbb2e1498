//! Van/route settlement engine
//!
//! Takes a driver's daily issued and returned stock counts, entered in
//! heterogeneous packaging units (cases, discrete pieces, or
//! already-normalized volume), and turns them into booked revenue,
//! returned-goods credit, net quantity sold, and a final cash
//! settlement per product, per category, and in aggregate.
//!
//! The engine is pure and synchronous: no I/O, no caching, no shared
//! state. Every edit triggers a full recomputation of the report from
//! its current line inputs. All arithmetic uses `rust_decimal` so
//! chained multiplications lose no precision.

pub mod converter;
pub mod error;
pub mod line_calculator;
pub mod report_calculator;
pub mod rules;
pub mod validation;

pub use converter::to_chargeable_quantity;
pub use error::SettleError;
pub use line_calculator::{LineAmounts, settle_line};
pub use report_calculator::{new_report, recalculate, set_cash_returned, set_line_quantities};
pub use rules::{DEFAULT_RULE, PriceBasis, RULES, SettlementRule, classify};
