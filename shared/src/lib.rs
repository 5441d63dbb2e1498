//! Shared types for the dairy route settlement system
//!
//! Data models exchanged with the external catalog and inventory
//! services, plus the settlement report types computed by the engine.

pub mod models;
pub mod settlement;

// Re-exports
pub use models::{InventoryRecord, Product, RecordType, ShopCountRecord};
pub use settlement::{HandlingMode, SettlementLine, SettlementReport, SettlementTotals};
