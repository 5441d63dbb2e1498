//! Data models
//!
//! Shared between the settlement engine and the outer application.
//! Field names and casing follow the external API payloads, so these
//! types serialize to exactly what the legacy endpoints exchange.

pub mod inventory;
pub mod product;

// Re-exports
pub use inventory::*;
pub use product::*;
