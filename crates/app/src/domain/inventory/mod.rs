//! Inventory

pub mod errors;
pub mod ledger;
mod repository;
pub mod service;

pub use errors::InventoryServiceError;
pub use ledger::PgInventoryLedger;
pub use service::*;
