//! Inventory service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Inventory ledger error variants.
#[derive(Debug, Error)]
pub enum InventoryServiceError {
    /// Variation was not found.
    #[error("variation not found")]
    NotFound,

    /// Quantity was zero or negative.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// Not enough units on hand to satisfy the reservation.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for InventoryServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation) => Self::InvalidQuantity,
            _ => Self::Sql(error),
        }
    }
}
