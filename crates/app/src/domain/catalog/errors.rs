//! Catalog service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::inventory::InventoryServiceError;

/// Catalog service error variants.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// A product with the same SKU or a variation with the same
    /// `(product, color, size)` already exists.
    #[error("catalog entry already exists")]
    AlreadyExists,

    /// Product or variation was not found.
    #[error("catalog entry not found")]
    NotFound,

    /// The referenced product does not exist.
    #[error("invalid product reference")]
    InvalidReference,

    /// Required data was missing.
    #[error("missing required data")]
    MissingRequiredData,

    /// Provided data failed validation.
    #[error("invalid data")]
    InvalidData,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CatalogServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl From<InventoryServiceError> for CatalogServiceError {
    fn from(error: InventoryServiceError) -> Self {
        match error {
            InventoryServiceError::NotFound => Self::NotFound,
            InventoryServiceError::InvalidQuantity
            | InventoryServiceError::InsufficientStock { .. } => Self::InvalidData,
            InventoryServiceError::Sql(error) => Self::Sql(error),
        }
    }
}
