//! Orders service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::{inventory::InventoryServiceError, orders::status::OrderStatus};

const IDEMPOTENCY_CONSTRAINT: &str = "orders_idempotency_key";
const PAYMENT_FOREIGN_KEY: &str = "orders_payment_uuid_fkey";
const VARIATION_FOREIGN_KEY: &str = "orders_variation_uuid_fkey";

/// Order coordinator error variants.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// Order was not found for this customer.
    #[error("order not found")]
    NotFound,

    /// An order with the same UUID already exists.
    #[error("order already exists")]
    AlreadyExists,

    /// No payment with the given reference is recorded for the customer.
    #[error("payment not found")]
    PaymentNotFound,

    /// The ordered variation does not exist.
    #[error("variation not found")]
    VariationNotFound,

    /// Not enough stock to fulfil the order.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// The same customer, payment, variation and quantity were already
    /// ordered.
    #[error("duplicate order")]
    DuplicateOrder,

    /// Quantity was zero or negative.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// The requested status change is not allowed.
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Checkout was attempted with no cart lines.
    #[error("cart is empty")]
    EmptyCart,

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

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(db_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match (db_error.kind(), db_error.constraint()) {
            (ErrorKind::UniqueViolation, Some(IDEMPOTENCY_CONSTRAINT)) => Self::DuplicateOrder,
            (ErrorKind::UniqueViolation, _) => Self::AlreadyExists,
            (ErrorKind::ForeignKeyViolation, Some(PAYMENT_FOREIGN_KEY)) => Self::PaymentNotFound,
            (ErrorKind::ForeignKeyViolation, Some(VARIATION_FOREIGN_KEY)) => {
                Self::VariationNotFound
            }
            (ErrorKind::NotNullViolation, _) => Self::MissingRequiredData,
            (ErrorKind::CheckViolation, _) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl From<InventoryServiceError> for OrdersServiceError {
    fn from(error: InventoryServiceError) -> Self {
        match error {
            InventoryServiceError::NotFound => Self::VariationNotFound,
            InventoryServiceError::InvalidQuantity => Self::InvalidQuantity,
            InventoryServiceError::InsufficientStock {
                requested,
                available,
            } => Self::InsufficientStock {
                requested,
                available,
            },
            InventoryServiceError::Sql(error) => Self::Sql(error),
        }
    }
}
