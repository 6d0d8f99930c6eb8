//! Payments service errors.

use sqlx::{
    Error,
    error::ErrorKind,
};
use thiserror::Error;

const REFERENCE_CONSTRAINT: &str = "payments_reference_key";

/// Payments service error variants.
#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    /// A payment with the same gateway reference has already been recorded.
    #[error("payment reference already recorded")]
    DuplicateReference,

    /// A payment with the same UUID already exists.
    #[error("payment already exists")]
    AlreadyExists,

    /// Payment was not found for this customer.
    #[error("payment not found")]
    NotFound,

    /// The owning customer does not exist.
    #[error("invalid customer reference")]
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

impl From<Error> for PaymentsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(db_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match db_error.kind() {
            ErrorKind::UniqueViolation if db_error.constraint() == Some(REFERENCE_CONSTRAINT) => {
                Self::DuplicateReference
            }
            ErrorKind::UniqueViolation => Self::AlreadyExists,
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
