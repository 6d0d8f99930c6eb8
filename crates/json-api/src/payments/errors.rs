//! Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::domain::payments::PaymentsServiceError;

pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::DuplicateReference => {
            StatusError::conflict().brief("Payment reference already recorded")
        }
        PaymentsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Payment already exists")
        }
        PaymentsServiceError::NotFound => StatusError::not_found().brief("Payment not found"),
        PaymentsServiceError::InvalidReference
        | PaymentsServiceError::MissingRequiredData
        | PaymentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payment payload")
        }
        PaymentsServiceError::Sql(source) => {
            error!("payment storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
