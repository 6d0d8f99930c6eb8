//! Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::PaymentNotFound => {
            StatusError::not_found().brief("Payment not found")
        }
        OrdersServiceError::VariationNotFound => {
            StatusError::not_found().brief("Variation not found")
        }
        OrdersServiceError::InsufficientStock {
            requested,
            available,
        } => StatusError::conflict().brief(format!(
            "Insufficient stock: requested {requested}, available {available}"
        )),
        OrdersServiceError::DuplicateOrder => {
            StatusError::conflict().brief("An identical order was already placed")
        }
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::InvalidTransition { from, to } => {
            StatusError::conflict().brief(format!("Cannot move order from {from} to {to}"))
        }
        OrdersServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be positive")
        }
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
