//! Get Payment Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    payments::{errors::into_status_error, handlers::PaymentResponse},
    state::State,
};

/// Get Payment Handler
///
/// Looks up one of the customer's payments by gateway reference.
#[endpoint(
    tags("payments"),
    summary = "Get Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment found"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    reference: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PaymentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;

    let payment = state
        .app
        .payments
        .lookup_payment(customer, &reference.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(payment.into()))
}
