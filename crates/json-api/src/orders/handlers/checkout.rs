//! Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrdersResponse},
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Gateway reference of the payment covering the cart
    pub payment_reference: String,
}

/// Checkout Handler
///
/// Places one order per cart line against a single payment. Either every
/// line is ordered and removed from the cart, or nothing changes.
#[endpoint(
    tags("orders"),
    summary = "Checkout Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Orders placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment or variation not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock or duplicate order"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.checkout",
    skip(json, depot, res),
    fields(customer_uuid = tracing::field::Empty, orders = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));

    let orders = state
        .app
        .orders
        .checkout(customer, &json.into_inner().payment_reference)
        .await
        .map_err(into_status_error)?;

    span.record("orders", orders.len());

    res.status_code(StatusCode::CREATED);

    Ok(Json(orders.into()))
}
