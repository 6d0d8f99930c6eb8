//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::orders::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    /// `processing`, `shipped`, `delivered` or `cancelled`
    pub status: String,
}

/// Update Order Status Handler
///
/// Moves an order through its lifecycle. Cancelling returns the ordered units
/// to stock.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order status updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Transition not allowed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.update_status",
    skip(order, json, depot),
    fields(
        customer_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty,
        status = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;
    let order = order.into_inner();

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .or_400("unknown order status")?;

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));
    span.record("order_uuid", tracing::field::display(order));
    span.record("status", status.as_str());

    let order = state
        .app
        .orders
        .update_status(customer, order.into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
