//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Item from Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.remove",
    skip(variation, depot),
    fields(
        customer_uuid = tracing::field::Empty,
        variation_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    variation: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;
    let variation = variation.into_inner();

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));
    span.record("variation_uuid", tracing::field::display(variation));

    state
        .app
        .carts
        .remove_item(customer, variation.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(variation_uuid = %variation, "removed cart item");

    Ok(StatusCode::NO_CONTENT)
}
