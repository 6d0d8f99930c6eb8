//! Add To Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::carts::data::CartQuantity;

use crate::{
    cart::{errors::into_status_error, handlers::render_item},
    extensions::*,
    state::State,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// The variation to add
    pub variation_uuid: Uuid,

    /// Change in quantity; negative values take units out of the cart
    pub quantity: i64,
}

/// Add To Cart Handler
///
/// Adjusts a cart line by a quantity delta, creating the line when needed.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart line updated"),
        (status_code = StatusCode::NO_CONTENT, description = "Cart line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Variation not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.add",
    skip(json, depot, res),
    fields(
        customer_uuid = tracing::field::Empty,
        variation_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));
    span.record(
        "variation_uuid",
        tracing::field::display(request.variation_uuid),
    );

    let item = state
        .app
        .carts
        .add_or_update(
            customer,
            request.variation_uuid.into(),
            CartQuantity::Delta(request.quantity),
        )
        .await
        .map_err(into_status_error)?;

    render_item(item, res);

    Ok(())
}
