//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use emporium_app::domain::carts::records::CartRecord;

use crate::{
    cart::{errors::into_status_error, handlers::CartItemResponse},
    extensions::*,
    state::State,
};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The cart lines, oldest first
    pub items: Vec<CartItemResponse>,

    /// Units across every line
    pub total_quantity: i64,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            total_quantity: cart.total_quantity(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}

/// Get Cart Handler
///
/// Returns the authenticated customer's cart.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
