//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrdersResponse},
    state::State,
};

/// Order Index Handler
///
/// Returns the customer's orders, newest first.
#[endpoint(tags("orders"), summary = "List Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into()))
}
