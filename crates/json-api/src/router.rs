//! App Router

use salvo::Router;

use crate::{auth, cart, orders, payments, variations};

/// Routes that require a customer bearer token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(Router::with_path("variations/{variation}").get(variations::get::handler))
        .push(
            Router::with_path("products/{product}/variations").get(variations::index::handler),
        )
        .push(
            Router::with_path("cart").get(cart::get::handler).push(
                Router::with_path("items").post(cart::add::handler).push(
                    Router::with_path("{variation}")
                        .put(cart::set::handler)
                        .delete(cart::remove::handler),
                ),
            ),
        )
        .push(
            Router::with_path("payments")
                .post(payments::create::handler)
                .push(Router::with_path("{reference}").get(payments::get::handler)),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .push(Router::with_path("status").put(orders::status::handler)),
                ),
        )
        .push(Router::with_path("checkout").post(orders::checkout::handler))
}
