//! Set Cart Quantity Handler

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

use emporium_app::domain::carts::data::CartQuantity;

use crate::{
    cart::{errors::into_status_error, handlers::render_item},
    extensions::*,
    state::State,
};

/// Set Cart Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetCartItemRequest {
    /// New quantity; zero or less removes the line
    pub quantity: i64,
}

/// Set Cart Quantity Handler
///
/// Replaces the quantity of a cart line.
#[endpoint(
    tags("cart"),
    summary = "Set Cart Item Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart line updated"),
        (status_code = StatusCode::NO_CONTENT, description = "Cart line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Variation not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    variation: PathParam<Uuid>,
    json: JsonBody<SetCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;

    let item = state
        .app
        .carts
        .add_or_update(
            customer,
            variation.into_inner().into(),
            CartQuantity::Absolute(json.into_inner().quantity),
        )
        .await
        .map_err(into_status_error)?;

    render_item(item, res);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use emporium_app::domain::{carts::MockCartsService, catalog::records::VariationUuid};

    use crate::{
        cart::handlers::{CartItemResponse, tests::make_item},
        test_helpers::{Mocks, TEST_CUSTOMER_UUID, customer_service},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        customer_service(
            Mocks {
                carts,
                ..Mocks::default()
            },
            Router::with_path("cart/items/{variation}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_set_forwards_absolute_quantity() -> TestResult {
        let variation = VariationUuid::from_uuid(Uuid::now_v7());

        let mut carts = MockCartsService::new();

        carts
            .expect_add_or_update()
            .once()
            .withf(move |customer, v, quantity| {
                *customer == TEST_CUSTOMER_UUID
                    && *v == variation
                    && *quantity == CartQuantity::Absolute(4)
            })
            .return_once(move |_, _, _| Ok(Some(make_item(variation, 4))));

        let item: CartItemResponse =
            TestClient::put(format!("http://example.com/cart/items/{variation}"))
                .json(&json!({ "quantity": 4 }))
                .send(&make_service(carts))
                .await
                .take_json()
                .await?;

        assert_eq!(item.quantity, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_zero_returns_204() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_or_update()
            .once()
            .withf(|_, _, quantity| *quantity == CartQuantity::Absolute(0))
            .return_once(|_, _, _| Ok(None));

        let res = TestClient::put(format!("http://example.com/cart/items/{}", Uuid::now_v7()))
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }
}
