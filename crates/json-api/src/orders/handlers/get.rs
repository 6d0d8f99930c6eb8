//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;

    let order = state
        .app
        .orders
        .get_order(customer, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use emporium_app::domain::orders::{
        MockOrdersService, OrderStatus, OrdersServiceError, records::OrderUuid,
    };

    use crate::test_helpers::{Mocks, TEST_CUSTOMER_UUID, customer_service, make_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        customer_service(
            Mocks {
                orders,
                ..Mocks::default()
            },
            Router::with_path("orders/{order}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_order() -> TestResult {
        let uuid = OrderUuid::from_uuid(Uuid::now_v7());

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |customer, order| *customer == TEST_CUSTOMER_UUID && *order == uuid)
            .return_once(move |_, _| Ok(make_order(uuid, OrderStatus::Shipped)));

        let order: OrderResponse = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(order.uuid, uuid.into_uuid());
        assert_eq!(order.status, "shipped");
        assert_eq!(order.unit_price, "19.99");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_other_customers_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/orders/{}", Uuid::now_v7()))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
