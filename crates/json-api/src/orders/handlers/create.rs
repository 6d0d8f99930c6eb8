//! Place Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::orders::{data::NewOrder, records::OrderUuid};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Place Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// Client supplied order identifier; generated when omitted
    pub uuid: Option<Uuid>,

    /// Gateway reference of a payment already recorded by this customer
    pub payment_reference: String,

    /// The variation to order
    pub variation_uuid: Uuid,

    /// Units to order
    pub quantity: i64,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            uuid: request.uuid.map_or_else(OrderUuid::new, OrderUuid::from_uuid),
            payment_reference: request.payment_reference,
            variation_uuid: request.variation_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Place Order Handler
///
/// Reserves stock and records an order against a recorded payment.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment or variation not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock or duplicate order"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(json, depot, res),
    fields(
        customer_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;
    let order = NewOrder::from(json.into_inner());

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));
    span.record("order_uuid", tracing::field::display(order.uuid));

    let order = state
        .app
        .orders
        .place_order(customer, order)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use emporium_app::domain::orders::{MockOrdersService, OrderStatus, OrdersServiceError};

    use crate::test_helpers::{Mocks, TEST_CUSTOMER_UUID, customer_service, make_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        customer_service(
            Mocks {
                orders,
                ..Mocks::default()
            },
            Router::with_path("orders").post(handler),
        )
    }

    fn body(uuid: Uuid) -> serde_json::Value {
        json!({
            "uuid": uuid,
            "payment_reference": "pi_123",
            "variation_uuid": Uuid::now_v7(),
            "quantity": 2
        })
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .withf(move |customer, order| {
                *customer == TEST_CUSTOMER_UUID
                    && order.uuid.into_uuid() == uuid
                    && order.payment_reference == "pi_123"
                    && order.quantity == 2
            })
            .return_once(|_, order| Ok(make_order(order.uuid, OrderStatus::Processing)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&body(uuid))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        assert_eq!(location, Some(format!("/orders/{uuid}")));

        let order: OrderResponse = res.take_json().await?;

        assert_eq!(order.uuid, uuid);
        assert_eq!(order.status, "processing");
        assert_eq!(order.total_amount, "39.98");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_insufficient_stock_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().once().return_once(|_, _| {
            Err(OrdersServiceError::InsufficientStock {
                requested: 2,
                available: 1,
            })
        });

        let res = TestClient::post("http://example.com/orders")
            .json(&body(Uuid::now_v7()))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_order_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::DuplicateOrder));

        let res = TestClient::post("http://example.com/orders")
            .json(&body(Uuid::now_v7()))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_unknown_payment_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::PaymentNotFound));

        let res = TestClient::post("http://example.com/orders")
            .json(&body(Uuid::now_v7()))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_invalid_quantity_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .withf(|_, order| order.quantity == 0)
            .return_once(|_, _| Err(OrdersServiceError::InvalidQuantity));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "payment_reference": "pi_123",
                "variation_uuid": Uuid::now_v7(),
                "quantity": 0
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
