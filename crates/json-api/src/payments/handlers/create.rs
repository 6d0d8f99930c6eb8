//! Record Payment Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::payments::{
    data::NewPayment,
    records::{PaymentStatus, PaymentUuid},
};

use crate::{
    extensions::*,
    payments::{errors::into_status_error, handlers::PaymentResponse},
    state::State,
};

/// Record Payment Request
///
/// A payment the gateway has already verified.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePaymentRequest {
    /// Client supplied identifier; generated when omitted
    pub uuid: Option<Uuid>,

    /// The payment gateway's reference
    pub reference: String,

    /// Decimal amount, e.g. `"39.98"`
    pub amount: String,

    /// Gateway verdict: `pending`, `completed`, `failed` or `refunded`
    pub status: String,
}

impl TryFrom<CreatePaymentRequest> for NewPayment {
    type Error = StatusError;

    fn try_from(request: CreatePaymentRequest) -> Result<Self, Self::Error> {
        Ok(NewPayment {
            uuid: request.uuid.map_or_else(PaymentUuid::new, PaymentUuid::from_uuid),
            amount: request
                .amount
                .trim()
                .parse::<Decimal>()
                .or_400("amount must be a decimal string")?,
            status: request
                .status
                .parse::<PaymentStatus>()
                .or_400("unknown payment status")?,
            reference: request.reference,
        })
    }
}

/// Record Payment Handler
#[endpoint(
    tags("payments"),
    summary = "Record Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Payment recorded"),
        (status_code = StatusCode::CONFLICT, description = "Payment reference already recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "payments.create",
    skip(json, depot, res),
    fields(customer_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePaymentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_401()?;

    tracing::Span::current().record("customer_uuid", tracing::field::display(customer));

    let payment = state
        .app
        .payments
        .record_payment(customer, json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(payment.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use emporium_app::domain::payments::{MockPaymentsService, PaymentsServiceError};

    use crate::test_helpers::{Mocks, TEST_CUSTOMER_UUID, customer_service, make_payment};

    use super::*;

    fn make_service(payments: MockPaymentsService) -> Service {
        customer_service(
            Mocks {
                payments,
                ..Mocks::default()
            },
            Router::with_path("payments").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_returns_201_with_exact_amount() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_record_payment()
            .once()
            .withf(|customer, payment| {
                *customer == TEST_CUSTOMER_UUID
                    && payment.reference == "pi_123"
                    && payment.amount == Decimal::new(3998, 2)
                    && payment.status == PaymentStatus::Completed
            })
            .return_once(|_, payment| Ok(make_payment(&payment.reference)));

        let mut res = TestClient::post("http://example.com/payments")
            .json(&json!({ "reference": "pi_123", "amount": "39.98", "status": "completed" }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let payment: PaymentResponse = res.take_json().await?;

        assert_eq!(payment.reference, "pi_123");
        assert_eq!(payment.amount, "39.98");
        assert_eq!(payment.status, "completed");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_uses_client_uuid() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut payments = MockPaymentsService::new();

        payments
            .expect_record_payment()
            .once()
            .withf(move |_, payment| payment.uuid.into_uuid() == uuid)
            .return_once(|_, payment| Ok(make_payment(&payment.reference)));

        let res = TestClient::post("http://example.com/payments")
            .json(&json!({
                "uuid": uuid,
                "reference": "pi_456",
                "amount": "10.00",
                "status": "pending"
            }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_reference_returns_409() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_record_payment()
            .once()
            .return_once(|_, _| Err(PaymentsServiceError::DuplicateReference));

        let res = TestClient::post("http://example.com/payments")
            .json(&json!({ "reference": "pi_123", "amount": "39.98", "status": "completed" }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_unparseable_amount_returns_400() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments.expect_record_payment().never();

        let res = TestClient::post("http://example.com/payments")
            .json(&json!({ "reference": "pi_123", "amount": "39,98", "status": "completed" }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_unknown_status_returns_400() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments.expect_record_payment().never();

        let res = TestClient::post("http://example.com/payments")
            .json(&json!({ "reference": "pi_123", "amount": "39.98", "status": "settled" }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_negative_amount_returns_400() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_record_payment()
            .once()
            .withf(|_, payment| payment.amount.is_sign_negative())
            .return_once(|_, _| Err(PaymentsServiceError::InvalidData));

        let res = TestClient::post("http://example.com/payments")
            .json(&json!({ "reference": "pi_123", "amount": "-1.00", "status": "refunded" }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
