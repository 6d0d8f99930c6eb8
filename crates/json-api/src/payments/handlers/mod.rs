//! Payment Handlers

pub(crate) mod create;
pub(crate) mod get;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::payments::records::PaymentRecord;

/// Payment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentResponse {
    /// The unique identifier of the payment
    pub uuid: Uuid,

    /// The payment gateway's reference
    pub reference: String,

    /// Decimal amount, e.g. `"39.98"`
    pub amount: String,

    /// Gateway verdict: `pending`, `completed`, `failed` or `refunded`
    pub status: String,

    /// The date and time the payment was recorded
    pub created_at: String,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(payment: PaymentRecord) -> Self {
        Self {
            uuid: payment.uuid.into_uuid(),
            amount: payment.amount.to_string(),
            status: payment.status.to_string(),
            created_at: payment.created_at.to_string(),
            reference: payment.reference,
        }
    }
}
