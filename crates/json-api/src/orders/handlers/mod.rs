//! Order Handlers

pub(crate) mod checkout;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod status;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::orders::records::OrderRecord;

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Monotonic order number
    pub sequence_number: i64,

    /// The payment the order was placed against
    pub payment_uuid: Uuid,

    /// The ordered variation
    pub variation_uuid: Uuid,

    pub quantity: i64,

    /// Decimal unit price at the time of ordering
    pub unit_price: String,

    /// Decimal `unit_price * quantity`
    pub total_amount: String,

    /// `processing`, `shipped`, `delivered` or `cancelled`
    pub status: String,

    /// The date and time of the last status change
    pub status_changed_at: String,

    /// The date and time the order was placed
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            sequence_number: order.sequence_number,
            payment_uuid: order.payment_uuid.into_uuid(),
            variation_uuid: order.variation_uuid.into_uuid(),
            quantity: order.quantity,
            unit_price: order.unit_price.to_string(),
            total_amount: order.total_amount.to_string(),
            status: order.status.to_string(),
            status_changed_at: order.status_changed_at.to_string(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Orders Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<OrderRecord>> for OrdersResponse {
    fn from(orders: Vec<OrderRecord>) -> Self {
        Self {
            orders: orders.into_iter().map(OrderResponse::from).collect(),
        }
    }
}
