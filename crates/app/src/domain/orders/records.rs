//! Order Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        catalog::records::VariationUuid, customers::records::CustomerUuid,
        orders::status::OrderStatus, payments::records::PaymentUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,

    /// Monotonic number assigned by storage on insert.
    pub sequence_number: i64,

    pub customer_uuid: CustomerUuid,
    pub payment_uuid: PaymentUuid,
    pub variation_uuid: VariationUuid,
    pub quantity: i64,

    /// Unit price at the time the order was placed.
    pub unit_price: Decimal,

    /// `unit_price * quantity`.
    pub total_amount: Decimal,

    pub status: OrderStatus,
    pub status_changed_at: Timestamp,
    pub created_at: Timestamp,
}
