//! Order Data

use crate::domain::{catalog::records::VariationUuid, orders::records::OrderUuid};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Client supplied order UUID.
    pub uuid: OrderUuid,

    /// Gateway reference of a payment already recorded for the customer.
    pub payment_reference: String,

    pub variation_uuid: VariationUuid,
    pub quantity: i64,
}
