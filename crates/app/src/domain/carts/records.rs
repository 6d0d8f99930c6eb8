//! Cart Records

use jiff::Timestamp;

use crate::domain::{catalog::records::VariationUuid, customers::records::CustomerUuid};

/// Cart Record
///
/// Carts are not stored on their own; a customer's cart is the set of their
/// line items.
#[derive(Debug, Clone)]
pub struct CartRecord {
    pub customer_uuid: CustomerUuid,
    pub items: Vec<CartItemRecord>,
}

impl CartRecord {
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Cart Item Record
#[derive(Debug, Clone)]
pub struct CartItemRecord {
    pub customer_uuid: CustomerUuid,
    pub variation_uuid: VariationUuid,
    pub quantity: i64,
    pub added_at: Timestamp,
    pub updated_at: Timestamp,
}
