//! Payment Data

use rust_decimal::Decimal;

use crate::domain::payments::records::{PaymentStatus, PaymentUuid};

/// New Payment Data
///
/// A gateway-verified `(reference, amount, status)` tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub uuid: PaymentUuid,
    pub reference: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
}
