//! Customer Data

use crate::domain::customers::records::CustomerUuid;

/// New Customer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    /// UUID to assign to the customer row.
    pub uuid: CustomerUuid,

    /// Unique contact email.
    pub email: String,

    /// Display name.
    pub name: String,
}
