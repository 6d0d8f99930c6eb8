//! Customer Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    /// Unique customer identifier.
    pub uuid: CustomerUuid,

    /// Unique contact email.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
