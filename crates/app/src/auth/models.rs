//! Auth data models.

use jiff::Timestamp;

use crate::{domain::customers::records::CustomerUuid, uuids::TypedUuid};

/// API Token UUID
pub type ApiTokenUuid = TypedUuid<ApiTokenMetadata>;

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: ApiTokenUuid,
    pub customer_uuid: CustomerUuid,
    pub created_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: ApiTokenUuid,
    pub customer_uuid: CustomerUuid,
    pub token_hash: String,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
