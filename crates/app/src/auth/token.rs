//! API token generation and hashing.
//!
//! Tokens are `em_` followed by 64 lowercase hex characters. Only the SHA-256
//! digest of a token is stored.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "em_";

const API_TOKEN_BODY_CHARS: usize = 64;

/// Generates a new raw API token.
#[must_use]
pub fn generate_api_token() -> String {
    format!(
        "{API_TOKEN_PREFIX}{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

/// Hex encoded SHA-256 digest of the token, as stored.
#[must_use]
pub fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

/// Cheap shape check run before any storage lookup.
#[must_use]
pub fn is_well_formed_api_token(token: &str) -> bool {
    token.strip_prefix(API_TOKEN_PREFIX).is_some_and(|body| {
        body.len() == API_TOKEN_BODY_CHARS
            && body
                .bytes()
                .all(|byte| byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte))
    })
}
