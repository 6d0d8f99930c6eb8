//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::{
    auth::{
        ApiTokenUuid, AuthServiceError, IssuedApiToken, generate_api_token, hash_api_token,
        is_well_formed_api_token, models::NewApiToken, repository::PgAuthRepository,
    },
    domain::customers::records::CustomerUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist or insertion fails.
    pub async fn issue_api_token(
        &self,
        customer: CustomerUuid,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token = generate_api_token();

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: ApiTokenUuid::new(),
                customer_uuid: customer,
                token_hash: hash_api_token(&token),
            })
            .await?;

        Ok(IssuedApiToken { token, metadata })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<CustomerUuid, AuthServiceError> {
        if !is_well_formed_api_token(bearer_token) {
            return Err(AuthServiceError::NotFound);
        }

        self.repository
            .find_customer_by_token_hash(&hash_api_token(bearer_token))
            .await?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the customer it was issued to.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<CustomerUuid, AuthServiceError>;
}
