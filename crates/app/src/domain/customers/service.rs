//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::customers::{
        data::NewCustomer,
        errors::CustomersServiceError,
        records::{CustomerRecord, CustomerUuid},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_customer(&mut tx, customer).await?;

        tx.commit().await?;

        info!(customer_uuid = %created.uuid, "created customer");

        Ok(created)
    }

    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
/// Customer directory operations.
pub trait CustomersService: Send + Sync {
    /// Creates a new customer.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Retrieves a single customer.
    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_customer(email: &str) -> NewCustomer {
        NewCustomer {
            uuid: CustomerUuid::new(),
            email: email.to_string(),
            name: "Ada".to_string(),
        }
    }

    #[tokio::test]
    async fn create_customer_returns_correct_uuid_and_email() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = new_customer("ada@example.com");
        let uuid = customer.uuid;

        let created = ctx.customers.create_customer(customer).await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.email, "ada@example.com");

        let fetched = ctx.customers.get_customer(uuid).await?;

        assert_eq!(fetched.uuid, uuid);

        Ok(())
    }

    #[tokio::test]
    async fn create_customer_duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("dup@example.com"))
            .await?;

        let result = ctx
            .customers
            .create_customer(new_customer("dup@example.com"))
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_customer_blank_email_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx.customers.create_customer(new_customer("   ")).await;

        assert!(
            matches!(result, Err(CustomersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_customer_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.customers.get_customer(CustomerUuid::new()).await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
