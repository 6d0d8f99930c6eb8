//! Inventory service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        catalog::records::VariationUuid,
        inventory::{errors::InventoryServiceError, ledger::PgInventoryLedger},
    },
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    ledger: PgInventoryLedger,
}

impl PgInventoryService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            ledger: PgInventoryLedger::new(),
        }
    }
}

#[async_trait]
impl InventoryService for PgInventoryService {
    async fn reserve(
        &self,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let remaining = self.ledger.reserve(&mut tx, variation, quantity).await?;

        tx.commit().await?;

        Ok(remaining)
    }

    async fn release(
        &self,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let stock = self.ledger.release(&mut tx, variation, quantity).await?;

        tx.commit().await?;

        Ok(stock)
    }

    #[tracing::instrument(
        name = "inventory.service.restock",
        skip(self),
        fields(variation_uuid = %variation),
        err
    )]
    async fn restock(
        &self,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let stock = self.ledger.release(&mut tx, variation, quantity).await?;

        tx.commit().await?;

        info!(variation_uuid = %variation, stock, "restocked variation");

        Ok(stock)
    }

    async fn stock_level(&self, variation: VariationUuid) -> Result<i64, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let stock = self.ledger.stock_level(&mut tx, variation).await?;

        tx.commit().await?;

        Ok(stock)
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Atomically takes stock, returning the remaining level.
    async fn reserve(
        &self,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError>;

    /// Atomically returns previously reserved stock.
    async fn release(
        &self,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError>;

    /// Receives new stock for a variation.
    async fn restock(
        &self,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError>;

    /// Current stock level.
    async fn stock_level(&self, variation: VariationUuid) -> Result<i64, InventoryServiceError>;
}
