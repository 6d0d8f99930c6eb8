//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        catalog::{
            data::{NewProduct, NewVariation},
            errors::CatalogServiceError,
            records::{ProductRecord, ProductUuid, VariationRecord, VariationUuid},
            repository::PgCatalogRepository,
        },
        inventory::PgInventoryLedger,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
    ledger: PgInventoryLedger,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
            ledger: PgInventoryLedger::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    #[tracing::instrument(
        name = "catalog.service.create_product",
        skip(self, product),
        fields(product_uuid = %product.uuid),
        err
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        info!(product_uuid = %created.uuid, sku = %created.sku, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "catalog.service.create_variation",
        skip(self, variation),
        fields(
            product_uuid = %variation.product_uuid,
            variation_uuid = %variation.uuid,
            initial_stock = variation.initial_stock
        ),
        err
    )]
    async fn create_variation(
        &self,
        variation: NewVariation,
    ) -> Result<VariationRecord, CatalogServiceError> {
        if variation.initial_stock < 0 {
            return Err(CatalogServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let mut created = self.repository.create_variation(&mut tx, &variation).await?;

        if variation.initial_stock > 0 {
            created.stock = self
                .ledger
                .release(&mut tx, created.uuid, variation.initial_stock)
                .await?;
        }

        tx.commit().await?;

        info!(
            variation_uuid = %created.uuid,
            stock = created.stock,
            "created variation"
        );

        Ok(created)
    }

    async fn get_variation(
        &self,
        variation: VariationUuid,
    ) -> Result<VariationRecord, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.repository.get_variation(&mut tx, variation).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_variations(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<VariationRecord>, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let records = self.repository.list_variations(&mut tx, product).await?;

        tx.commit().await?;

        Ok(records)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Creates a product.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, CatalogServiceError>;

    /// Creates a variation of an existing product and receives its initial
    /// stock into the inventory ledger.
    async fn create_variation(
        &self,
        variation: NewVariation,
    ) -> Result<VariationRecord, CatalogServiceError>;

    /// Retrieve a single variation.
    async fn get_variation(
        &self,
        variation: VariationUuid,
    ) -> Result<VariationRecord, CatalogServiceError>;

    /// All variations of a product, ordered by color then size.
    async fn list_variations(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<VariationRecord>, CatalogServiceError>;
}
