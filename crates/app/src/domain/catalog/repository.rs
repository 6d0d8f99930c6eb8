//! Catalog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::catalog::{
    data::{NewProduct, NewVariation},
    records::{ProductRecord, ProductUuid, VariationRecord, VariationUuid},
};

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const CREATE_VARIATION_SQL: &str = include_str!("sql/create_variation.sql");
const GET_VARIATION_SQL: &str = include_str!("sql/get_variation.sql");
const LIST_VARIATIONS_SQL: &str = include_str!("sql/list_variations.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.sku.trim())
            .bind(product.name)
            .fetch_one(&mut **tx)
            .await
    }

    /// Inserts the variation with zero stock; initial stock is received
    /// through the inventory ledger.
    pub(crate) async fn create_variation(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: &NewVariation,
    ) -> Result<VariationRecord, sqlx::Error> {
        query_as::<Postgres, VariationRecord>(CREATE_VARIATION_SQL)
            .bind(variation.uuid.into_uuid())
            .bind(variation.product_uuid.into_uuid())
            .bind(variation.color.trim())
            .bind(variation.size.trim())
            .bind(variation.original_price)
            .bind(variation.discount_price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_variation(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: VariationUuid,
    ) -> Result<VariationRecord, sqlx::Error> {
        query_as::<Postgres, VariationRecord>(GET_VARIATION_SQL)
            .bind(variation.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_variations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<VariationRecord>, sqlx::Error> {
        query_as::<Postgres, VariationRecord>(LIST_VARIATIONS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            sku: row.try_get("sku")?,
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for VariationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: VariationUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            color: row.try_get("color")?,
            size: row.try_get("size")?,
            original_price: row.try_get("original_price")?,
            discount_price: row.try_get("discount_price")?,
            stock: row.try_get("stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
