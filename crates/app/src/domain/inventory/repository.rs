//! Inventory Repository

use sqlx::{Postgres, Transaction, query_scalar};

use crate::domain::catalog::records::VariationUuid;

const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");
const INCREMENT_STOCK_SQL: &str = include_str!("sql/increment_stock.sql");
const STOCK_LEVEL_SQL: &str = include_str!("sql/stock_level.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Conditionally takes `quantity` units, returning the remaining stock or
    /// `None` when the variation is missing or short.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<Option<i64>, sqlx::Error> {
        query_scalar::<Postgres, i64>(DECREMENT_STOCK_SQL)
            .bind(variation.into_uuid())
            .bind(quantity)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn increment_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<Option<i64>, sqlx::Error> {
        query_scalar::<Postgres, i64>(INCREMENT_STOCK_SQL)
            .bind(variation.into_uuid())
            .bind(quantity)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn stock_level(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: VariationUuid,
    ) -> Result<Option<i64>, sqlx::Error> {
        query_scalar::<Postgres, i64>(STOCK_LEVEL_SQL)
            .bind(variation.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}
