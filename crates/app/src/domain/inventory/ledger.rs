//! Inventory Ledger
//!
//! Owns the per-variation stock counters. Every method runs inside a caller
//! supplied transaction so reservations compose with the order placement unit
//! of work; nothing here commits.

use sqlx::{Postgres, Transaction};
use tracing::debug;

use crate::domain::{
    catalog::records::VariationUuid,
    inventory::{errors::InventoryServiceError, repository::PgInventoryRepository},
};

#[derive(Debug, Clone, Default)]
pub struct PgInventoryLedger {
    repository: PgInventoryRepository,
}

impl PgInventoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: PgInventoryRepository::new(),
        }
    }

    /// Takes `quantity` units of stock, returning what remains.
    ///
    /// The decrement is a single conditional update, so concurrent
    /// reservations on the same variation serialize on its row lock and stock
    /// never goes negative. On failure the stock is left untouched.
    ///
    /// # Errors
    ///
    /// [`InventoryServiceError::InvalidQuantity`] for non-positive quantities,
    /// [`InventoryServiceError::NotFound`] for unknown variations and
    /// [`InventoryServiceError::InsufficientStock`] when the variation is short.
    #[tracing::instrument(
        name = "inventory.ledger.reserve",
        skip(self, tx),
        fields(variation_uuid = %variation),
        err
    )]
    pub async fn reserve(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError> {
        if quantity <= 0 {
            return Err(InventoryServiceError::InvalidQuantity);
        }

        if let Some(remaining) = self
            .repository
            .decrement_stock(tx, variation, quantity)
            .await?
        {
            debug!(remaining, "reserved stock");

            return Ok(remaining);
        }

        match self.repository.stock_level(tx, variation).await? {
            Some(available) => Err(InventoryServiceError::InsufficientStock {
                requested: quantity,
                available,
            }),
            None => Err(InventoryServiceError::NotFound),
        }
    }

    /// Returns `quantity` units to stock, returning the new level.
    ///
    /// # Errors
    ///
    /// [`InventoryServiceError::InvalidQuantity`] for non-positive quantities
    /// and [`InventoryServiceError::NotFound`] for unknown variations.
    #[tracing::instrument(
        name = "inventory.ledger.release",
        skip(self, tx),
        fields(variation_uuid = %variation),
        err
    )]
    pub async fn release(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<i64, InventoryServiceError> {
        if quantity <= 0 {
            return Err(InventoryServiceError::InvalidQuantity);
        }

        let stock = self
            .repository
            .increment_stock(tx, variation, quantity)
            .await?
            .ok_or(InventoryServiceError::NotFound)?;

        debug!(stock, "released stock");

        Ok(stock)
    }

    /// Current stock for the variation.
    ///
    /// # Errors
    ///
    /// [`InventoryServiceError::NotFound`] for unknown variations.
    pub async fn stock_level(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variation: VariationUuid,
    ) -> Result<i64, InventoryServiceError> {
        self.repository
            .stock_level(tx, variation)
            .await?
            .ok_or(InventoryServiceError::NotFound)
    }
}
