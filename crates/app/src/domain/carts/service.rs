//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::CartQuantity,
            errors::CartsServiceError,
            records::{CartItemRecord, CartRecord},
            repositories::PgCartItemsRepository,
        },
        catalog::records::VariationUuid,
        customers::records::CustomerUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, customer: CustomerUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let items = self
            .items_repository
            .get_cart_items(&mut tx, customer)
            .await?;

        tx.commit().await?;

        Ok(CartRecord {
            customer_uuid: customer,
            items,
        })
    }

    #[tracing::instrument(
        name = "carts.service.add_or_update",
        skip(self),
        fields(customer_uuid = %customer, variation_uuid = %variation),
        err
    )]
    async fn add_or_update(
        &self,
        customer: CustomerUuid,
        variation: VariationUuid,
        quantity: CartQuantity,
    ) -> Result<Option<CartItemRecord>, CartsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let item = match quantity {
            CartQuantity::Delta(delta) if delta > 0 => Some(
                self.items_repository
                    .add_cart_item_quantity(&mut tx, customer, variation, delta)
                    .await?,
            ),
            CartQuantity::Delta(delta) => {
                let current = self
                    .items_repository
                    .lock_cart_item(&mut tx, customer, variation)
                    .await?;

                match current {
                    Some(current) => {
                        let target = current
                            .quantity
                            .checked_add(delta)
                            .ok_or(CartsServiceError::InvalidData)?;

                        self.apply_quantity(&mut tx, customer, variation, target)
                            .await?
                    }
                    None => None,
                }
            }
            CartQuantity::Absolute(target) => {
                self.apply_quantity(&mut tx, customer, variation, target)
                    .await?
            }
        };

        tx.commit().await?;

        debug!(
            quantity = item.as_ref().map_or(0, |item| item.quantity),
            "updated cart line"
        );

        Ok(item)
    }

    async fn remove_item(
        &self,
        customer: CustomerUuid,
        variation: VariationUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, customer, variation)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

impl PgCartsService {
    /// Sets the line to `target`, removing it when the quantity is not
    /// positive.
    async fn apply_quantity(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        customer: CustomerUuid,
        variation: VariationUuid,
        target: i64,
    ) -> Result<Option<CartItemRecord>, CartsServiceError> {
        if target <= 0 {
            self.items_repository
                .delete_cart_item(tx, customer, variation)
                .await?;

            return Ok(None);
        }

        let item = self
            .items_repository
            .set_cart_item_quantity(tx, customer, variation, target)
            .await?;

        Ok(Some(item))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The customer's cart lines, oldest first.
    async fn get_cart(&self, customer: CustomerUuid) -> Result<CartRecord, CartsServiceError>;

    /// Adjusts or replaces a line's quantity. Returns `None` when the
    /// resulting quantity is not positive and the line was removed.
    async fn add_or_update(
        &self,
        customer: CustomerUuid,
        variation: VariationUuid,
        quantity: CartQuantity,
    ) -> Result<Option<CartItemRecord>, CartsServiceError>;

    /// Removes a line from the cart.
    async fn remove_item(
        &self,
        customer: CustomerUuid,
        variation: VariationUuid,
    ) -> Result<(), CartsServiceError>;
}
