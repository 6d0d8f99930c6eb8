//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    carts::records::CartItemRecord, catalog::records::VariationUuid,
    customers::records::CustomerUuid,
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const LOCK_CART_ITEMS_SQL: &str = include_str!("../sql/lock_cart_items.sql");
const LOCK_CART_ITEM_SQL: &str = include_str!("../sql/lock_cart_item.sql");
const ADD_CART_ITEM_QUANTITY_SQL: &str = include_str!("../sql/add_cart_item_quantity.sql");
const SET_CART_ITEM_QUANTITY_SQL: &str = include_str!("../sql/set_cart_item_quantity.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("../sql/delete_cart_item.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("../sql/delete_cart_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(GET_CART_ITEMS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Reads every line of the cart, holding row locks until the transaction
    /// ends.
    pub(crate) async fn lock_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LOCK_CART_ITEMS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn lock_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        variation: VariationUuid,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LOCK_CART_ITEM_SQL)
            .bind(customer.into_uuid())
            .bind(variation.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Adds `quantity` to the line, creating it when missing.
    pub(crate) async fn add_cart_item_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(ADD_CART_ITEM_QUANTITY_SQL)
            .bind(customer.into_uuid())
            .bind(variation.into_uuid())
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    /// Sets the line's quantity, creating it when missing.
    pub(crate) async fn set_cart_item_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(SET_CART_ITEM_QUANTITY_SQL)
            .bind(customer.into_uuid())
            .bind(variation.into_uuid())
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        variation: VariationUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(customer.into_uuid())
            .bind(variation.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        variations: &[VariationUuid],
    ) -> Result<u64, sqlx::Error> {
        let variations: Vec<Uuid> = variations.iter().map(|v| v.into_uuid()).collect();

        let rows_affected = query(DELETE_CART_ITEMS_SQL)
            .bind(customer.into_uuid())
            .bind(&variations)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            variation_uuid: VariationUuid::from_uuid(row.try_get("variation_uuid")?),
            quantity: row.try_get("quantity")?,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
