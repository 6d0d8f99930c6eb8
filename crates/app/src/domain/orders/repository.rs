//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    catalog::records::VariationUuid,
    customers::records::CustomerUuid,
    orders::{
        records::{OrderRecord, OrderUuid},
        status::OrderStatus,
    },
    payments::records::PaymentUuid,
};

const ORDER_EXISTS_SQL: &str = include_str!("sql/order_exists.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LOCK_ORDER_SQL: &str = include_str!("sql/lock_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");

/// Row values for a new order once payment, price and stock are settled.
#[derive(Debug, Clone)]
pub(crate) struct OrderInsert {
    pub(crate) uuid: OrderUuid,
    pub(crate) customer_uuid: CustomerUuid,
    pub(crate) payment_uuid: PaymentUuid,
    pub(crate) variation_uuid: VariationUuid,
    pub(crate) quantity: i64,
    pub(crate) unit_price: Decimal,
    pub(crate) total_amount: Decimal,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn order_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        payment: PaymentUuid,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(ORDER_EXISTS_SQL)
            .bind(customer.into_uuid())
            .bind(payment.into_uuid())
            .bind(variation.into_uuid())
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &OrderInsert,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.customer_uuid.into_uuid())
            .bind(order.payment_uuid.into_uuid())
            .bind(order.variation_uuid.into_uuid())
            .bind(order.quantity)
            .bind(order.unit_price)
            .bind(order.total_amount)
            .bind(OrderStatus::Processing.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Reads the order holding its row lock until the transaction ends.
    pub(crate) async fn lock_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LOCK_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(customer.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            sequence_number: row.try_get("sequence_number")?,
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            payment_uuid: PaymentUuid::from_uuid(row.try_get("payment_uuid")?),
            variation_uuid: VariationUuid::from_uuid(row.try_get("variation_uuid")?),
            quantity: row.try_get("quantity")?,
            unit_price: row.try_get("unit_price")?,
            total_amount: row.try_get("total_amount")?,
            status: status
                .parse::<OrderStatus>()
                .map_err(|error| sqlx::Error::ColumnDecode {
                    index: "status".to_string(),
                    source: Box::new(error),
                })?,
            status_changed_at: row
                .try_get::<SqlxTimestamp, _>("status_changed_at")?
                .to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
