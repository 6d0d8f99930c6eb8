//! Payments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    customers::records::CustomerUuid,
    payments::{
        data::NewPayment,
        records::{PaymentRecord, PaymentStatus, PaymentUuid},
    },
};

const CREATE_PAYMENT_SQL: &str = include_str!("sql/create_payment.sql");
const FIND_PAYMENT_BY_REFERENCE_SQL: &str = include_str!("sql/find_payment_by_reference.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        payment: NewPayment,
    ) -> Result<PaymentRecord, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(CREATE_PAYMENT_SQL)
            .bind(payment.uuid.into_uuid())
            .bind(customer.into_uuid())
            .bind(payment.reference)
            .bind(payment.amount)
            .bind(payment.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Looks a payment up by gateway reference, scoped to its owner.
    pub(crate) async fn find_payment_by_reference(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        reference: &str,
    ) -> Result<Option<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(FIND_PAYMENT_BY_REFERENCE_SQL)
            .bind(reference)
            .bind(customer.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: PaymentUuid::from_uuid(row.try_get("uuid")?),
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            reference: row.try_get("reference")?,
            amount: row.try_get("amount")?,
            status: status
                .parse::<PaymentStatus>()
                .map_err(|error| sqlx::Error::ColumnDecode {
                    index: "status".to_string(),
                    source: Box::new(error),
                })?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
