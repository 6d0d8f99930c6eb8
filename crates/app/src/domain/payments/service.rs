//! Payments service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        customers::records::CustomerUuid,
        payments::{
            data::NewPayment, errors::PaymentsServiceError, records::PaymentRecord,
            repository::PgPaymentsRepository,
        },
    },
};

/// Largest number of fractional digits a stored amount may carry.
const AMOUNT_SCALE: u32 = 2;

#[derive(Debug, Clone)]
pub struct PgPaymentsService {
    db: Db,
    repository: PgPaymentsRepository,
}

impl PgPaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPaymentsRepository::new(),
        }
    }
}

#[async_trait]
impl PaymentsService for PgPaymentsService {
    #[tracing::instrument(
        name = "payments.service.record_payment",
        skip(self, payment),
        fields(
            customer_uuid = %customer,
            payment_uuid = %payment.uuid,
            payment_status = %payment.status
        ),
        err
    )]
    async fn record_payment(
        &self,
        customer: CustomerUuid,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError> {
        let mut payment = payment;

        payment.reference = payment.reference.trim().to_string();

        if payment.reference.is_empty()
            || payment.amount.is_sign_negative()
            || payment.amount.normalize().scale() > AMOUNT_SCALE
        {
            return Err(PaymentsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let record = self
            .repository
            .create_payment(&mut tx, customer, payment)
            .await?;

        tx.commit().await?;

        info!(
            payment_uuid = %record.uuid,
            reference = %record.reference,
            "recorded payment"
        );

        Ok(record)
    }

    async fn lookup_payment(
        &self,
        customer: CustomerUuid,
        reference: &str,
    ) -> Result<PaymentRecord, PaymentsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let record = self
            .repository
            .find_payment_by_reference(&mut tx, customer, reference.trim())
            .await?
            .ok_or(PaymentsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Records a gateway-verified payment. Payments are immutable once
    /// recorded.
    async fn record_payment(
        &self,
        customer: CustomerUuid,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError>;

    /// Finds one of the customer's payments by gateway reference.
    async fn lookup_payment(
        &self,
        customer: CustomerUuid,
        reference: &str,
    ) -> Result<PaymentRecord, PaymentsServiceError>;
}
