//! Order coordinator.
//!
//! Places orders against recorded payments. Every placement verifies the
//! payment, reserves stock through the inventory ledger and persists the
//! order in one customer-scoped transaction. When the order row cannot be
//! written after stock was reserved, the reservation is released before the
//! error is returned.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{Connection as _, Postgres, Transaction};
use tracing::{Span, info, warn};

use crate::{
    database::Db,
    domain::{
        carts::repositories::PgCartItemsRepository,
        catalog::{records::VariationUuid, repository::PgCatalogRepository},
        customers::records::CustomerUuid,
        inventory::PgInventoryLedger,
        orders::{
            data::NewOrder,
            errors::OrdersServiceError,
            records::{OrderRecord, OrderUuid},
            repository::{OrderInsert, PgOrdersRepository},
            status::OrderStatus,
        },
        payments::{records::PaymentRecord, repository::PgPaymentsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders: PgOrdersRepository,
    payments: PgPaymentsRepository,
    catalog: PgCatalogRepository,
    cart_items: PgCartItemsRepository,
    ledger: PgInventoryLedger,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            payments: PgPaymentsRepository::new(),
            catalog: PgCatalogRepository::new(),
            cart_items: PgCartItemsRepository::new(),
            ledger: PgInventoryLedger::new(),
        }
    }

    async fn find_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        reference: &str,
    ) -> Result<PaymentRecord, OrdersServiceError> {
        self.payments
            .find_payment_by_reference(tx, customer, reference.trim())
            .await?
            .ok_or(OrdersServiceError::PaymentNotFound)
    }

    /// Reserves stock for one line and writes its order row.
    async fn place_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        payment: &PaymentRecord,
        uuid: OrderUuid,
        variation: VariationUuid,
        quantity: i64,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if quantity <= 0 {
            return Err(OrdersServiceError::InvalidQuantity);
        }

        if self
            .orders
            .order_exists(tx, customer, payment.uuid, variation, quantity)
            .await?
        {
            return Err(OrdersServiceError::DuplicateOrder);
        }

        self.ledger.reserve(tx, variation, quantity).await?;

        let unit_price = self.catalog.get_variation(tx, variation).await?.unit_price();

        let total_amount = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or(OrdersServiceError::InvalidData)?;

        let insert = OrderInsert {
            uuid,
            customer_uuid: customer,
            payment_uuid: payment.uuid,
            variation_uuid: variation,
            quantity,
            unit_price,
            total_amount,
        };

        let mut savepoint = (**tx).begin().await?;

        match self.orders.create_order(&mut savepoint, &insert).await {
            Ok(created) => {
                savepoint.commit().await?;

                Ok(created)
            }
            Err(error) => {
                savepoint.rollback().await?;

                self.ledger.release(tx, variation, quantity).await?;

                warn!(
                    order_uuid = %uuid,
                    variation_uuid = %variation,
                    quantity,
                    "order insert failed; released reserved stock"
                );

                Err(error.into())
            }
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.place_order",
        skip(self, order),
        fields(
            customer_uuid = %customer,
            order_uuid = %order.uuid,
            variation_uuid = %order.variation_uuid,
            quantity = order.quantity,
            payment_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn place_order(
        &self,
        customer: CustomerUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if order.quantity <= 0 {
            return Err(OrdersServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let payment = self
            .find_payment(&mut tx, customer, &order.payment_reference)
            .await?;

        Span::current().record("payment_uuid", tracing::field::display(payment.uuid));

        let created = self
            .place_line(
                &mut tx,
                customer,
                &payment,
                order.uuid,
                order.variation_uuid,
                order.quantity,
            )
            .await?;

        tx.commit().await?;

        info!(
            order_uuid = %created.uuid,
            total_amount = %created.total_amount,
            "placed order"
        );

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.checkout",
        skip(self, payment_reference),
        fields(customer_uuid = %customer, line_count = tracing::field::Empty),
        err
    )]
    async fn checkout(
        &self,
        customer: CustomerUuid,
        payment_reference: &str,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let payment = self
            .find_payment(&mut tx, customer, payment_reference)
            .await?;

        let mut items = self.cart_items.lock_cart_items(&mut tx, customer).await?;

        if items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        Span::current().record("line_count", items.len());

        // Reserve in a stable order so concurrent checkouts lock variation
        // rows in the same sequence.
        items.sort_by_key(|item| item.variation_uuid);

        let mut placed = Vec::with_capacity(items.len());

        for item in &items {
            let order = self
                .place_line(
                    &mut tx,
                    customer,
                    &payment,
                    OrderUuid::new(),
                    item.variation_uuid,
                    item.quantity,
                )
                .await?;

            placed.push(order);
        }

        let ordered: Vec<VariationUuid> = items.iter().map(|item| item.variation_uuid).collect();

        self.cart_items
            .delete_cart_items(&mut tx, customer, &ordered)
            .await?;

        tx.commit().await?;

        info!(order_count = placed.len(), "checked out cart");

        Ok(placed)
    }

    async fn get_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let record = self.orders.get_order(&mut tx, customer, order).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_orders(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let records = self.orders.list_orders(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(records)
    }

    #[tracing::instrument(
        name = "orders.service.update_status",
        skip(self),
        fields(customer_uuid = %customer, order_uuid = %order, status = %status),
        err
    )]
    async fn update_status(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let current = self.orders.lock_order(&mut tx, customer, order).await?;

        if current.status == status {
            tx.commit().await?;

            return Ok(current);
        }

        if !current.status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let updated = self
            .orders
            .update_order_status(&mut tx, customer, order, status)
            .await?;

        if status == OrderStatus::Cancelled {
            self.ledger
                .release(&mut tx, updated.variation_uuid, updated.quantity)
                .await?;
        }

        tx.commit().await?;

        info!(order_uuid = %order, from = %current.status, to = %status, "updated order status");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Places a single-line order against a recorded payment.
    async fn place_order(
        &self,
        customer: CustomerUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Places one order per cart line against a single payment, all or
    /// nothing, and clears the ordered lines from the cart.
    async fn checkout(
        &self,
        customer: CustomerUuid,
        payment_reference: &str,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// The customer's orders, newest first.
    async fn list_orders(&self, customer: CustomerUuid)
    -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Moves an order to `status`. Cancelling returns the ordered quantity to
    /// stock.
    async fn update_status(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
