//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use emporium_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::MockCartsService,
        catalog::{
            MockCatalogService,
            records::{ProductUuid, VariationRecord, VariationUuid},
        },
        customers::records::CustomerUuid,
        inventory::MockInventoryService,
        orders::{
            MockOrdersService, OrderStatus,
            records::{OrderRecord, OrderUuid},
        },
        payments::{
            MockPaymentsService,
            records::{PaymentRecord, PaymentStatus, PaymentUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_UUID: CustomerUuid = CustomerUuid::from_uuid(Uuid::nil());

/// Service mocks backing a test [`State`]. Any mock left at its default
/// rejects every call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) auth: MockAuthService,
    pub(crate) catalog: MockCatalogService,
    pub(crate) inventory: MockInventoryService,
    pub(crate) payments: MockPaymentsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            catalog: Arc::new(self.catalog),
            inventory: Arc::new(self.inventory),
            payments: Arc::new(self.payments),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
        })
    }
}

#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_customer_uuid(TEST_CUSTOMER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// A service that treats every request as coming from
/// [`TEST_CUSTOMER_UUID`].
pub(crate) fn customer_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_customer)
            .push(route),
    )
}

pub(crate) fn make_variation(uuid: VariationUuid) -> VariationRecord {
    VariationRecord {
        uuid,
        product_uuid: ProductUuid::from_uuid(Uuid::nil()),
        color: "red".to_string(),
        size: "M".to_string(),
        original_price: Decimal::new(2499, 2),
        discount_price: Some(Decimal::new(1999, 2)),
        stock: 7,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_payment(reference: &str) -> PaymentRecord {
    PaymentRecord {
        uuid: PaymentUuid::from_uuid(Uuid::now_v7()),
        customer_uuid: TEST_CUSTOMER_UUID,
        reference: reference.to_string(),
        amount: Decimal::new(3998, 2),
        status: PaymentStatus::Completed,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        uuid,
        sequence_number: 1,
        customer_uuid: TEST_CUSTOMER_UUID,
        payment_uuid: PaymentUuid::from_uuid(Uuid::nil()),
        variation_uuid: VariationUuid::from_uuid(Uuid::nil()),
        quantity: 2,
        unit_price: Decimal::new(1999, 2),
        total_amount: Decimal::new(3998, 2),
        status,
        status_changed_at: Timestamp::UNIX_EPOCH,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// A storage failure that handlers must hide behind a 500.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}
