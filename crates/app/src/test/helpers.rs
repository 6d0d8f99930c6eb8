//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        catalog::{
            CatalogService, CatalogServiceError,
            data::{NewProduct, NewVariation},
            records::{ProductRecord, ProductUuid, VariationRecord, VariationUuid},
        },
        customers::records::CustomerUuid,
        payments::{
            PaymentsService, PaymentsServiceError,
            data::NewPayment,
            records::{PaymentRecord, PaymentStatus, PaymentUuid},
        },
    },
    test::TestContext,
};

fn money(amount: &str) -> Decimal {
    amount.parse().expect("test amounts should be valid decimals")
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    sku: &str,
) -> Result<ProductRecord, CatalogServiceError> {
    ctx.catalog
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            sku: sku.to_string(),
            name: format!("Product {sku}"),
        })
        .await
}

/// Creates a product with a single variation priced at `price` holding
/// `stock` units.
pub(crate) async fn create_variation(
    ctx: &TestContext,
    price: &str,
    stock: i64,
) -> Result<VariationRecord, CatalogServiceError> {
    let uuid = VariationUuid::new();
    let product = create_product(ctx, &format!("SKU-{uuid}")).await?;

    ctx.catalog
        .create_variation(NewVariation {
            uuid,
            product_uuid: product.uuid,
            color: "black".to_string(),
            size: "M".to_string(),
            original_price: money(price),
            discount_price: None,
            initial_stock: stock,
        })
        .await
}

pub(crate) async fn record_payment(
    ctx: &TestContext,
    customer: CustomerUuid,
    reference: &str,
    amount: &str,
) -> Result<PaymentRecord, PaymentsServiceError> {
    ctx.payments
        .record_payment(
            customer,
            NewPayment {
                uuid: PaymentUuid::new(),
                reference: reference.to_string(),
                amount: money(amount),
                status: PaymentStatus::Completed,
            },
        )
        .await
}
