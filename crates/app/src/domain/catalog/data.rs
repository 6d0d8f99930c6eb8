//! Catalog Data

use rust_decimal::Decimal;

use crate::domain::catalog::records::{ProductUuid, VariationUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub sku: String,
    pub name: String,
}

/// New Variation Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariation {
    pub uuid: VariationUuid,
    pub product_uuid: ProductUuid,
    pub color: String,
    pub size: String,
    pub original_price: Decimal,
    pub discount_price: Option<Decimal>,

    /// Units received into the inventory ledger on creation.
    pub initial_stock: i64,
}
