//! Catalog Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Variation UUID
pub type VariationUuid = TypedUuid<VariationRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub sku: String,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Variation Record
///
/// A sellable `(product, color, size)` combination with its prices and the
/// stock currently held by the inventory ledger.
#[derive(Debug, Clone)]
pub struct VariationRecord {
    pub uuid: VariationUuid,
    pub product_uuid: ProductUuid,
    pub color: String,
    pub size: String,
    pub original_price: Decimal,
    pub discount_price: Option<Decimal>,
    pub stock: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VariationRecord {
    /// Price charged per unit: the discount price when one is set.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.original_price)
    }
}
