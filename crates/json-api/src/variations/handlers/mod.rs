//! Variation Handlers

pub(crate) mod get;
pub(crate) mod index;

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::catalog::records::VariationRecord;

/// Variation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariationResponse {
    /// The unique identifier of the variation
    pub uuid: Uuid,

    /// The product this is a variation of
    pub product_uuid: Uuid,

    pub color: String,

    pub size: String,

    /// Decimal price, e.g. `"24.99"`
    pub original_price: String,

    /// Decimal discounted price, when the variation is on sale
    pub discount_price: Option<String>,

    /// Price charged per unit
    pub unit_price: String,

    /// Units currently in stock
    pub stock: i64,

    /// The date and time the variation was created
    pub created_at: String,

    /// The date and time the variation was last updated
    pub updated_at: String,
}

impl From<VariationRecord> for VariationResponse {
    fn from(variation: VariationRecord) -> Self {
        Self {
            uuid: variation.uuid.into_uuid(),
            product_uuid: variation.product_uuid.into_uuid(),
            unit_price: variation.unit_price().to_string(),
            original_price: variation.original_price.to_string(),
            discount_price: variation.discount_price.as_ref().map(Decimal::to_string),
            color: variation.color,
            size: variation.size,
            stock: variation.stock,
            created_at: variation.created_at.to_string(),
            updated_at: variation.updated_at.to_string(),
        }
    }
}
