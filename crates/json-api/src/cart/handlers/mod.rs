//! Cart Handlers

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod remove;
pub(crate) mod set;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::carts::records::CartItemRecord;

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The variation on this cart line
    pub variation_uuid: Uuid,

    /// Units of the variation in the cart
    pub quantity: i64,

    /// The date and time the line was first added
    pub added_at: String,

    /// The date and time the line was last changed
    pub updated_at: String,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        Self {
            variation_uuid: item.variation_uuid.into_uuid(),
            quantity: item.quantity,
            added_at: item.added_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

/// Renders the surviving cart line, or `204 No Content` when the change
/// removed it.
fn render_item(item: Option<CartItemRecord>, res: &mut Response) {
    match item {
        Some(item) => res.render(Json(CartItemResponse::from(item))),
        None => {
            res.status_code(StatusCode::NO_CONTENT);
        }
    }
}
