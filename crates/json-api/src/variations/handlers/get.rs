//! Get Variation Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    variations::{errors::into_status_error, handlers::VariationResponse},
};

/// Get Variation Handler
///
/// Returns a variation with its current price and stock.
#[endpoint(
    tags("catalog"),
    summary = "Get Variation",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Variation found"),
        (status_code = StatusCode::NOT_FOUND, description = "Variation not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "variations.get",
    skip(variation, depot),
    fields(variation_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    variation: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<VariationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let variation = variation.into_inner();

    tracing::Span::current().record("variation_uuid", tracing::field::display(variation));

    let variation = state
        .app
        .catalog
        .get_variation(variation.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(variation.into()))
}
