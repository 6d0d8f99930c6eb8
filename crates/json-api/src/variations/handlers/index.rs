//! Product Variations Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    variations::{errors::into_status_error, handlers::VariationResponse},
};

/// Variations Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariationsResponse {
    /// The product's variations, ordered by color then size
    pub variations: Vec<VariationResponse>,
}

/// Product Variations Index Handler
///
/// Returns every variation of a product.
#[endpoint(
    tags("catalog"),
    summary = "List Product Variations",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<VariationsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let variations = state
        .app
        .catalog
        .list_variations(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(VariationsResponse {
        variations: variations.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use emporium_app::domain::catalog::{MockCatalogService, records::VariationUuid};

    use crate::test_helpers::{Mocks, customer_service, make_variation};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        customer_service(
            Mocks {
                catalog,
                ..Mocks::default()
            },
            Router::with_path("products/{product}/variations").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_variations_in_service_order() -> TestResult {
        let product = Uuid::now_v7();
        let first = VariationUuid::from_uuid(Uuid::now_v7());
        let second = VariationUuid::from_uuid(Uuid::now_v7());

        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_variations()
            .once()
            .withf(move |p| p.into_uuid() == product)
            .return_once(move |_| Ok(vec![make_variation(first), make_variation(second)]));

        let response: VariationsResponse =
            TestClient::get(format!("http://example.com/products/{product}/variations"))
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        let uuids: Vec<Uuid> = response.variations.iter().map(|v| v.uuid).collect();

        assert_eq!(uuids, vec![first.into_uuid(), second.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_product_returns_empty_list() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_variations()
            .once()
            .return_once(|_| Ok(vec![]));

        let response: VariationsResponse = TestClient::get(format!(
            "http://example.com/products/{}/variations",
            Uuid::now_v7()
        ))
        .send(&make_service(catalog))
        .await
        .take_json()
        .await?;

        assert!(response.variations.is_empty(), "expected no variations");

        Ok(())
    }
}
