//! Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Variation not found"),
        CatalogServiceError::InvalidReference => {
            StatusError::not_found().brief("Product not found")
        }
        CatalogServiceError::AlreadyExists => {
            StatusError::conflict().brief("Catalog entry already exists")
        }
        CatalogServiceError::MissingRequiredData | CatalogServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid catalog request")
        }
        CatalogServiceError::Sql(source) => {
            error!("catalog storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
