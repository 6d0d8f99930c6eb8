//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use emporium_app::domain::customers::records::CustomerUuid;

const CUSTOMER_UUID_DEPOT_KEY: &str = "customer_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The authenticated customer, set by the auth middleware.
    fn customer_uuid_or_401(&self) -> Result<CustomerUuid, StatusError>;

    fn insert_customer_uuid(&mut self, customer: CustomerUuid);
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn customer_uuid_or_401(&self) -> Result<CustomerUuid, StatusError> {
        self.get::<CustomerUuid>(CUSTOMER_UUID_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn insert_customer_uuid(&mut self, customer: CustomerUuid) {
        self.insert(CUSTOMER_UUID_DEPOT_KEY, customer);
    }
}
