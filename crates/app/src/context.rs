//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        catalog::{CatalogService, PgCatalogService},
        inventory::{InventoryService, PgInventoryService},
        orders::{OrdersService, PgOrdersService},
        payments::{PaymentsService, PgPaymentsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// The runtime role would silently bypass row-level security.
    #[error("database role is a superuser or has BYPASSRLS; connect as the app role")]
    RlsBypassed,
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub catalog: Arc<dyn CatalogService>,
    pub inventory: Arc<dyn InventoryService>,
    pub payments: Arc<dyn PaymentsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails or the
    /// connected role bypasses row-level security.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if database::current_role_bypasses_rls(&pool)
            .await
            .map_err(AppInitError::Database)?
        {
            return Err(AppInitError::RlsBypassed);
        }

        let db = Db::new(pool.clone());

        Ok(Self {
            auth: Arc::new(PgAuthService::new(pool)),
            catalog: Arc::new(PgCatalogService::new(db.clone())),
            inventory: Arc::new(PgInventoryService::new(db.clone())),
            payments: Arc::new(PgPaymentsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db)),
        })
    }
}
