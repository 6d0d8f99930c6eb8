//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, query, query_scalar};

use crate::domain::customers::records::CustomerUuid;

/// SQL used to set the customer context for row-level security.
pub const SET_CUSTOMER_CONTEXT_SQL: &str =
    "SELECT set_config('app.current_customer_uuid', $1, true)";

const ROLE_BYPASSES_RLS_SQL: &str =
    "SELECT rolsuper OR rolbypassrls FROM pg_roles WHERE rolname = current_user";

/// Handle used by services to open units of work.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction that is not scoped to a customer.
    ///
    /// Used for catalog and inventory administration, which touch no
    /// customer-owned rows.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction and set customer context for RLS policies.
    ///
    /// The context is transaction-local, so it is cleared on commit or
    /// rollback and never leaks onto a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting customer context fails.
    pub async fn begin_customer_transaction(
        &self,
        customer: CustomerUuid,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_CUSTOMER_CONTEXT_SQL)
            .bind(customer.into_uuid().to_string())
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Whether the connected role is a superuser or otherwise bypasses RLS.
///
/// # Errors
///
/// Returns an error if the role lookup fails.
pub async fn current_role_bypasses_rls(pool: &PgPool) -> Result<bool, sqlx::Error> {
    query_scalar(ROLE_BYPASSES_RLS_SQL).fetch_one(pool).await
}

/// Statements granting the runtime role access to existing and future
/// objects in the `public` schema. Both identifiers must already be quoted.
#[must_use]
pub fn app_role_grants(database_ident: &str, role_ident: &str) -> [String; 6] {
    [
        format!("GRANT CONNECT ON DATABASE {database_ident} TO {role_ident}"),
        format!("GRANT USAGE ON SCHEMA public TO {role_ident}"),
        format!(
            "GRANT SELECT, INSERT, UPDATE, DELETE ON ALL TABLES IN SCHEMA public TO {role_ident}"
        ),
        format!("GRANT USAGE, SELECT, UPDATE ON ALL SEQUENCES IN SCHEMA public TO {role_ident}"),
        format!(
            "ALTER DEFAULT PRIVILEGES IN SCHEMA public \
             GRANT SELECT, INSERT, UPDATE, DELETE ON TABLES TO {role_ident}"
        ),
        format!(
            "ALTER DEFAULT PRIVILEGES IN SCHEMA public \
             GRANT USAGE, SELECT, UPDATE ON SEQUENCES TO {role_ident}"
        ),
    ]
}
