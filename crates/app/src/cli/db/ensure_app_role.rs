use clap::Args;
use emporium_app::database;
use sqlx::{query, query_scalar};

#[derive(Debug, Args)]
pub(crate) struct EnsureAppRoleArgs {
    /// Administrative PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Application runtime role name
    #[arg(long, default_value = "emporium_app")]
    role_name: String,

    /// Application role password
    #[arg(long, env = "APP_DB_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(args: EnsureAppRoleArgs) -> Result<(), String> {
    if args.role_name.trim().is_empty() {
        return Err("role_name cannot be empty".to_string());
    }

    if args.password.trim().is_empty() {
        return Err("password cannot be empty".to_string());
    }

    // Needs an administrative role: CREATE/ALTER ROLE and GRANT.
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|error| format!("failed to start transaction: {error}"))?;

    // Role identifiers cannot be bound as parameters; quote server-side.
    let role_ident: String = query_scalar("SELECT quote_ident($1)")
        .bind(&args.role_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|error| format!("failed to quote role_name: {error}"))?;

    let password_lit: String = query_scalar("SELECT quote_literal($1)")
        .bind(&args.password)
        .fetch_one(&mut *tx)
        .await
        .map_err(|error| format!("failed to quote password: {error}"))?;

    let role_exists: bool =
        query_scalar("SELECT EXISTS (SELECT 1 FROM pg_roles WHERE rolname = $1)")
            .bind(&args.role_name)
            .fetch_one(&mut *tx)
            .await
            .map_err(|error| format!("failed to check role existence: {error}"))?;

    // The JSON API refuses to start as a role that bypasses RLS.
    let verb = if role_exists { "ALTER" } else { "CREATE" };

    let upsert_role_sql = format!(
        "{verb} ROLE {role_ident} LOGIN PASSWORD {password_lit} \
         NOSUPERUSER NOCREATEDB NOCREATEROLE NOREPLICATION NOBYPASSRLS"
    );

    query(&upsert_role_sql)
        .execute(&mut *tx)
        .await
        .map_err(|error| format!("failed to create/update role: {error}"))?;

    let database_ident: String = query_scalar("SELECT quote_ident(current_database())")
        .fetch_one(&mut *tx)
        .await
        .map_err(|error| format!("failed to resolve database name: {error}"))?;

    for sql in database::app_role_grants(&database_ident, &role_ident) {
        query(&sql)
            .execute(&mut *tx)
            .await
            .map_err(|error| format!("failed to apply grant/default privilege `{sql}`: {error}"))?;
    }

    tx.commit()
        .await
        .map_err(|error| format!("failed to commit changes: {error}"))?;

    println!("ensured app role: {}", args.role_name);
    println!("granted access to public schema in current database");

    Ok(())
}
