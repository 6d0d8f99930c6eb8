use clap::Args;
use emporium_app::{
    database::{self, Db},
    domain::customers::{
        CustomersService, PgCustomersService, data::NewCustomer, records::CustomerUuid,
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateCustomerArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Customer email address
    #[arg(long)]
    email: String,

    /// Customer display name
    #[arg(long)]
    name: String,

    /// Optional customer UUID; generated when omitted
    #[arg(long)]
    customer_uuid: Option<CustomerUuid>,
}

pub(crate) async fn run(args: CreateCustomerArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCustomersService::new(Db::new(pool));

    let customer = service
        .create_customer(NewCustomer {
            uuid: args.customer_uuid.unwrap_or_default(),
            email: args.email,
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create customer: {error}"))?;

    println!("customer_uuid: {}", customer.uuid);
    println!("customer_email: {}", customer.email);

    Ok(())
}
