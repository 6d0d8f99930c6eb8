use clap::{Args, Subcommand};
use emporium_app::{
    database::{self, Db},
    domain::{
        catalog::records::VariationUuid,
        inventory::{InventoryService, PgInventoryService},
    },
};

#[derive(Debug, Args)]
pub(crate) struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
enum InventorySubcommand {
    /// Receive units of stock for a variation
    Restock(RestockArgs),
}

#[derive(Debug, Args)]
pub(crate) struct RestockArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    variation_uuid: VariationUuid,

    /// Units received; must be positive
    #[arg(long)]
    quantity: i64,
}

pub(crate) async fn run(command: InventoryCommand) -> Result<(), String> {
    match command.command {
        InventorySubcommand::Restock(args) => restock(args).await,
    }
}

async fn restock(args: RestockArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let stock = PgInventoryService::new(Db::new(pool))
        .restock(args.variation_uuid, args.quantity)
        .await
        .map_err(|error| format!("failed to restock variation: {error}"))?;

    println!("variation_uuid: {}", args.variation_uuid);
    println!("stock: {stock}");

    Ok(())
}
