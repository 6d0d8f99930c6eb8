use clap::{Args, Subcommand};
use emporium_app::{
    database::{self, Db},
    domain::catalog::{
        CatalogService, PgCatalogService, data::NewProduct, records::ProductUuid,
    },
};

#[derive(Debug, Subcommand)]
pub(crate) enum ProductSubcommand {
    Create(CreateProductArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Unique stock keeping unit
    #[arg(long)]
    sku: String,

    /// Product display name
    #[arg(long)]
    name: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<ProductUuid>,
}

pub(crate) async fn run(command: ProductSubcommand) -> Result<(), String> {
    match command {
        ProductSubcommand::Create(args) => create(args).await,
    }
}

async fn create(args: CreateProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = PgCatalogService::new(Db::new(pool))
        .create_product(NewProduct {
            uuid: args.product_uuid.unwrap_or_default(),
            sku: args.sku,
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_sku: {}", product.sku);

    Ok(())
}
