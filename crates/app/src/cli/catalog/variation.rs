use clap::{Args, Subcommand};
use emporium_app::{
    database::{self, Db},
    domain::catalog::{
        CatalogService, PgCatalogService,
        data::NewVariation,
        records::{ProductUuid, VariationUuid},
    },
};
use rust_decimal::Decimal;

#[derive(Debug, Subcommand)]
pub(crate) enum VariationSubcommand {
    Create(CreateVariationArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateVariationArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product the variation belongs to
    #[arg(long)]
    product_uuid: ProductUuid,

    #[arg(long)]
    color: String,

    #[arg(long)]
    size: String,

    /// List price, e.g. `24.99`
    #[arg(long)]
    original_price: Decimal,

    /// Optional sale price charged instead of the list price
    #[arg(long)]
    discount_price: Option<Decimal>,

    /// Units on hand when the variation is created
    #[arg(long, default_value_t = 0)]
    stock: i64,

    /// Optional variation UUID; generated when omitted
    #[arg(long)]
    variation_uuid: Option<VariationUuid>,
}

pub(crate) async fn run(command: VariationSubcommand) -> Result<(), String> {
    match command {
        VariationSubcommand::Create(args) => create(args).await,
    }
}

async fn create(args: CreateVariationArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let variation = PgCatalogService::new(Db::new(pool))
        .create_variation(NewVariation {
            uuid: args.variation_uuid.unwrap_or_default(),
            product_uuid: args.product_uuid,
            color: args.color,
            size: args.size,
            original_price: args.original_price,
            discount_price: args.discount_price,
            initial_stock: args.stock,
        })
        .await
        .map_err(|error| format!("failed to create variation: {error}"))?;

    println!("variation_uuid: {}", variation.uuid);
    println!("unit_price: {}", variation.unit_price());
    println!("stock: {}", variation.stock);

    Ok(())
}
