use clap::{Args, Subcommand};

mod product;
mod variation;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    #[command(subcommand)]
    Product(product::ProductSubcommand),

    #[command(subcommand)]
    Variation(variation::VariationSubcommand),
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Product(command) => product::run(command).await,
        CatalogSubcommand::Variation(command) => variation::run(command).await,
    }
}
