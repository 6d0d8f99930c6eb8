use clap::{Parser, Subcommand};

mod catalog;
mod customer;
mod db;
mod inventory;
mod token;

#[derive(Debug, Parser)]
#[command(name = "emporium-app", about = "Emporium admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Customer(customer::CustomerCommand),
    Token(token::TokenCommand),
    Catalog(catalog::CatalogCommand),
    Inventory(inventory::InventoryCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Customer(command) => customer::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Catalog(command) => catalog::run(command).await,
            Commands::Inventory(command) => inventory::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
