mod catalog;

use artfeed_sources::StoreFilter;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::{Catalog, Source};

#[derive(Debug, Parser)]
#[command(name = "artfeed")]
#[command(about = "List and look up artwork products from the configured catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a product list as JSON
    Products {
        /// Backend to query; both are queried when omitted
        #[arg(long, value_enum)]
        source: Option<Source>,
        /// Restrict Commerce Hub results to one store platform
        #[arg(long, default_value = "all")]
        filter: StoreFilter,
        /// Maximum number of products per backend
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print a single product as JSON
    Product {
        /// Backend to query
        #[arg(long, value_enum)]
        source: Source,
        /// Product id (Commerce Hub) or slug / numeric id (WooCommerce)
        id: String,
    },
    /// Show whether each backend is configured
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = artfeed_core::load_sources_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::from_config(&config)?;
    match cli.command {
        Commands::Products {
            source,
            filter,
            limit,
        } => catalog::run_products(&catalog, source, filter, limit).await?,
        Commands::Product { source, id } => catalog::run_product(&catalog, source, &id).await?,
        Commands::Status => catalog::run_status(&catalog),
    }

    Ok(())
}
