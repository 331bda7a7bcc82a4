mod crawl;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pricewatch_store::PriceStore;

#[derive(Debug, Parser)]
#[command(name = "pricewatch")]
#[command(about = "Cross-retailer price tracking and discrepancy detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract prices for every configured product from every retailer,
    /// then run discrepancy analysis over the accumulated history.
    Crawl {
        /// Products file to use instead of the configured one.
        #[arg(long)]
        products: Option<PathBuf>,
        /// Restrict the run to a single retailer.
        #[arg(long)]
        retailer: Option<String>,
    },
    /// Re-run discrepancy analysis over the stored price history without
    /// crawling.
    Analyze,
    /// Print recorded price discrepancies.
    Report {
        /// Only show discrepancies for this product identifier.
        #[arg(long)]
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pricewatch_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let store = PriceStore::open(&config.data_dir).await?;

    match cli.command {
        Commands::Crawl { products, retailer } => {
            crawl::run_crawl(&config, &store, products.as_deref(), retailer.as_deref()).await?;
        }
        Commands::Analyze => {
            let summary = pricewatch_analysis::run_analysis(
                &store,
                pricewatch_analysis::DISCREPANCY_THRESHOLD_PCT,
            )
            .await?;
            println!(
                "analyzed {} products, found {} discrepancies",
                summary.identifiers_examined, summary.discrepancies_found
            );
        }
        Commands::Report { id } => {
            report::print_discrepancies(&store, id.as_deref()).await;
        }
    }

    Ok(())
}
