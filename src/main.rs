use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod actions;
mod cli;
mod config;
mod conversation;
mod page_extractor;
mod website_finder;

use config::{load_config, Config};
use conversation::Result;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("company_scraper={}", config.logging.level)
                    .parse()
                    .unwrap(),
            ),
        )
        .init();

    // Run the prompt loop with graceful shutdown
    tokio::select! {
        result = cli::run(config) => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
