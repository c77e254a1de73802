//! Picklist - PDF pick list extraction tool.
//!
//! Scans warehouse pick list PDFs for item codes and quantities, serving the
//! results over a small web UI or printing them from the command line.

mod classify;
mod cli;
mod config;
mod extract;
mod models;
mod server;
mod services;
mod storage;
mod utils;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "picklist=info"
    } else {
        "picklist=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
