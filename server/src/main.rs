//! Sohosai Delivery Preview - Main Entry Point
//!
//! Plans delivery of a batch of notices and forms against a roster and prints
//! the report as JSON.

use anyhow::{Context, Result};
use tracing::info;

use sohosai_server::{config, delivery, directory::RosterDirectory};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sohosai_server=info".into()),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Sohosai delivery preview"
    );

    let directory = RosterDirectory::from_json_file(&config.roster_path)?;
    let items = delivery::load_items(&config.items_path)?;
    let now = config.now();

    let report = delivery::plan_all(&items, now, &directory)?;

    info!(
        items = report.items.len(),
        deliveries = report.deliveries.len(),
        held = report.held,
        "Delivery preview complete"
    );

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");

    Ok(())
}
