//! Snapshot viewer for the token exchange.
//!
//! Reads a JSON snapshot of the exchange state and prints the order book,
//! trade history, account views and price chart derived from it.

mod config;
mod error;
mod print;

use std::{fs::File, io::BufReader, process::exit};

use clap::Parser;
use dex_views::{Market, selector::Selectors, snapshot::Snapshot};
use tracing::{error, info, warn};

use config::{CliConfig, EnvConfig};
use error::Result;

fn main() {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Failed to load .env file: {}", e);
    }

    // Parse environment configuration
    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse environment configuration: {}", e);
            exit(1);
        }
    };

    // Parse CLI arguments
    let cli_config = CliConfig::parse();

    let market = match env_config.to_market() {
        Ok(market) => market,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            exit(1);
        }
    };

    // Set up logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli_config, &market) {
        error!("Failed to show snapshot views: {}", e);
        exit(1);
    }
}

fn run(cli: &CliConfig, market: &Market) -> Result<()> {
    let file = File::open(&cli.snapshot)?;
    let mut snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
    if let Some(account) = cli.account()? {
        snapshot = snapshot.with_account(Some(account));
    }

    info!(
        path = %cli.snapshot.display(),
        orders = snapshot.all_orders().len(),
        fills = snapshot.filled_orders().len(),
        cancellations = snapshot.cancelled_orders().len(),
        account = ?snapshot.account(),
        "Snapshot loaded"
    );
    if !snapshot.contracts_loaded() {
        warn!("Contracts are not loaded in the snapshot");
    }
    if !snapshot.order_book_loaded() {
        warn!("Order collections are not fully loaded, views may be incomplete");
    }

    let selectors = Selectors::new(market).with_interval(cli.interval);
    let views = selectors.views(&snapshot);

    if cli.json {
        println!("{}", print::json(&views, cli.view)?);
    } else {
        print::tables(&views, cli.view, cli.depth, snapshot.account());
    }
    Ok(())
}
