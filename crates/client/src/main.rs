//! `dex` command-line client.
//!
//! Main entry point over the creature statistics store.
//!
//! # Architecture
//!
//! This binary is the composition root:
//! 1. Configuration from the environment (`.env` supported)
//! 2. Logging via `tracing-subscriber`
//! 3. Store loading behind the readiness gate
//! 4. One query, printed as pretty JSON
//!
//! # Examples
//!
//! ```bash
//! cargo run -p dex-client -- show bulbasaur
//! cargo run -p dex-client -- compare pikachu raichu
//! DEX_DATA_DIR=/srv/dex cargo run -p dex-client -- profile charizard
//! ```

use anyhow::Result;
use clap::Parser;

use client_bootstrap::{StoreBuilder, StoreConfig, StoreGate};
use dex_client::{Command, dirs, logging};

/// Browse the creature statistics dataset
#[derive(Parser)]
#[command(name = "dex")]
#[command(about = "Query the creature statistics store", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to the platform log directory (overridden by DEX_LOG_DIR)
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 1. Load configuration from environment
    let config = StoreConfig::from_env();

    // 2. Setup logging
    let log_dir = config
        .log_dir
        .clone()
        .or_else(|| cli.log_file.then(dirs::log_dir));
    let _guard = logging::setup_logging(log_dir.as_deref())?;

    tracing::debug!(?config, "configuration loaded");

    // 3. Load the store; failures abort before any query runs
    let gate = StoreGate::new();
    StoreBuilder::new(config).initialize(&gate)?;
    let store = gate.store()?;

    // 4. Run the query
    let output = cli.command.render(store)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
