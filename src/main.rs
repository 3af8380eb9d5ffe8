//! Address Book - Main entry point
//!
//! This is the main executable for the interactive address book. It wires the
//! terminal to the menu loop over a fresh in-memory contact store.

use address_book::{Config, ContactStore, Menu};
use anyhow::Result;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting the prompts on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        max_input_attempts = config.max_input_attempts,
        "Address book starting"
    );

    let mut store = ContactStore::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), &config);
    menu.run(&mut store)?;

    info!(contacts = store.len(), "Address book shutdown complete");
    Ok(())
}
