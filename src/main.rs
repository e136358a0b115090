//! Contact Book - Main entry point
//!
//! Runs the assistant bot on the terminal. Logs go to stderr so they never
//! mix with the conversation on stdout.

use anyhow::Result;
use contact_book::{run_bot, AddressBook, AssistantBot, Config, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting assistant bot (birthday window: {} days)",
        config.birthday_window_days
    );

    let mut bot = AssistantBot::new(AddressBook::new(), Box::new(SystemClock), &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_bot(&mut bot, stdin.lock(), stdout.lock()) {
        error!("Console I/O failed: {}", e);
        return Err(e.into());
    }

    info!("Assistant bot shutdown complete");
    Ok(())
}
