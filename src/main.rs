//! Contact Book - Main entry point
//!
//! Runs the interactive assistant: reads commands from stdin, prints replies
//! to stdout, and saves the address book on exit.

use anyhow::{bail, Result};
use contact_book::commands::repl;
use contact_book::{Config, JsonFileRepository, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so they never interleave with replies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.address_book_path.display(), "Opening address book");

    let repository = JsonFileRepository::new(&config.address_book_path);
    let mut session = Session::load(Box::new(repository))
        .with_birthday_window(config.birthday_window_days);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if !repl::run(&mut session, stdin.lock(), &mut stdout)? {
        bail!("address book was not saved");
    }

    info!("Contact book shutdown complete");
    Ok(())
}
