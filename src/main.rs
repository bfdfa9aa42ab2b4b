//! Contact Book - Main entry point
//!
//! Reads commands from stdin one line at a time and prints each reply to
//! stdout until a farewell phrase or end of input.

use anyhow::Result;
use contact_book::{Config, Session};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout carries command replies)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut session = Session::from_config(&config);
    info!("Contact book session started (page size {})", config.page_size);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while session.is_running() {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            info!("End of input");
            break;
        };
        let line = line?;

        let outcome = session.respond(&line);
        if !outcome.text().is_empty() {
            writeln!(stdout, "{}", outcome.text())?;
        }
    }

    info!("Contact book session finished");
    Ok(())
}
