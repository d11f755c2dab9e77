#![forbid(unsafe_code)]

//! Structured logging setup.
//!
//! While the program runs, the terminal is in raw mode and both stdout
//! and stderr belong to the UI, so log output goes to a file as JSON
//! lines, and only when a path was given. `RULE72_LOG` filters levels
//! with the usual `tracing` directive syntax.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RULE72_LOG";

/// Install the global JSON file subscriber. Without a path this does
/// nothing and every `tracing` macro stays a no-op.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;
    Ok(())
}
