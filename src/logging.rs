//! Tracing subscriber setup
//!
//! The console owns the terminal, so logs go to a file in the data
//! directory. Filtering follows `FOLIO_LOG` (EnvFilter syntax) and defaults
//! to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "folio.log";

/// Build the filter from `FOLIO_LOG`, falling back to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `<data_dir>/folio.log`.
pub fn init(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");

        // Another test may already own the global subscriber; the file is
        // created before installation either way.
        let _ = init(&data_dir);
        assert!(data_dir.join(LOG_FILE).exists());
    }
}
