//! History subcommands handler

use anyhow::{Context, Result};

use folio::console::{storage, FileStore, HISTORY_KEY};
use folio::Config;

fn store(config: &Config) -> Result<FileStore> {
    Ok(FileStore::new(config.data_dir()?))
}

/// Print persisted history, one line per row.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let store = store(config)?;
    let lines = storage::load_history(&store).context("Failed to read console history")?;
    for line in lines.unwrap_or_default() {
        println!("{}", line);
    }
    Ok(())
}

/// Delete persisted history; the next console starts from the banner.
#[cfg(not(tarpaulin_include))]
pub fn handle_clear(config: &Config) -> Result<()> {
    let mut store = store(config)?;
    storage::clear_history(&mut store).context("Failed to clear console history")?;
    tracing::info!("history cleared from the command line");
    println!("History cleared.");
    Ok(())
}

/// Print the file backing history.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config: &Config) -> Result<()> {
    let store = store(config)?;
    println!("{}", store.path_for(HISTORY_KEY).display());
    Ok(())
}
