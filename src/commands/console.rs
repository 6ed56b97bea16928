//! Interactive console handler

use anyhow::Result;

use folio::console::{Console, FileStore, SystemNavigator};
use folio::tui::{ConsoleApp, Theme};
use folio::{Config, Locale};

/// Open the console on persisted history and run until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, lang: Option<Locale>) -> Result<()> {
    let data_dir = config.data_dir()?;
    let console = Console::new(
        config.locale(lang),
        config.timing(),
        Box::new(FileStore::new(data_dir)),
        Box::new(SystemNavigator::new(config.links.open_external)),
    );

    let mut app = ConsoleApp::new(console, Theme::by_name(&config.ui.theme));
    app.run()
}
