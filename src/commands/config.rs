//! Config subcommands handler

use anyhow::Result;

use folio::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Write the default configuration, leaving an existing file untouched.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    Config::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Print where the config file is (or would be) read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
