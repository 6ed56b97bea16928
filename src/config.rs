//! Configuration management
//!
//! Configuration lives in `config.toml` under the platform config directory
//! (`~/.config/folio/` on Linux) or under `$FOLIO_HOME` when that is set.
//! A missing file means defaults; every field has a serde default so
//! partial files load fine.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::console::Timing;
use crate::locale::Locale;

/// Environment variable that relocates both config and data.
pub const HOME_ENV: &str = "FOLIO_HOME";

const APP_DIR: &str = "folio";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub console: ConsoleConfig,
    pub links: LinksConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
}

/// Console behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Fixed locale; detected from the environment when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Delay after each typed character, in milliseconds
    pub char_delay_ms: u64,
    /// Pause between typed lines, in milliseconds
    pub line_delay_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            locale: None,
            char_delay_ms: Timing::DEFAULT_CHAR_DELAY_MS,
            line_delay_ms: Timing::DEFAULT_LINE_DELAY_MS,
        }
    }
}

/// Outbound link handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Launch the browser for link commands
    pub open_external: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            open_external: true,
        }
    }
}

/// Appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Palette name: phosphor, classic or ocean
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "phosphor".to_string(),
        }
    }
}

/// Persistence location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(home) = home_override() {
            return Ok(home.join(CONFIG_FILE));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from a specific file, or defaults if it does not exist.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Write to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Directory holding persisted history and the log file.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.dir {
            return Ok(dir.clone());
        }
        if let Some(home) = home_override() {
            return Ok(home.join("data"));
        }
        let dir = dirs::data_local_dir().context("Could not determine data directory")?;
        Ok(dir.join(APP_DIR))
    }

    /// Locale to start in: explicit override, then config, then environment.
    pub fn locale(&self, cli_override: Option<Locale>) -> Locale {
        cli_override
            .or(self.console.locale)
            .unwrap_or_else(Locale::from_env)
    }

    pub fn timing(&self) -> Timing {
        Timing::from_millis(self.console.char_delay_ms, self.console.line_delay_ms)
    }
}

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
