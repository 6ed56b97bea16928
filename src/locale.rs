//! Console locale selection.
//!
//! The locale decides which alias table, banner and canned responses the
//! console consults. Switching it never rewrites what is already on screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported console languages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (the site's primary language)
    #[default]
    Es,
    /// English
    En,
}

/// Error returned when a locale tag is not one we ship copy for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Unsupported locale '{0}' (expected 'es' or 'en')")]
    Unsupported(String),
}

/// Environment variables consulted by [`Locale::from_env`], in priority order.
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

impl Locale {
    /// Both locales in toggle order.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// Short language tag (`"es"` / `"en"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// The other locale.
    pub fn toggle(self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    /// Detect the locale from the process environment.
    ///
    /// Spanish when the first non-empty locale variable starts with `es`,
    /// English otherwise.
    pub fn from_env() -> Self {
        let tag = LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty());

        Self::from_tag(tag.as_deref())
    }

    fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.parse::<Locale>()) {
            Some(Ok(locale)) => locale,
            _ => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts bare tags and POSIX/BCP47 forms like `es_ES.UTF-8` or `en-US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}
