//! Command-line interface definition
//!
//! Lives in the library so `xtask` can render man pages from it.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::locale::Locale;

/// Long version string: package version, build date and git SHA on dev builds.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FOLIO_BUILD_DATE"),
    ", ",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    about = "Interactive navigation console for the lucasvicente.es portfolio",
    long_about = "Folio is a terminal take on the lucasvicente.es portfolio: type commands \
                  (help, projects, stack, contact...) or plain questions in Spanish or English \
                  and the console types its answers back.",
    version,
    long_version = LONG_VERSION
)]
pub struct Cli {
    /// Console language (defaults to config, then $LANG)
    #[arg(long, short, global = true, value_enum)]
    pub lang: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive console (default)
    Console,

    /// Answer a single input without opening the console
    #[command(long_about = "Resolve TEXT exactly as the console would and print the reply.\n\
                            Nothing is animated, persisted or opened.")]
    Ask(AskArgs),

    /// Inspect or reset persisted console history
    #[command(subcommand)]
    History(HistoryCommands),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Input text (joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print only the resolved command name (or "unresolved")
    #[arg(long)]
    pub resolve: bool,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// Print persisted history, one line per row
    Show,
    /// Delete persisted history
    Clear,
    /// Print the history file path
    Path,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values, unless one exists
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_console() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.lang.is_none());
    }

    #[test]
    fn ask_joins_words_and_takes_global_lang() {
        let cli = Cli::try_parse_from(["folio", "ask", "quien", "eres", "--lang", "es"]).unwrap();
        assert_eq!(cli.lang, Some(Locale::Es));
        match cli.command {
            Some(Commands::Ask(args)) => {
                assert_eq!(args.text, vec!["quien", "eres"]);
                assert!(!args.resolve);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ask_requires_text() {
        assert!(Cli::try_parse_from(["folio", "ask"]).is_err());
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["folio", "--lang", "fr"]).is_err());
    }
}
