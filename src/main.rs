//! folio - terminal navigation console for the lucasvicente.es portfolio

mod commands;

use anyhow::Result;
use clap::Parser;

use folio::cli::{Cli, Commands, ConfigCommands, HistoryCommands};
use folio::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        None | Some(Commands::Console) => {
            init_logging(&config);
            commands::console::handle(&config, cli.lang)
        }
        Some(Commands::Ask(args)) => commands::ask::handle(&config, cli.lang, &args),
        Some(Commands::History(cmd)) => {
            init_logging(&config);
            match cmd {
                HistoryCommands::Show => commands::history::handle_show(&config),
                HistoryCommands::Clear => commands::history::handle_clear(&config),
                HistoryCommands::Path => commands::history::handle_path(&config),
            }
        }
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}

/// Log to the data directory. Best effort; commands work without it.
fn init_logging(config: &Config) {
    if let Ok(data_dir) = config.data_dir() {
        if let Err(e) = logging::init(&data_dir) {
            eprintln!("warning: logging disabled: {:#}", e);
        }
    }
}
