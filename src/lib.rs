//! Folio - terminal navigation console for the lucasvicente.es portfolio
//!
//! The library holds the console engine ([`console`]), its configuration and
//! the ratatui front end; `main.rs` wires them to the command line.

pub mod cli;
pub mod config;
pub mod console;
pub mod locale;
pub mod logging;
pub mod tui;

pub use config::Config;
pub use locale::Locale;
