//! Subcommand handlers

pub mod ask;
pub mod completions;
pub mod config;
pub mod console;
pub mod history;
