//! Terminal user interface for the console
//!
//! Built on ratatui with crossterm for terminal handling.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::ConsoleApp;
pub use theme::Theme;
