//! Theme configuration for the console TUI
//!
//! Centralizes all color and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Console color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Output text color
    pub text_primary: Color,
    /// Dimmed text (footer hints, borders)
    pub text_secondary: Color,
    /// Accent color for the prompt, site name and key hints
    pub accent: Color,
    /// Echoed user input
    pub echo: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    /// Green-on-dark terminal look.
    pub fn phosphor() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            echo: Color::White,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            echo: Color::White,
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            echo: Color::White,
            background: Color::Reset,
        }
    }

    /// Look up a palette by its config name, falling back to the default.
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            "phosphor" => Self::phosphor(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using phosphor");
                Self::phosphor()
            }
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn echo_style(&self) -> Style {
        Style::default().fg(self.echo).add_modifier(Modifier::BOLD)
    }
}
