//! Canonical command identifiers.

use std::fmt;

/// Locale-independent key a resolved input maps to.
///
/// Response copy and navigation effects are looked up by this identifier,
/// never by the words the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    Greeting,
    About,
    Hire,
    Pricing,
    Contact,
    Projects,
    Stack,
    Cv,
    Github,
    Linkedin,
    Thanks,
    /// Resets the console; the only command that skips the typing animation.
    Clear,
}

impl CommandId {
    /// Every command, in help-listing order.
    pub const ALL: [CommandId; 13] = [
        CommandId::Help,
        CommandId::Greeting,
        CommandId::About,
        CommandId::Hire,
        CommandId::Pricing,
        CommandId::Contact,
        CommandId::Projects,
        CommandId::Stack,
        CommandId::Cv,
        CommandId::Github,
        CommandId::Linkedin,
        CommandId::Thanks,
        CommandId::Clear,
    ];

    /// Stable lowercase name for logs and `folio ask --resolve`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Help => "help",
            CommandId::Greeting => "greeting",
            CommandId::About => "about",
            CommandId::Hire => "hire",
            CommandId::Pricing => "pricing",
            CommandId::Contact => "contact",
            CommandId::Projects => "projects",
            CommandId::Stack => "stack",
            CommandId::Cv => "cv",
            CommandId::Github => "github",
            CommandId::Linkedin => "linkedin",
            CommandId::Thanks => "thanks",
            CommandId::Clear => "clear",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
