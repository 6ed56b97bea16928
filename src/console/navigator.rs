//! Out-of-band navigation effects: opening links and moving the page anchor.
//!
//! Effects are fire-and-forget. Nothing here reports back to the console;
//! failures are logged and swallowed.

use std::cell::RefCell;
use std::process::{Command, Stdio};
use std::rc::Rc;

/// A navigation side effect attached to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Open an external link in a new browsing context
    OpenUrl(&'static str),
    /// Move the in-page anchor (section id, without `#`)
    Anchor(&'static str),
}

/// Receiver of navigation effects.
pub trait Navigator {
    fn open_url(&mut self, url: &str);

    fn set_anchor(&mut self, anchor: &str);

    /// The anchor most recently set, for surfaces that display it.
    fn current_anchor(&self) -> Option<&str> {
        None
    }

    fn dispatch(&mut self, effect: &Effect) {
        match effect {
            Effect::OpenUrl(url) => self.open_url(url),
            Effect::Anchor(anchor) => self.set_anchor(anchor),
        }
    }
}

/// Error from a specific opener.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("'{program}' is not installed")]
    NotFound { program: &'static str },

    #[error("'{program}' failed to start: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// A platform tool that can open a URL in the user's browser.
pub trait UrlOpener {
    /// Program name for logs.
    fn name(&self) -> &'static str;

    /// Availability check. May spawn a process; called once per navigator.
    fn is_available(&self) -> bool;

    /// Launch the opener without waiting for it.
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opener backed by an external command (`xdg-open`, `open`, `cmd /C start`).
#[derive(Debug, Clone, Copy)]
pub struct CommandOpener {
    program: &'static str,
    leading_args: &'static [&'static str],
}

impl CommandOpener {
    pub const fn new(program: &'static str, leading_args: &'static [&'static str]) -> Self {
        Self {
            program,
            leading_args,
        }
    }

    /// Check if the program is on PATH.
    fn tool_exists(&self) -> bool {
        if cfg!(target_os = "windows") {
            return true;
        }
        Command::new("which")
            .arg(self.program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl UrlOpener for CommandOpener {
    fn name(&self) -> &'static str {
        self.program
    }

    fn is_available(&self) -> bool {
        self.tool_exists()
    }

    fn open(&self, url: &str) -> Result<(), OpenError> {
        let mut child = Command::new(self.program)
            .args(self.leading_args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => OpenError::NotFound {
                    program: self.program,
                },
                _ => OpenError::Spawn {
                    program: self.program,
                    source,
                },
            })?;

        // Reap in the background so the opener never blocks the UI
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Get the platform-appropriate openers in priority order.
pub fn platform_openers() -> Vec<Box<dyn UrlOpener>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(CommandOpener::new("open", &[]))]
    }

    #[cfg(target_os = "windows")]
    {
        vec![Box::new(CommandOpener::new("cmd", &["/C", "start", ""]))]
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        vec![
            Box::new(CommandOpener::new("xdg-open", &[])),
            Box::new(CommandOpener::new("gio", &["open"])),
        ]
    }
}

/// Navigator for the real terminal: opens links with the platform opener and
/// remembers the anchor for the header to show.
pub struct SystemNavigator {
    openers: Vec<Box<dyn UrlOpener>>,
    open_links: bool,
    anchor: Option<String>,
}

impl SystemNavigator {
    /// Create with platform-appropriate openers.
    pub fn new(open_links: bool) -> Self {
        Self::with_openers(platform_openers(), open_links)
    }

    /// Create with specific openers (for testing).
    ///
    /// Availability is probed here, once; unavailable openers are dropped.
    /// Nothing is probed when link opening is disabled.
    pub fn with_openers(openers: Vec<Box<dyn UrlOpener>>, open_links: bool) -> Self {
        let openers = if open_links {
            openers
                .into_iter()
                .filter(|opener| {
                    let available = opener.is_available();
                    if !available {
                        tracing::debug!(opener = opener.name(), "opener not available");
                    }
                    available
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            openers,
            open_links,
            anchor: None,
        }
    }
}

impl Navigator for SystemNavigator {
    fn open_url(&mut self, url: &str) {
        if !self.open_links {
            tracing::debug!(url, "link opening disabled, skipping");
            return;
        }

        for opener in &self.openers {
            match opener.open(url) {
                Ok(()) => {
                    tracing::debug!(url, opener = opener.name(), "opened link");
                    return;
                }
                Err(e) => tracing::warn!(url, error = %e, "opener failed, trying next"),
            }
        }
        tracing::warn!(url, "no opener could open link");
    }

    fn set_anchor(&mut self, anchor: &str) {
        tracing::debug!(anchor, "anchor changed");
        self.anchor = Some(anchor.to_string());
    }

    fn current_anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

/// Records every effect instead of acting on it.
///
/// Clones share the same log, so a test can keep one handle while the
/// console owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    effects: Rc<RefCell<Vec<Effect>>>,
    anchor: Option<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects recorded so far, in dispatch order.
    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_url(&mut self, _url: &str) {}

    fn set_anchor(&mut self, anchor: &str) {
        self.anchor = Some(anchor.to_string());
    }

    fn current_anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    fn dispatch(&mut self, effect: &Effect) {
        self.effects.borrow_mut().push(*effect);
        if let Effect::Anchor(anchor) = effect {
            self.set_anchor(anchor);
        }
    }
}
