//! The command console.
//!
//! A [`Console`] owns everything the navigation terminal needs: the
//! displayed [`History`], the pending output queue, the [`TypingPlayer`]
//! that animates it, the storage handle history is persisted to and the
//! [`Navigator`] that receives link/anchor effects.
//!
//! # Architecture
//!
//! - `command`: canonical command identifiers
//! - `resolver`: input normalization, alias tables, intent detection
//! - `content`: banner, canned responses, per-command effects
//! - `history`: the bounded line buffer
//! - `player`: the cooperative typing scheduler
//! - `storage`: key-value persistence adapter
//! - `navigator`: outbound link and anchor effects
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use folio::console::{Console, MemoryStore, RecordingNavigator, Timing};
//! use folio::Locale;
//!
//! let mut console = Console::new(
//!     Locale::Es,
//!     Timing::default(),
//!     Box::new(MemoryStore::new()),
//!     Box::new(RecordingNavigator::new()),
//! );
//! let now = Instant::now();
//! console.submit("ayuda", now);
//! assert_eq!(console.history().last().map(String::as_str), Some("$ ayuda"));
//!
//! // Drive the animation to completion
//! console.tick(now + Duration::from_secs(30));
//! assert!(!console.is_playing());
//! ```

pub mod command;
pub mod content;
pub mod history;
pub mod navigator;
pub mod player;
pub mod resolver;
pub mod storage;

pub use command::CommandId;
pub use history::{History, HISTORY_LIMIT};
pub use navigator::{Effect, Navigator, RecordingNavigator, SystemNavigator};
pub use player::{Step, Suspension, Timing, TypingPlayer};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, HISTORY_KEY};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::locale::Locale;

/// What a submitted input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing happened
    Ignored,
    /// The console was reset to the banner
    Cleared,
    /// A command was echoed and its response queued
    Executed(CommandId),
    /// Nothing matched; echoed with an "unknown command" reply
    Unknown,
}

/// The interactive navigation console.
pub struct Console {
    locale: Locale,
    history: History,
    queue: VecDeque<String>,
    player: TypingPlayer,
    store: Box<dyn KeyValueStore>,
    navigator: Box<dyn Navigator>,
}

impl Console {
    /// Create a console, rehydrating history from `store`.
    ///
    /// Absent, unreadable, malformed or empty stored history falls back to
    /// the locale's intro banner. This never fails.
    pub fn new(
        locale: Locale,
        timing: Timing,
        store: Box<dyn KeyValueStore>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        let lines = match storage::load_history(store.as_ref()) {
            Ok(Some(lines)) if !lines.is_empty() => {
                tracing::debug!(lines = lines.len(), "restored console history");
                lines
            }
            Ok(_) => content::banner_lines(locale),
            Err(e) => {
                tracing::warn!(error = %e, "discarding stored console history");
                content::banner_lines(locale)
            }
        };

        Self {
            locale,
            history: History::from_lines(lines),
            queue: VecDeque::new(),
            player: TypingPlayer::new(timing),
            store,
            navigator,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch locale for future commands. Existing history is untouched.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::debug!(%locale, "console locale changed");
        }
        self.locale = locale;
    }

    /// Committed lines, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.lines()
    }

    /// Lines waiting to be typed.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    /// Visible prefix of the line being typed.
    pub fn typing(&self) -> Option<&str> {
        self.player.typing()
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    /// How long the event loop may wait before the next [`tick`](Self::tick).
    ///
    /// `None` while idle.
    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        self.player.next_wake().map(|wake| wake.remaining(now))
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Handle one line of user input.
    ///
    /// The echo is committed before any response character is revealed;
    /// navigation effects fire immediately, once, after the response is
    /// queued.
    pub fn submit(&mut self, raw: &str, now: Instant) -> Submission {
        let input = raw.trim();
        if input.is_empty() {
            return Submission::Ignored;
        }

        match resolver::resolve(input, self.locale) {
            Some(CommandId::Clear) => {
                self.clear();
                Submission::Cleared
            }
            Some(command) => {
                tracing::debug!(input, %command, locale = %self.locale, "resolved input");
                self.commit(content::echo(input));
                let lines = content::response(command, self.locale)
                    .iter()
                    .map(|l| l.to_string());
                self.enqueue(lines, now);
                for effect in content::effects(command) {
                    self.navigator.dispatch(effect);
                }
                Submission::Executed(command)
            }
            None => {
                tracing::debug!(input, locale = %self.locale, "unresolved input");
                self.commit(content::echo(input));
                self.enqueue([content::unknown(input, self.locale)], now);
                Submission::Unknown
            }
        }
    }

    /// Advance the typing animation to `now`.
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        loop {
            match self.player.step(now, &mut self.queue) {
                Step::Revealed => changed = true,
                Step::Committed(line) => {
                    self.commit(line);
                    changed = true;
                }
                Step::Finished => return true,
                Step::Idle | Step::Suspended => return changed,
            }
        }
    }

    /// Reset to the intro banner, dropping queued output and any animation
    /// in flight.
    pub fn clear(&mut self) {
        self.player.cancel();
        self.queue.clear();
        self.history.replace(content::banner_lines(self.locale));
        tracing::info!(locale = %self.locale, "console cleared");
        self.persist();
    }

    /// Cancel any outstanding animation. Called on teardown.
    pub fn shutdown(&mut self) {
        if self.player.is_playing() {
            tracing::debug!(pending = self.queue.len(), "cancelling typing on shutdown");
        }
        self.player.cancel();
        self.queue.clear();
    }

    /// Queue output (plus a trailing spacer) and make sure playback runs.
    fn enqueue(&mut self, lines: impl IntoIterator<Item = String>, now: Instant) {
        self.queue.extend(lines);
        self.queue.push_back(String::new());
        if self.player.start(now) {
            // Reveal the first character right away
            self.tick(now);
        }
    }

    fn commit(&mut self, line: String) {
        self.history.push(line);
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = storage::save_history(self.store.as_mut(), self.history.lines()) {
            tracing::warn!(error = %e, "failed to persist console history");
        }
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.shutdown();
    }
}
