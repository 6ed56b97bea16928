//! Typing player: the console's single-consumer animation scheduler.
//!
//! The player drains the pending queue one line at a time, revealing each
//! line a character at a time before handing it back for commit. It never
//! sleeps itself. Every wait is a [`Suspension`] the owner's event loop
//! waits on (see [`TypingPlayer::next_wake`]) and every transition happens
//! in [`TypingPlayer::step`], so the queue is re-read at each boundary and
//! lines enqueued mid-playback are picked up by the running loop.
//!
//! Deadlines chain from the previous deadline rather than from the time
//! the step ran. A late tick therefore catches up instead of drifting, and
//! a tick far in the future drains the whole queue.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Delays between animation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Wait after each revealed character
    pub char_delay: Duration,
    /// Wait after a line is committed, before the next one starts
    pub line_delay: Duration,
}

impl Timing {
    pub const DEFAULT_CHAR_DELAY_MS: u64 = 18;
    pub const DEFAULT_LINE_DELAY_MS: u64 = 32;

    pub fn from_millis(char_delay_ms: u64, line_delay_ms: u64) -> Self {
        Self {
            char_delay: Duration::from_millis(char_delay_ms),
            line_delay: Duration::from_millis(line_delay_ms),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_CHAR_DELAY_MS, Self::DEFAULT_LINE_DELAY_MS)
    }
}

/// A scheduled wake-up owned by the player.
///
/// Await it by waiting [`remaining`](Self::remaining); cancel it by dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suspension {
    wake_at: Instant,
}

impl Suspension {
    pub fn until(wake_at: Instant) -> Self {
        Self { wake_at }
    }

    pub fn after(from: Instant, delay: Duration) -> Self {
        Self::until(from + delay)
    }

    pub fn wake_at(&self) -> Instant {
        self.wake_at
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.wake_at
    }

    /// Time left until the wake-up, zero once due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.wake_at.saturating_duration_since(now)
    }
}

/// The line currently being revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reveal {
    line: String,
    /// Byte offset of the end of the visible prefix (always a char boundary)
    end: usize,
}

impl Reveal {
    fn new(line: String) -> Self {
        Self { line, end: 0 }
    }

    /// Show one more character.
    fn advance(&mut self) {
        if let Some(c) = self.line[self.end..].chars().next() {
            self.end += c.len_utf8();
        }
    }

    fn is_complete(&self) -> bool {
        self.end >= self.line.len()
    }

    fn prefix(&self) -> &str {
        &self.line[..self.end]
    }
}

/// Scheduler state. Only `Playing` carries a suspension.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerState {
    Idle,
    Playing {
        reveal: Option<Reveal>,
        wake: Suspension,
    },
}

/// Outcome of a single [`TypingPlayer::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Not playing; nothing to do
    Idle,
    /// Playing, but the current suspension is not due yet
    Suspended,
    /// The visible prefix grew by one character
    Revealed,
    /// A finished line (or a spacer) is ready to be appended to history
    Committed(String),
    /// The queue ran dry and the player went idle
    Finished,
}

/// Single-consumer typing animation over a shared queue.
#[derive(Debug, Clone)]
pub struct TypingPlayer {
    timing: Timing,
    state: PlayerState,
}

impl TypingPlayer {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            state: PlayerState::Idle,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayerState::Playing { .. })
    }

    /// Move from idle to playing, due immediately.
    ///
    /// Returns `false` (and changes nothing) if already playing.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            return false;
        }
        self.state = PlayerState::Playing {
            reveal: None,
            wake: Suspension::until(now),
        };
        true
    }

    /// Drop any in-flight reveal and pending wake-up and go idle.
    ///
    /// The partially revealed line is discarded, never committed.
    pub fn cancel(&mut self) {
        self.state = PlayerState::Idle;
    }

    /// Visible prefix of the line being typed, if any.
    pub fn typing(&self) -> Option<&str> {
        match &self.state {
            PlayerState::Playing {
                reveal: Some(reveal),
                ..
            } => Some(reveal.prefix()),
            _ => None,
        }
    }

    /// The pending wake-up before the next [`step`](Self::step), if playing.
    pub fn next_wake(&self) -> Option<Suspension> {
        match &self.state {
            PlayerState::Playing { wake, .. } => Some(*wake),
            PlayerState::Idle => None,
        }
    }

    /// Run one transition of the playback loop.
    pub fn step(&mut self, now: Instant, queue: &mut VecDeque<String>) -> Step {
        let timing = self.timing;
        let PlayerState::Playing { reveal, wake } = &mut self.state else {
            return Step::Idle;
        };
        if !wake.is_ready(now) {
            return Step::Suspended;
        }
        let due = wake.wake_at();

        if let Some(current) = reveal.as_mut() {
            if !current.is_complete() {
                current.advance();
                *wake = Suspension::after(due, timing.char_delay);
                return Step::Revealed;
            }
            let line = std::mem::take(&mut current.line);
            *reveal = None;
            *wake = Suspension::after(due, timing.line_delay);
            return Step::Committed(line);
        }

        match queue.pop_front() {
            None => {
                self.state = PlayerState::Idle;
                Step::Finished
            }
            // Spacers skip the reveal and the delays entirely
            Some(line) if line.is_empty() => Step::Committed(line),
            Some(line) => {
                let mut next = Reveal::new(line);
                next.advance();
                *reveal = Some(next);
                *wake = Suspension::after(due, timing.char_delay);
                Step::Revealed
            }
        }
    }
}
