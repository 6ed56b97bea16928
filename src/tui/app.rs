//! Console TUI application
//!
//! Owns the [`Console`] for the lifetime of the session, feeds it key
//! events and drives its typing animation from the event loop. The loop
//! sleeps in `event::poll` for exactly as long as the console's pending
//! suspension (or an idle tick when nothing is animating).

use std::cell::Cell;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{DefaultTerminal, Frame};

use super::input::{handle_key_event, InputField, InputResult};
use super::theme::Theme;
use super::ui::{self, ConsoleView};
use crate::console::{Console, Submission};

/// Poll interval while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Interactive console application state.
pub struct ConsoleApp {
    console: Console,
    input: InputField,
    theme: Theme,
    /// Rows scrolled back from the bottom; reset whenever output changes
    scroll_back: usize,
    /// Pane rows at the last draw, after long lines were broken up
    pane_rows: Cell<usize>,
    needs_render: bool,
}

impl ConsoleApp {
    pub fn new(console: Console, theme: Theme) -> Self {
        Self {
            console,
            input: InputField::new(),
            theme,
            scroll_back: 0,
            pane_rows: Cell::new(0),
            needs_render: true,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// Take over the terminal and run until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        tracing::info!(locale = %self.console.locale(), "console session started");

        let result = self.event_loop(&mut terminal);

        ratatui::restore();
        self.console.shutdown();
        tracing::info!("console session ended");
        result
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.needs_render {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_render = false;
            }

            let timeout = self
                .console
                .next_wake(Instant::now())
                .unwrap_or(IDLE_POLL);
            if event::poll(timeout)? && self.handle_event(event::read()?, Instant::now()) {
                return Ok(());
            }

            self.tick(Instant::now());
        }
    }

    /// Apply one terminal event. Returns `true` when the app should quit.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Key(key) => {
                let result = handle_key_event(key, &mut self.input);
                self.needs_render = true;
                self.apply(result, now)
            }
            Event::Paste(text) => {
                text.chars()
                    .filter(|c| !c.is_control())
                    .for_each(|c| self.input.insert(c));
                self.needs_render = true;
                false
            }
            Event::Resize(_, _) => {
                self.needs_render = true;
                false
            }
            _ => false,
        }
    }

    /// Advance the console animation; snaps the view back to the bottom
    /// when anything new appeared.
    pub fn tick(&mut self, now: Instant) {
        if self.console.tick(now) {
            self.scroll_back = 0;
            self.needs_render = true;
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let view = ConsoleView {
            console: &self.console,
            input: &self.input,
            scroll_back: self.scroll_back,
            theme: &self.theme,
        };
        self.pane_rows.set(ui::render(frame, &view));
    }

    fn apply(&mut self, result: InputResult, now: Instant) -> bool {
        match result {
            InputResult::Continue => false,
            InputResult::Quit => true,
            InputResult::Submit(text) => {
                if self.console.submit(&text, now) != Submission::Ignored {
                    self.scroll_back = 0;
                }
                false
            }
            InputResult::ToggleLocale => {
                let next = self.console.locale().toggle();
                self.console.set_locale(next);
                false
            }
            InputResult::Scroll(delta) => {
                let max = self.line_count().saturating_sub(1);
                let target = self.scroll_back as i64 + delta as i64;
                self.scroll_back = target.clamp(0, max as i64) as usize;
                false
            }
        }
    }

    /// Rows in the console pane: as last drawn, or one per line (history,
    /// typing line, input row) before the first draw or if content grew since.
    fn line_count(&self) -> usize {
        let lines =
            self.console.history().len() + usize::from(self.console.typing().is_some()) + 1;
        lines.max(self.pane_rows.get())
    }
}
