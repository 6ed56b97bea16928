//! Single-line input field and key dispatch for the console TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Result of processing an input event.
///
/// Returned by the key handler to signal control flow to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing for the loop to do beyond re-rendering
    Continue,
    /// The user submitted the field's contents
    Submit(String),
    /// Flip the console language
    ToggleLocale,
    /// Scroll the console view (positive = further back)
    Scroll(i32),
    /// Exit the console
    Quit,
}

/// Editable text line with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    /// Cursor position in chars, `0..=char_count`
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor (wide characters count double).
    pub fn cursor_column(&self) -> usize {
        self.text[..self.byte_index(self.cursor)].width()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the whole line.
    pub fn kill_line(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Return the contents and leave the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Handle a keyboard event against the input field.
pub fn handle_key_event(key: KeyEvent, input: &mut InputField) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        // === Quit ===
        KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => InputResult::Quit,

        // === Submit / locale ===
        KeyCode::Enter => InputResult::Submit(input.take()),
        KeyCode::Tab => InputResult::ToggleLocale,

        // === Editing ===
        KeyCode::Char('u') if ctrl => {
            input.kill_line();
            InputResult::Continue
        }
        KeyCode::Char('a') if ctrl => {
            input.move_home();
            InputResult::Continue
        }
        KeyCode::Char('e') if ctrl => {
            input.move_end();
            InputResult::Continue
        }
        KeyCode::Char(c) if !ctrl => {
            input.insert(c);
            InputResult::Continue
        }
        KeyCode::Backspace => {
            input.backspace();
            InputResult::Continue
        }
        KeyCode::Delete => {
            input.delete();
            InputResult::Continue
        }
        KeyCode::Left => {
            input.move_left();
            InputResult::Continue
        }
        KeyCode::Right => {
            input.move_right();
            InputResult::Continue
        }
        KeyCode::Home => {
            input.move_home();
            InputResult::Continue
        }
        KeyCode::End => {
            input.move_end();
            InputResult::Continue
        }

        // === Scrollback ===
        KeyCode::PageUp => InputResult::Scroll(10),
        KeyCode::PageDown => InputResult::Scroll(-10),
        KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => InputResult::Scroll(1),
        KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => InputResult::Scroll(-1),

        _ => InputResult::Continue,
    }
}
