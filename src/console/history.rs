//! Bounded console history.

/// Maximum number of lines kept (and persisted).
pub const HISTORY_LIMIT: usize = 140;

/// Everything permanently shown in the console, oldest first.
///
/// Appending past [`HISTORY_LIMIT`] silently drops the oldest lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    lines: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing lines, keeping only the most recent [`HISTORY_LIMIT`].
    pub fn from_lines(lines: Vec<String>) -> Self {
        let mut history = Self { lines };
        history.truncate();
        history
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.truncate();
    }

    /// Replace the whole content.
    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.truncate();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn truncate(&mut self) {
        let excess = self.lines.len().saturating_sub(HISTORY_LIMIT);
        self.lines.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_in_order() {
        let mut history = History::new();
        history.push("a");
        history.push("b");
        assert_eq!(history.lines(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn push_drops_oldest_past_limit() {
        let mut history = History::new();
        for i in 0..HISTORY_LIMIT + 5 {
            history.push(i.to_string());
        }
        assert_eq!(history.lines().len(), HISTORY_LIMIT);
        assert_eq!(history.lines()[0], "5");
        assert_eq!(
            history.lines().last().map(String::as_str),
            Some((HISTORY_LIMIT + 4).to_string().as_str())
        );
    }

    #[test]
    fn from_lines_keeps_most_recent() {
        let lines: Vec<String> = (0..200).map(|i| i.to_string()).collect();
        let history = History::from_lines(lines);
        assert_eq!(history.lines().len(), HISTORY_LIMIT);
        assert_eq!(history.lines()[0], "60");
    }

    #[test]
    fn replace_swaps_content() {
        let mut history = History::from_lines(vec!["old".into()]);
        history.replace(vec!["new".into(), "".into()]);
        assert_eq!(history.lines(), &["new".to_string(), String::new()]);
    }
}
