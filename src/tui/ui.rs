//! Console rendering
//!
//! Layout, top to bottom: a header (site name, current anchor, locale), the
//! console pane (history, the line being typed, the live input row) and a
//! footer of key hints. The pane is pinned to its last row unless the user
//! scrolled back.
//!
//! Lines wider than the pane are broken into rows here, character by
//! character, so scrolling and cursor placement count the rows actually drawn.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthChar;

use super::input::InputField;
use super::theme::Theme;
use crate::console::content::{ECHO_PREFIX, SITE_NAME};
use crate::console::Console;
use crate::locale::Locale;

/// Rendered in place of blank lines so rows keep their height.
pub const BLANK_LINE: &str = "\u{a0}";

/// Appended to the partially typed line.
pub const TYPING_CURSOR: &str = "▌";

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("Enter", "run"),
    ("Tab", "es/en"),
    ("PgUp/PgDn", "scroll"),
    ("Esc", "quit"),
];

/// Everything the renderer reads.
pub struct ConsoleView<'a> {
    pub console: &'a Console,
    pub input: &'a InputField,
    /// Rows scrolled back from the bottom
    pub scroll_back: usize,
    pub theme: &'a Theme,
}

/// Draw the whole console screen. Returns the number of rows in the console
/// pane's content.
pub fn render(frame: &mut Frame, view: &ConsoleView) -> usize {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, view);
    let rows = render_console(frame, body, view);
    render_footer(frame, footer, FOOTER_KEYS, view.theme);
    rows
}

fn render_header(frame: &mut Frame, area: Rect, view: &ConsoleView) {
    let theme = view.theme;
    let [site_area, locale_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(9)]).areas(area);

    let mut left = vec![Span::styled(format!(" {}", SITE_NAME), theme.accent_bold_style())];
    if let Some(anchor) = view.console.navigator().current_anchor() {
        left.push(Span::styled(
            format!("  #{}", anchor),
            theme.text_secondary_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), site_area);

    let locales: Vec<Span> = Locale::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, locale)| {
            let sep = (i > 0).then(|| Span::styled(" | ", theme.text_secondary_style()));
            let style = if *locale == view.console.locale() {
                theme.accent_bold_style()
            } else {
                theme.text_secondary_style()
            };
            let label = Span::styled(locale.as_str().to_uppercase(), style);
            sep.into_iter().chain(std::iter::once(label))
        })
        .chain(std::iter::once(Span::raw(" ")))
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(locales)).alignment(Alignment::Right),
        locale_area,
    );
}

fn render_console(frame: &mut Frame, area: Rect, view: &ConsoleView) -> usize {
    let theme = view.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(" terminal ", theme.accent_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines = console_lines(view);
    let input = lines.pop().map(|line| wrap_line(&line, width)).unwrap_or_default();
    let mut rows = wrap_lines(&lines, width);
    let input_start = rows.len();
    rows.extend(input);

    let total = rows.len();
    let height = inner.height as usize;
    let offset = scroll_offset(total, height, view.scroll_back);

    let paragraph = Paragraph::new(rows).scroll((offset as u16, 0));
    frame.render_widget(paragraph, inner);

    if let Some((column, row)) = cursor_cell(
        ECHO_PREFIX.len() + view.input.cursor_column(),
        input_start,
        width,
    ) {
        if row >= offset && row - offset < height {
            frame.set_cursor_position(Position::new(
                inner.x + column as u16,
                inner.y + (row - offset) as u16,
            ));
        }
    }
    total
}

/// Column and row of the input cursor once the input line is broken into rows.
fn cursor_cell(column: usize, input_start: usize, width: usize) -> Option<(usize, usize)> {
    (width > 0).then(|| (column % width, input_start + column / width))
}

/// Break every line into rows of at most `width` display columns.
pub fn wrap_lines(lines: &[Line<'_>], width: usize) -> Vec<Line<'static>> {
    lines.iter().flat_map(|line| wrap_line(line, width)).collect()
}

/// Break one line into rows of at most `width` display columns, keeping each
/// span's style. A line always yields at least one row.
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;

    for span in &line.spans {
        let mut chunk = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if width > 0 && row_width + w > width && row_width > 0 {
                if !chunk.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut row)).style(line.style));
                row_width = 0;
            }
            chunk.push(c);
            row_width += w;
        }
        if !chunk.is_empty() {
            row.push(Span::styled(chunk, span.style));
        }
    }
    rows.push(Line::from(row).style(line.style));
    rows
}

/// Pane content: history, the typing line (if any), then the input row.
pub fn console_lines<'a>(view: &ConsoleView<'a>) -> Vec<Line<'a>> {
    let theme = view.theme;
    let history = view.console.history();
    let mut lines = Vec::with_capacity(history.len() + 2);

    for line in history {
        lines.push(history_line(line, theme));
    }

    if let Some(prefix) = view.console.typing() {
        lines.push(Line::from(vec![
            Span::styled(prefix, theme.text_style()),
            Span::styled(TYPING_CURSOR, theme.accent_style()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(ECHO_PREFIX, theme.accent_bold_style()),
        Span::styled(view.input.text(), theme.echo_style()),
    ]));
    lines
}

fn history_line<'a>(line: &'a str, theme: &Theme) -> Line<'a> {
    if line.is_empty() {
        return Line::raw(BLANK_LINE);
    }
    match line.strip_prefix(ECHO_PREFIX) {
        Some(rest) => Line::from(vec![
            Span::styled(ECHO_PREFIX, theme.accent_style()),
            Span::styled(rest, theme.echo_style()),
        ]),
        None => Line::styled(line, theme.text_style()),
    }
}

/// First visible row: pinned to the bottom, minus any scrollback.
pub fn scroll_offset(total: usize, height: usize, scroll_back: usize) -> usize {
    total.saturating_sub(height).saturating_sub(scroll_back)
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("Esc", "quit"), ("Tab", "es/en")]` renders as `"Esc: quit | Tab: es/en"`.
fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Keys in the accent color, descriptions dimmed, joined by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
