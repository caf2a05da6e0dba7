//! Status bar component.
//!
//! Displays the key hints and the page or result status.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Key hints shown in the status bar.
const KEY_HINTS: [(&str, &str); 4] = [
    ("↑/↓", "navigate"),
    ("PgUp/PgDn", "scroll"),
    ("Enter", "select"),
    ("Esc", "cancel"),
];

/// The status bar component.
pub struct StatusBar<'a> {
    /// Current query, empty while browsing.
    query: &'a str,
    /// Number of file records shown.
    shown: usize,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(query: &'a str, shown: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            shown,
            theme,
        }
    }

    /// Builds the status line spans.
    fn build_line(&self) -> Line<'a> {
        let mode = if self.query.is_empty() { "BROWSE" } else { "FILTER" };
        let mut spans = vec![
            Span::styled(
                format!(" {mode} "),
                Style::default()
                    .fg(ratatui::style::Color::Black)
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        for (key, hint) in KEY_HINTS {
            spans.push(Span::styled(key, self.theme.accent_style()));
            spans.push(Span::raw(format!(" {hint}  ")));
        }

        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            format!("{} shown", self.shown),
            self.theme.dimmed_style(),
        ));

        Line::from(spans)
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line())
            .style(self.theme.status_bar_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_browse_mode_line() {
        let theme = Theme::dark();
        let line = StatusBar::new("", 50, &theme).build_line();
        assert_eq!(
            plain(&line),
            " BROWSE  ↑/↓ navigate  PgUp/PgDn scroll  Enter select  Esc cancel  │ 50 shown"
        );
    }

    #[test]
    fn test_filter_mode_line() {
        let theme = Theme::dark();
        let line = StatusBar::new("log", 3, &theme).build_line();
        let text = plain(&line);
        assert!(text.starts_with(" FILTER "));
        assert!(text.ends_with("3 shown"));
    }
}
