//! Query input component.
//!
//! The single-line search field at the top of the picker. While the query is
//! empty it shows the placeholder text supplied by the session.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// The query input widget.
pub struct QueryInput<'a> {
    /// The current query text.
    query: &'a str,
    /// Status text shown while the query is empty, and as the title.
    placeholder: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> QueryInput<'a> {
    /// Creates a new query input widget.
    #[must_use]
    pub const fn new(query: &'a str, placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            placeholder,
            theme,
        }
    }

    fn build_line(&self) -> Line<'a> {
        let cursor = Span::styled("▌", Style::default().fg(self.theme.accent));
        if self.query.is_empty() {
            Line::from(vec![
                cursor,
                Span::styled(
                    self.placeholder,
                    self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", self.theme.accent_style()),
                Span::styled(self.query, self.theme.base_style()),
                cursor,
            ])
        }
    }
}

impl Widget for &QueryInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(" Insert Snippet ", self.theme.header_style));

        Paragraph::new(self.build_line())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);

        // While typing, keep the page/result status visible in the border.
        if !self.query.is_empty() && area.height > 0 {
            let status = Line::from(Span::styled(
                format!(" {} ", short_status(self.placeholder)),
                self.theme.dimmed_style(),
            ))
            .right_aligned();
            status.render(Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1), buf);
        }
    }
}

/// The parenthesised part of a placeholder, e.g. `(3 results)`.
fn short_status(placeholder: &str) -> &str {
    match (placeholder.find('('), placeholder.find(')')) {
        (Some(start), Some(end)) if start < end => &placeholder[start..=end],
        _ => "",
    }
}
