//! Preview pane component.
//!
//! Shows the highlighted item: a file record's name, path, inferred language
//! and, once loaded, its preview text. A navigation marker shows its usage
//! hint instead.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use snip_core::{DisplayRecord, ListItem, NavigationMarker, language_for_path};

use crate::theme::Theme;

/// The preview pane widget.
pub struct PreviewPane<'a> {
    /// The highlighted item (if any).
    item: Option<&'a ListItem>,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> PreviewPane<'a> {
    /// Creates a new preview pane.
    #[must_use]
    pub const fn new(item: Option<&'a ListItem>, theme: &'a Theme) -> Self {
        Self { item, theme }
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(" Preview ", self.theme.header_style))
    }

    /// Renders the "no highlight" placeholder.
    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled("No snippet highlighted", self.theme.dimmed_style())),
        ]);

        Paragraph::new(text)
            .block(self.block())
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_marker(&self, marker: NavigationMarker, area: Rect, buf: &mut Buffer) {
        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(marker.label(), self.theme.marker_style())),
            Line::from(""),
            Line::from(Span::styled(marker.description(), self.theme.dimmed_style())),
        ]);

        Paragraph::new(text)
            .block(self.block())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_record(&self, record: &'a DisplayRecord, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("File: ", label),
                Span::styled(
                    record.label.as_str(),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Path: ", label),
                Span::styled(record.absolute_path.as_str(), self.theme.base_style()),
            ]),
        ];
        if let Some(language) = language_for_path(&record.absolute_path) {
            lines.push(Line::from(vec![
                Span::styled("Language: ", label),
                Span::styled(language, self.theme.base_style()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("─── Preview ───", label)));

        match record.preview.as_deref() {
            Some(preview) => lines.extend(
                preview
                    .split('\n')
                    .map(|line| Line::from(Span::styled(line, self.theme.base_style()))),
            ),
            None => lines.push(Line::from(Span::styled(
                "Loading preview…",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ))),
        }

        Paragraph::new(Text::from(lines))
            .block(self.block())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl Widget for &PreviewPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.item {
            Some(ListItem::Record(record)) => self.render_record(record, area, buf),
            Some(ListItem::Marker(marker)) => self.render_marker(*marker, area, buf),
            None => self.render_placeholder(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(item: Option<&ListItem>) -> String {
        let theme = Theme::dark();
        let pane = PreviewPane::new(item, &theme);
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(&pane, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn record(preview: Option<&str>) -> ListItem {
        ListItem::Record(DisplayRecord {
            label: "query.sql".into(),
            description: "snips/query.sql".into(),
            absolute_path: Utf8PathBuf::from("/snips/query.sql"),
            preview: preview.map(ToOwned::to_owned),
        })
    }

    #[test]
    fn test_record_with_preview() {
        let text = draw(Some(&record(Some("SELECT *\nFROM t;"))));
        assert!(text.contains("File: query.sql"));
        assert!(text.contains("Language: sql"));
        assert!(text.contains("SELECT *"));
        assert!(text.contains("FROM t;"));
        assert!(!text.contains("Loading preview"));
    }

    #[test]
    fn test_record_without_preview() {
        let text = draw(Some(&record(None)));
        assert!(text.contains("Loading preview…"));
    }

    #[test]
    fn test_marker_shows_hint() {
        let text = draw(Some(&ListItem::Marker(NavigationMarker::NextPage)));
        assert!(text.contains("Next Page →"));
    }

    #[test]
    fn test_placeholder() {
        assert!(draw(None).contains("No snippet highlighted"));
    }
}
