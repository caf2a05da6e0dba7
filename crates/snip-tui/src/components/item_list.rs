//! Item list component.
//!
//! Displays the current item list: file records with their description, and
//! navigation markers styled apart from them.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{
    Block, Borders, Cell, HighlightSpacing, Row, StatefulWidget, Table, TableState,
};
use snip_core::ListItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::ListState;
use crate::theme::Theme;

/// Widest the description column gets.
const DESCRIPTION_WIDTH: u16 = 48;

/// A stateful item list widget.
///
/// Uses [`StatefulWidget`] to keep the highlight and scroll position.
pub struct ItemListView<'a> {
    /// The items to display.
    items: &'a [ListItem],
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> ItemListView<'a> {
    /// Creates a new item list view.
    #[must_use]
    pub const fn new(items: &'a [ListItem], theme: &'a Theme) -> Self {
        Self { items, theme }
    }

    /// Builds a single table row for an item.
    fn build_row(&self, item: &'a ListItem) -> Row<'a> {
        let cells = match item {
            ListItem::Marker(marker) => vec![
                Cell::from(Span::styled(marker.label(), self.theme.marker_style())),
                Cell::from(""),
            ],
            ListItem::Record(record) => vec![
                Cell::from(Span::styled(record.label.as_str(), self.theme.base_style())),
                Cell::from(Span::styled(
                    truncate_start(&record.description, usize::from(DESCRIPTION_WIDTH)),
                    self.theme.dimmed_style(),
                )),
            ],
        };
        Row::new(cells).height(1)
    }
}

impl StatefulWidget for &ItemListView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Account for borders
        state.visible_height = usize::from(area.height.saturating_sub(2));

        let title = format!(" Snippets ({}) ", record_count(self.items));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(title, self.theme.header_style));

        let rows: Vec<Row<'_>> = self.items.iter().map(|item| self.build_row(item)).collect();
        let widths = [Constraint::Percentage(45), Constraint::Percentage(55)];

        let table = Table::new(rows, widths)
            .block(block)
            .row_highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        let mut table_state = TableState::default();
        table_state.select(state.selected);
        *table_state.offset_mut() = state.scroll_offset;

        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

/// Number of file records, markers excluded.
fn record_count(items: &[ListItem]) -> usize {
    items.iter().filter(|item| item.as_marker().is_none()).count()
}

/// Cuts `text` from the left so it fits in `max_width` columns.
fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    let ellipsis = "...";
    let budget = max_width.saturating_sub(ellipsis.len());
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > budget {
            break;
        }
        start = idx;
    }
    format!("{ellipsis}{}", &text[start..])
}
