//! Picker layout and rendering orchestration.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | Insert Snippet                                                   |
//! | ▌Select a snippet file to insert (Page 1 of 3). Use ↑/↓ ...      |
//! +------------------------------------------------------------------+
//! |  Snippets (50)                      |  Preview                   |
//! |  ▸ iter.rs     snips/rust/iter.rs   |  File: iter.rs             |
//! |    map.rs      snips/rust/map.rs    |  Path: /home/u/snips/...   |
//! |    Next Page →                      |  ─── Preview ───           |
//! +------------------------------------------------------------------+
//! | BROWSE  ↑/↓ navigate  PgUp/PgDn scroll  Enter select  Esc cancel |
//! +------------------------------------------------------------------+
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::components::{ItemListView, PreviewPane, QueryInput, StatusBar};
use crate::theme::Theme;
use crate::view::PickerView;

/// Renders the whole picker.
pub fn render(view: &mut PickerView, frame: &mut Frame, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query
            Constraint::Min(5),    // List + preview
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let query = QueryInput::new(view.query(), view.placeholder(), theme);
    frame.render_widget(&query, chunks[0]);

    render_main_content(view, frame, chunks[1], theme);

    let status_bar = StatusBar::new(view.query(), view.record_count(), theme);
    frame.render_widget(&status_bar, chunks[2]);
}

/// Renders the item list and the preview pane side by side.
fn render_main_content(view: &mut PickerView, frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let preview = PreviewPane::new(view.highlighted(), theme);
    frame.render_widget(&preview, chunks[1]);

    let (items, state) = view.list_parts_mut();
    let list = ItemListView::new(items, theme);
    frame.render_stateful_widget(&list, chunks[0], state);
}
