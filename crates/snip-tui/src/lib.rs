//! Terminal list widget for the snip snippet picker, using Ratatui.
//!
//! This crate provides [`TerminalPicker`], an implementation of
//! [`snip_picker::ListWidget`] that shows the session's items in a
//! full-screen terminal UI: a query line, the item list, a preview pane for
//! the highlighted item, and a key-hint status bar.
//!
//! # Architecture
//!
//! ```text
//! crates/snip-tui/src/
//!   lib.rs           # Public API exports
//!   picker.rs        # TerminalPicker (the ListWidget implementation)
//!   view.rs          # PickerView: items, query, highlight → WidgetEvents
//!   event.rs         # Terminal events (Key, Paste, Resize)
//!   tui.rs           # Terminal wrapper with async event streaming
//!   action.rs        # Key bindings
//!   state.rs         # List highlight and scroll state
//!   ui.rs            # Layout rendering orchestration
//!   theme.rs         # Color scheme and styling constants
//!   error.rs         # TUI-specific error types
//!   components/
//!     item_list.rs     # ItemListView
//!     query_input.rs   # QueryInput with the placeholder
//!     preview_pane.rs  # PreviewPane for the highlighted item
//!     status_bar.rs    # StatusBar with key hints
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use snip_picker::insert_code_snippet;
//! use snip_tui::{TerminalPicker, Theme};
//!
//! let picker = TerminalPicker::new(Theme::from_scheme(config.tui.color_scheme));
//! let outcome = insert_code_snippet(&config, fs, &log, picker, &mut editor).await?;
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod components;
pub mod error;
pub mod event;
pub mod picker;
pub mod state;
pub mod theme;
pub mod tui;
pub mod ui;
pub mod view;

pub use action::{KeyAction, map_key};
pub use error::TuiError;
pub use event::Event;
pub use picker::TerminalPicker;
pub use state::ListState;
pub use theme::Theme;
pub use tui::Tui;
pub use view::PickerView;
