//! UI components for the picker.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): Stateless rendering - `QueryInput`, `PreviewPane`, `StatusBar`
//! - **Stateful Widgets** (`StatefulWidget` trait): Highlight/scroll state - `ItemListView`

mod item_list;
mod preview_pane;
mod query_input;
mod status_bar;

pub use item_list::ItemListView;
pub use preview_pane::PreviewPane;
pub use query_input::QueryInput;
pub use status_bar::StatusBar;
