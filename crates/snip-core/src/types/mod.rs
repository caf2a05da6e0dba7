//! Domain types for the snippet picker.
//!
//! # Module Organization
//!
//! - `root` - Configured snippet folders ([`RootFolder`])
//! - `entry` - Catalog entries and the hidden-segment rule
//! - `record` - Display records and the projection from catalog entries
//! - `item` - Rendered list items, including navigation markers
//! - `page` - Pagination state
//!
//! All public types are re-exported at this module level and at the crate root:
//!
//! ```
//! use snip_core::{CatalogEntry, DisplayRecord, ListItem, PageState, RootFolder};
//! ```

mod entry;
mod item;
mod page;
mod record;
mod root;

pub use entry::{CatalogEntry, HIDDEN_MARKER, has_hidden_segment};
pub use item::{ListItem, NavigationMarker};
pub use page::PageState;
pub use record::DisplayRecord;
pub use root::RootFolder;
