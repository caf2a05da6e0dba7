//! The interactive snippet selection workflow.
//!
//! Given a catalog of snippet files, a session shows them page by page in a
//! host list widget, narrows them with a search query, previews the
//! highlighted file after a short debounce, and inserts the chosen file into
//! the host's editing surface.
//!
//! # Overview
//!
//! - [`SearchFilter`]: case-insensitive substring matching over the catalog
//! - [`PaginatedSelector`]: the browse/filter state machine and item lists
//! - [`PreviewService`]: debounced, stale-safe preview loading
//! - [`insert_snippet`]: selection replacement, cursor insertion, or a new
//!   document
//! - [`ListWidget`]: the host widget contract
//! - [`Session`]: drives one run of the workflow
//! - [`insert_code_snippet`]: the command entry point
//!
//! # Architecture
//!
//! ```text
//! insert_code_snippet
//!     │
//!     ├── FolderValidator + FileCatalog (snip-catalog)
//!     │
//!     └── Session
//!           ├── PaginatedSelector ── SearchFilter
//!           ├── PreviewService ──── Scheduler
//!           ├── WidgetGuard<ListWidget>
//!           └── insert_snippet ──── EditorSurface
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod filter;
pub mod insertion;
pub mod preview;
pub mod selector;
pub mod session;
pub mod widget;

pub use command::{InsertSnippetCommand, insert_code_snippet};
pub use error::{PickerError, WidgetFailure};
pub use filter::SearchFilter;
pub use insertion::{EditorSurface, InsertionKind, SurfaceError, insert_snippet};
pub use preview::{PreviewLoaded, PreviewService, Scheduler, TokioScheduler};
pub use selector::{Acceptance, PaginatedSelector, SelectorState, USAGE_HINT};
pub use session::{Session, SessionOutcome};
pub use widget::{ListWidget, RenderFrame, WidgetEvent, WidgetGuard};
