//! Snippet folder validation and multi-root file enumeration.
//!
//! This crate turns the configured snippet folders into the catalog a
//! selection session browses.
//!
//! # Overview
//!
//! - [`FileSystem`]: the asynchronous file-system collaborator, with
//!   [`LocalFs`] (tokio) and [`MemoryFs`] (in-memory) implementations
//! - [`FolderValidator`]: existence checks and hidden/blank filtering
//! - [`FileWalker`]: recursive enumeration with cycle and depth guards
//! - [`FileCatalog`]: the merged, locale-sorted entry list
//!
//! # Example
//!
//! ```ignore
//! use snip_catalog::{FileCatalog, FolderValidator, LocalFs};
//! use snip_core::{Config, NotificationLog};
//!
//! let config = Config::load(path)?;
//! let fs = LocalFs::new(config.catalog.follow_links);
//! let log = NotificationLog::new();
//!
//! let roots = FolderValidator::new(&fs).validate(&config.snippet_folders, &log).await?;
//! let catalog = FileCatalog::build(&fs, &roots, &config.catalog).await;
//! println!("{} snippets", catalog.len());
//! ```
//!
//! # Architecture
//!
//! ```text
//! configured folders
//!     │
//!     ├── FolderValidator (trim, hidden filter, exists)
//!     │
//!     ├── FileWalker (per root, depth-first)
//!     │       │
//!     │       └── FileSystem (list_directory, canonicalize)
//!     │
//!     └── FileCatalog (relative paths, hidden filter, stable locale sort)
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod fs;
pub mod validator;
pub mod walker;

pub use catalog::{FileCatalog, locale_cmp, relative_to_root};
pub use error::CatalogError;
pub use fs::{DirEntry, EntryKind, FileSystem, LocalFs, MemoryFs};
pub use validator::{FolderValidation, FolderValidator};
pub use walker::{FileWalker, WalkOutcome};
