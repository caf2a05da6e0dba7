//! Core types, configuration, and errors for the snip snippet picker.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Configuration structures ([`Config`] and its sections)
//! - Error types for configuration handling ([`ConfigError`])
//! - Domain types ([`RootFolder`], [`CatalogEntry`], [`DisplayRecord`],
//!   [`ListItem`], [`PageState`])
//! - The display projection between catalog entries and list records
//! - Preview truncation and language inference helpers
//! - The [`Notifier`] collaborator for user-visible messages

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod language;
pub mod notify;
pub mod preview;
pub mod types;

pub use config::{CatalogConfig, ColorScheme, Config, PickerConfig, PreviewConfig, TuiConfig};
pub use error::ConfigError;
pub use language::language_for_path;
pub use notify::{Notification, NotificationLog, Notifier, Severity};
pub use preview::{PreviewLimits, TRUNCATION_MARKER, render_preview};
pub use types::{
    CatalogEntry, DisplayRecord, HIDDEN_MARKER, ListItem, NavigationMarker, PageState, RootFolder,
    has_hidden_segment,
};
