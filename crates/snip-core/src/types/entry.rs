//! Catalog entries.

use std::sync::Arc;

use camino::Utf8PathBuf;

use super::root::RootFolder;

/// Leading character of hidden files and folders.
pub const HIDDEN_MARKER: char = '.';

/// Returns `true` if any segment of `path` starts with [`HIDDEN_MARKER`].
///
/// Segments are split on `/` only. `.` and `..` segments count as hidden.
///
/// # Examples
///
/// ```
/// use snip_core::has_hidden_segment;
///
/// assert!(has_hidden_segment("snips/.git/config"));
/// assert!(!has_hidden_segment("snips/rust/main.rs"));
/// ```
#[must_use]
pub fn has_hidden_segment(path: &str) -> bool {
    path.split('/')
        .any(|segment| segment.starts_with(HIDDEN_MARKER))
}

/// A file discovered under one of the snippet roots.
///
/// `relative_path` always uses `/` as separator and never contains a hidden
/// segment. Entries are unique by `(source_root, relative_path)`; the same
/// relative path may appear under two roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    /// Path relative to the source root, `/`-separated.
    pub relative_path: String,
    /// The root folder this file was found under.
    pub source_root: Arc<RootFolder>,
}

impl CatalogEntry {
    /// Creates an entry for `relative_path` under `source_root`.
    #[must_use]
    pub fn new(source_root: Arc<RootFolder>, relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            source_root,
        }
    }

    /// Returns the file name (last segment of the relative path).
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }

    /// Returns the absolute path of the file.
    ///
    /// Each relative segment is joined onto the root path, so the result uses
    /// the platform separator regardless of how `relative_path` is spelled.
    #[must_use]
    pub fn absolute_path(&self) -> Utf8PathBuf {
        let mut path = self.source_root.path.clone();
        for segment in self.relative_path.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }
}
