//! Error types for the snip-catalog crate.
//!
//! This module provides the [`CatalogError`] type for errors that can occur
//! while validating snippet folders and enumerating their files.

use camino::Utf8PathBuf;

/// Errors that can occur while building the snippet catalog.
///
/// The `Display` text of the folder variants is the message shown to the
/// user.
///
/// # Error Recovery Strategy
///
/// - **Configuration errors** ([`CatalogError::NoFoldersConfigured`],
///   [`CatalogError::NoValidFolders`], [`CatalogError::NoAccessibleFolders`]):
///   Fatal - the session is not shown
/// - **Enumeration errors** ([`CatalogError::Enumeration`]): Log warning,
///   treat the directory as empty, continue the walk
/// - **Empty catalog** ([`CatalogError::EmptyCatalog`]): Reported as a
///   warning, the session is not shown
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The folder list is empty.
    #[error("Please configure at least one snippet folder in settings (snippet_folders).")]
    NoFoldersConfigured,

    /// Every configured entry was blank or hidden.
    #[error("No valid snippet folders configured.")]
    NoValidFolders,

    /// Every checked folder failed the existence check.
    #[error("No snippet folders are accessible. Checked: {}", .checked.join(", "))]
    NoAccessibleFolders {
        /// The folders that were checked, in configuration order.
        checked: Vec<String>,
    },

    /// A directory could not be listed.
    #[error("failed to read directory {path}: {source}")]
    Enumeration {
        /// The directory that couldn't be listed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// All roots were valid but none contained a visible file.
    #[error("No files found in any of the snippet folders.")]
    EmptyCatalog,
}

impl CatalogError {
    /// Creates a new [`CatalogError::Enumeration`] error.
    #[inline]
    pub fn enumeration(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Enumeration {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error is recoverable (the walk can continue).
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Enumeration { .. })
    }

    /// Returns `true` if this error prevents the session from being shown.
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Returns the directory path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Enumeration { path, .. } => Some(path),
            Self::NoFoldersConfigured
            | Self::NoValidFolders
            | Self::NoAccessibleFolders { .. }
            | Self::EmptyCatalog => None,
        }
    }
}
