//! Error types for the snip-picker crate.

use camino::Utf8PathBuf;

use crate::insertion::SurfaceError;

/// Boxed error reported by a list widget implementation.
pub type WidgetFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during a selection session.
///
/// # Error Recovery Strategy
///
/// - **Content read errors** ([`PickerError::ContentRead`]): Reported to the
///   user, the session closes
/// - **Insertion errors** ([`PickerError::Insertion`]): Reported to the user,
///   the process stays up
/// - **Widget errors** ([`PickerError::Widget`]): The session is torn down and
///   the error is returned to the host
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// The chosen snippet file could not be read.
    #[error("Failed to read snippet file: {path}: {source}")]
    ContentRead {
        /// The file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The editing surface rejected the edit.
    #[error("Failed to insert snippet: {0}")]
    Insertion(#[from] SurfaceError),

    /// The list widget failed to render.
    #[error("list widget error: {0}")]
    Widget(#[source] WidgetFailure),
}

impl PickerError {
    /// Creates a new [`PickerError::ContentRead`] error.
    #[inline]
    pub fn content_read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::ContentRead {
            path: path.into(),
            source,
        }
    }

    /// Wraps a widget implementation error.
    #[inline]
    pub fn widget(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Widget(Box::new(source))
    }

    /// Returns `true` if the process can carry on after reporting this error.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ContentRead { .. } | Self::Insertion(_))
    }
}
