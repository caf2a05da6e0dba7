//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for handling errors
//! that can occur while driving the terminal.

use thiserror::Error;

/// Errors that can occur in the TUI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The terminal event stream ended unexpectedly.
    #[error("terminal event stream closed unexpectedly")]
    ChannelClosed,
}

impl TuiError {
    /// Returns `true` if the terminal itself failed.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}
