//! Terminal events consumed by the picker.
//!
//! Only the events the list widget reacts to are forwarded from crossterm:
//! key presses, bracketed paste, and resizes.

use crossterm::event::KeyEvent;

/// Events read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),

    /// Text pasted with bracketed paste.
    Paste(String),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl Event {
    /// Converts a crossterm event, dropping the kinds the picker ignores.
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

        match event {
            // Only handle key press events, not release
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            CrosstermEvent::Paste(text) => Some(Self::Paste(text)),
            CrosstermEvent::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }

    /// Returns the key event if this is a Key variant.
    #[inline]
    #[must_use]
    pub const fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}
