//! Key bindings of the picker.
//!
//! Key events map to a [`KeyAction`], which the picker view applies to its
//! list and query state.
//!
//! # Action Flow
//!
//! ```text
//! KeyEvent → map_key → KeyAction → PickerView → WidgetEvent
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the picker to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyAction {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move the highlight to the next item.
    NextItem,

    /// Move the highlight to the previous item.
    PreviousItem,

    /// Move the highlight to the first item.
    FirstItem,

    /// Move the highlight to the last item.
    LastItem,

    /// Move the highlight down by one screen.
    PageDown,

    /// Move the highlight up by one screen.
    PageUp,

    // =========================================================================
    // Query editing
    // =========================================================================
    /// Append a character to the query.
    Insert(char),

    /// Remove the last query character.
    Backspace,

    /// Clear the whole query.
    ClearQuery,

    // =========================================================================
    // Session control
    // =========================================================================
    /// Accept the highlighted item.
    Accept,

    /// Close the picker without choosing.
    Dismiss,

    /// The key has no binding.
    #[default]
    None,
}

impl KeyAction {
    /// Returns `true` if this action moves the highlight.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NextItem
                | Self::PreviousItem
                | Self::FirstItem
                | Self::LastItem
                | Self::PageDown
                | Self::PageUp
        )
    }

    /// Returns `true` if this action edits the query.
    #[must_use]
    pub const fn edits_query(self) -> bool {
        matches!(self, Self::Insert(_) | Self::Backspace | Self::ClearQuery)
    }
}

/// Maps a key press to its action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => KeyAction::Dismiss,
        KeyCode::Char('u') if ctrl => KeyAction::ClearQuery,
        KeyCode::Char('n' | 'j') if ctrl => KeyAction::NextItem,
        KeyCode::Char('p' | 'k') if ctrl => KeyAction::PreviousItem,
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => KeyAction::None,
        KeyCode::Char(c) => KeyAction::Insert(c),
        KeyCode::Down | KeyCode::Tab => KeyAction::NextItem,
        KeyCode::Up | KeyCode::BackTab => KeyAction::PreviousItem,
        KeyCode::Home => KeyAction::FirstItem,
        KeyCode::End => KeyAction::LastItem,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Enter => KeyAction::Accept,
        KeyCode::Esc => KeyAction::Dismiss,
        _ => KeyAction::None,
    }
}
