//! The picker's view model.
//!
//! [`PickerView`] holds what the terminal shows: the item list and
//! placeholder pushed by the session, the query being typed, and the list
//! highlight. It turns render requests and key actions into the
//! [`WidgetEvent`]s the session consumes, without touching the terminal.

use snip_core::ListItem;
use snip_picker::{RenderFrame, WidgetEvent};

use crate::action::KeyAction;
use crate::state::ListState;

/// View state of the terminal picker.
#[derive(Debug, Clone, Default)]
pub struct PickerView {
    items: Vec<ListItem>,
    placeholder: String,
    query: String,
    list: ListState,
}

impl PickerView {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shown items.
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// The placeholder text of the last render.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The query typed so far.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The list highlight state.
    #[must_use]
    pub const fn list_state(&self) -> &ListState {
        &self.list
    }

    /// The items together with the mutable list state, for rendering.
    pub fn list_parts_mut(&mut self) -> (&[ListItem], &mut ListState) {
        (&self.items, &mut self.list)
    }

    /// The highlighted item.
    #[must_use]
    pub fn highlighted(&self) -> Option<&ListItem> {
        self.list.selected.and_then(|index| self.items.get(index))
    }

    /// Number of file records shown, markers excluded.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.as_marker().is_none())
            .count()
    }

    /// Applies a render request.
    ///
    /// A new item list moves the highlight to the first item and returns the
    /// highlight change to report. A scoped render keeps the highlight on the
    /// active item and reports nothing.
    pub fn apply(&mut self, frame: RenderFrame<'_>) -> Option<WidgetEvent> {
        frame.items.clone_into(&mut self.items);
        frame.placeholder.clone_into(&mut self.placeholder);

        match frame.active {
            Some(index) => {
                self.list.select(index, self.items.len());
                None
            }
            None => {
                self.list.reset(self.items.len());
                Some(WidgetEvent::HighlightChanged(self.highlighted().cloned()))
            }
        }
    }

    /// Applies a key action and returns the event to report, if any.
    pub fn handle_action(&mut self, action: KeyAction) -> Option<WidgetEvent> {
        let len = self.items.len();
        let before = self.list.selected;

        match action {
            KeyAction::NextItem => self.list.select_next(len),
            KeyAction::PreviousItem => self.list.select_previous(len),
            KeyAction::FirstItem => self.list.select_first(len),
            KeyAction::LastItem => self.list.select_last(len),
            KeyAction::PageDown => self.list.page_down(len),
            KeyAction::PageUp => self.list.page_up(len),
            KeyAction::Insert(c) => {
                self.query.push(c);
                return Some(self.query_changed());
            }
            KeyAction::Backspace => {
                return self.query.pop().map(|_| self.query_changed());
            }
            KeyAction::ClearQuery => {
                if self.query.is_empty() {
                    return None;
                }
                self.query.clear();
                return Some(self.query_changed());
            }
            KeyAction::Accept => return Some(WidgetEvent::Accept),
            KeyAction::Dismiss => return Some(WidgetEvent::Dismiss),
            KeyAction::None => return None,
        }

        (self.list.selected != before)
            .then(|| WidgetEvent::HighlightChanged(self.highlighted().cloned()))
    }

    /// Appends pasted text to the query. Only the first line is kept.
    pub fn paste(&mut self, text: &str) -> Option<WidgetEvent> {
        let line = text.lines().next().unwrap_or_default();
        let clean: String = line.chars().filter(|c| !c.is_control()).collect();
        if clean.is_empty() {
            return None;
        }
        self.query.push_str(&clean);
        Some(self.query_changed())
    }

    fn query_changed(&self) -> WidgetEvent {
        WidgetEvent::QueryChanged(self.query.clone())
    }
}
