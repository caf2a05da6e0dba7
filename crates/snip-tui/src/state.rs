//! Highlight and scroll state of the item list.

/// State for the item list widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Currently highlighted index (if any).
    pub selected: Option<usize>,

    /// Scroll offset for virtualized rendering.
    pub scroll_offset: usize,

    /// Height of the visible area (for page navigation).
    pub visible_height: usize,
}

impl ListState {
    /// Creates a new list state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights the first item of a fresh list of `len` items.
    pub fn reset(&mut self, len: usize) {
        self.selected = if len == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    /// Moves the highlight to the next item, wrapping to the start.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0,
        });
        self.ensure_visible();
    }

    /// Moves the highlight to the previous item, wrapping to the end.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
        self.ensure_visible();
    }

    /// Moves the highlight to the first item.
    pub fn select_first(&mut self, len: usize) {
        self.reset(len);
    }

    /// Moves the highlight to the last item.
    pub fn select_last(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
        } else {
            self.selected = Some(len - 1);
            self.ensure_visible();
        }
    }

    /// Moves the highlight down by one screen.
    pub fn page_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let page_size = self.visible_height.max(1);
        self.selected = Some(match self.selected {
            Some(i) => (i + page_size).min(len - 1),
            None => page_size.min(len - 1),
        });
        self.ensure_visible();
    }

    /// Moves the highlight up by one screen.
    pub fn page_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let page_size = self.visible_height.max(1);
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(page_size)));
        self.ensure_visible();
    }

    /// Highlights `index` if it is in range.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = Some(index);
            self.ensure_visible();
        }
    }

    /// Scrolls so the highlighted item is visible.
    fn ensure_visible(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let height = self.visible_height.max(1);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + height {
            self.scroll_offset = selected + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = ListState::new();
        state.visible_height = 10;

        state.select_next(0);
        assert!(state.selected.is_none());

        state.select_next(5);
        assert_eq!(state.selected, Some(0));
        state.select_next(5);
        assert_eq!(state.selected, Some(1));

        state.select_last(5);
        assert_eq!(state.selected, Some(4));
        state.select_next(5);
        assert_eq!(state.selected, Some(0));
        state.select_previous(5);
        assert_eq!(state.selected, Some(4));

        state.select_first(5);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_paging_scrolls() {
        let mut state = ListState::new();
        state.visible_height = 10;
        state.reset(51);

        state.page_down(51);
        assert_eq!(state.selected, Some(10));
        assert_eq!(state.scroll_offset, 1);

        state.select_last(51);
        assert_eq!(state.selected, Some(50));
        assert_eq!(state.scroll_offset, 41);

        state.page_up(51);
        assert_eq!(state.selected, Some(40));
        assert_eq!(state.scroll_offset, 40);
    }

    #[test]
    fn test_reset_on_empty_list() {
        let mut state = ListState::new();
        state.selected = Some(3);
        state.scroll_offset = 2;
        state.reset(0);
        assert_eq!(state, ListState::new());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = ListState::new();
        state.reset(3);
        state.select(7, 3);
        assert_eq!(state.selected, Some(0));
    }
}
