//! The selection state machine.
//!
//! [`PaginatedSelector`] holds the projected catalog for one session and
//! rebuilds the rendered item list from scratch after every state-producing
//! event.
//!
//! # States
//!
//! ```text
//!          open                 query ≠ ""
//! Idle ──────────► Browsing ◄─────────────► Filtering
//!                  │  ▲   │     query = ""       │
//!          marker  └──┘   │                      │
//!                         ▼ accept / dismiss     ▼
//!                       Closed ◄─────────────────┘
//! ```
//!
//! Navigation markers only exist in `Browsing`, only when there is more than
//! one page, and never on the boundary they would cross.

use camino::Utf8Path;
use snip_core::{CatalogEntry, DisplayRecord, ListItem, NavigationMarker, PageState};

use crate::filter::SearchFilter;
use crate::widget::RenderFrame;

/// Usage hint appended to every placeholder.
pub const USAGE_HINT: &str = "Use ↑/↓ arrows to navigate, Enter to select, Esc to cancel.";

/// Session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// Not shown yet.
    #[default]
    Idle,
    /// Paged view of the full catalog.
    Browsing,
    /// Flat, unpaged view of the entries matching `query`.
    Filtering {
        /// The non-empty query.
        query: String,
    },
    /// Terminal state.
    Closed,
}

/// What accepting an item did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance {
    /// The selector is not open, or a marker was accepted while filtering.
    Ignored,
    /// A navigation marker moved to another page; the session stays open.
    PageChanged,
    /// The session closed without a file (nothing selected, or no path).
    Closed,
    /// The session closed on this record.
    Chosen(DisplayRecord),
}

/// The paginated, filterable selection state machine.
#[derive(Debug)]
pub struct PaginatedSelector {
    records: Vec<DisplayRecord>,
    filter: SearchFilter,
    page: PageState,
    state: SelectorState,
    items: Vec<ListItem>,
    placeholder: String,
}

impl PaginatedSelector {
    /// Projects `entries` and prepares an idle selector.
    #[must_use]
    pub fn new(entries: &[CatalogEntry], page_size: usize) -> Self {
        let records: Vec<DisplayRecord> = entries.iter().map(DisplayRecord::from_entry).collect();
        let filter = SearchFilter::new(&records);
        let page = PageState::new(records.len(), page_size);
        Self {
            records,
            filter,
            page,
            state: SelectorState::Idle,
            items: Vec::new(),
            placeholder: String::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Pagination of the unfiltered view.
    #[must_use]
    pub const fn page(&self) -> &PageState {
        &self.page
    }

    /// Returns `true` while browsing or filtering.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(
            self.state,
            SelectorState::Browsing | SelectorState::Filtering { .. }
        )
    }

    /// Returns `true` once closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.state, SelectorState::Closed)
    }

    /// The rendered item list.
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// The rendered placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The current render request.
    #[must_use]
    pub fn frame(&self, active: Option<usize>) -> RenderFrame<'_> {
        RenderFrame {
            items: &self.items,
            placeholder: &self.placeholder,
            active,
        }
    }

    /// `Idle → Browsing` on page 0. Returns `false` in any other state.
    pub fn open(&mut self) -> bool {
        if self.state != SelectorState::Idle {
            return false;
        }
        self.page.reset();
        self.state = SelectorState::Browsing;
        self.rebuild();
        tracing::debug!(
            records = self.records.len(),
            pages = self.page.total_pages(),
            "Opened selector"
        );
        true
    }

    /// Applies a query change. Returns `true` if the item list was rebuilt.
    ///
    /// A non-empty query enters `Filtering`; an empty one returns to
    /// `Browsing`, on page 0 when leaving `Filtering`.
    pub fn set_query(&mut self, query: &str) -> bool {
        if !self.is_open() {
            return false;
        }

        if query.is_empty() {
            if matches!(self.state, SelectorState::Filtering { .. }) {
                self.page.reset();
                tracing::debug!("Leaving filter mode");
            }
            self.state = SelectorState::Browsing;
        } else {
            self.state = SelectorState::Filtering {
                query: query.to_owned(),
            };
        }
        self.rebuild();
        true
    }

    /// Resolves the accepted item.
    pub fn accept(&mut self, item: Option<&ListItem>) -> Acceptance {
        if !self.is_open() {
            return Acceptance::Ignored;
        }

        match item {
            Some(ListItem::Marker(marker)) => self.navigate(*marker),
            Some(ListItem::Record(record)) if !record.absolute_path.as_str().is_empty() => {
                let mut chosen = record.clone();
                chosen.preview = None;
                self.close();
                Acceptance::Chosen(chosen)
            }
            Some(ListItem::Record(_)) | None => {
                self.close();
                Acceptance::Closed
            }
        }
    }

    /// `→ Closed` on explicit dismissal. Returns `false` if already closed.
    pub fn dismiss(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.close();
        true
    }

    /// Attaches `preview` to the first rendered record at `path` and clears
    /// every other record's preview.
    ///
    /// Returns the index of the record that received the preview.
    pub fn attach_preview(&mut self, path: &Utf8Path, preview: String) -> Option<usize> {
        let mut preview = Some(preview);
        let mut attached = None;

        for (index, item) in self.items.iter_mut().enumerate() {
            let ListItem::Record(record) = item else {
                continue;
            };
            if attached.is_none() && record.absolute_path.as_path() == path {
                record.preview = preview.take();
                attached = Some(index);
            } else {
                record.preview = None;
            }
        }

        attached
    }

    fn navigate(&mut self, marker: NavigationMarker) -> Acceptance {
        if self.state != SelectorState::Browsing {
            return Acceptance::Ignored;
        }
        match marker {
            NavigationMarker::PreviousPage => self.page.previous(),
            NavigationMarker::NextPage => self.page.next(),
        }
        self.rebuild();
        tracing::debug!(page = self.page.page_index(), "Changed page");
        Acceptance::PageChanged
    }

    fn close(&mut self) {
        self.state = SelectorState::Closed;
        self.items.clear();
        tracing::debug!("Closed selector");
    }

    fn rebuild(&mut self) {
        self.items.clear();

        match &self.state {
            SelectorState::Browsing => {
                if self.page.has_previous() {
                    self.items.push(NavigationMarker::PreviousPage.into());
                }
                let bounds = self.page.bounds(self.records.len());
                self.items
                    .extend(self.records[bounds].iter().cloned().map(ListItem::Record));
                if self.page.has_next() {
                    self.items.push(NavigationMarker::NextPage.into());
                }
                self.placeholder = format!(
                    "Select a snippet file to insert (Page {} of {}). {USAGE_HINT}",
                    self.page.page_index() + 1,
                    self.page.total_pages()
                );
            }
            SelectorState::Filtering { query } => {
                let matches = self.filter.matches(query);
                self.items.extend(
                    matches
                        .iter()
                        .map(|&index| ListItem::Record(self.records[index].clone())),
                );
                self.placeholder = format!(
                    "Select a snippet file to insert ({} results). {USAGE_HINT}",
                    matches.len()
                );
            }
            SelectorState::Idle | SelectorState::Closed => {}
        }
    }
}
