//! The list-widget collaborator contract.
//!
//! A session drives a host widget through [`ListWidget`]: it pushes item
//! lists with [`ListWidget::render`] and pulls user input with
//! [`ListWidget::next_event`]. The widget never decides what to show.
//!
//! # Event Flow
//!
//! ```text
//! widget ──WidgetEvent──► Session ──► PaginatedSelector
//!   ▲                                      │
//!   └────────────── RenderFrame ◄──────────┘
//! ```

use std::future::Future;

use snip_core::ListItem;

/// A render request.
///
/// With `active: None` the item list is new: the widget moves its highlight to
/// the first item and reports that as a highlight change. With
/// `active: Some(index)` only the item at `index` changed (a preview was
/// attached); the widget keeps its highlight there and reports nothing.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// The full item list, markers included.
    pub items: &'a [ListItem],
    /// Status text for the query line.
    pub placeholder: &'a str,
    /// The item this render is scoped to, if any.
    pub active: Option<usize>,
}

impl RenderFrame<'_> {
    /// Returns `true` if this render only refreshes the active item.
    #[must_use]
    pub const fn is_scoped(&self) -> bool {
        self.active.is_some()
    }
}

/// User input reported by a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The query text changed.
    QueryChanged(String),
    /// The highlighted item changed; `None` when the list is empty.
    HighlightChanged(Option<ListItem>),
    /// The user accepted the selected item.
    Accept,
    /// The user dismissed the widget.
    Dismiss,
}

/// A host widget rendering a filterable, single-selection list.
pub trait ListWidget {
    /// Error produced when rendering fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Replaces the shown item list and placeholder.
    fn render(&mut self, frame: RenderFrame<'_>) -> Result<(), Self::Error>;

    /// Waits for the next user event. `None` means the event source is gone.
    ///
    /// Must be cancel-safe: a dropped call loses no event.
    fn next_event(&mut self) -> impl Future<Output = Option<WidgetEvent>>;

    /// The currently selected item.
    fn selected_item(&self) -> Option<ListItem>;

    /// The highlighted items. A single-selection widget reports at most one.
    fn highlighted_items(&self) -> Vec<ListItem> {
        self.selected_item().into_iter().collect()
    }

    /// Tears the widget down. Called exactly once per shown session.
    fn dispose(&mut self);
}

/// Owns a widget for the lifetime of a session and disposes it exactly once,
/// on [`WidgetGuard::dispose`] or on drop.
#[derive(Debug)]
pub struct WidgetGuard<W: ListWidget> {
    widget: W,
    disposed: bool,
}

impl<W: ListWidget> WidgetGuard<W> {
    /// Takes ownership of `widget`.
    #[must_use]
    pub const fn new(widget: W) -> Self {
        Self {
            widget,
            disposed: false,
        }
    }

    /// The guarded widget.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// The guarded widget.
    #[must_use]
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Returns `true` once the widget has been torn down.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Disposes the widget if that hasn't happened yet.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.widget.dispose();
            tracing::debug!("Disposed list widget");
        }
    }
}

impl<W: ListWidget> Drop for WidgetGuard<W> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::convert::Infallible;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use tokio::sync::mpsc;

    use super::*;

    /// One scripted user action.
    #[derive(Debug, Clone)]
    pub(crate) enum Step {
        Query(String),
        Highlight(usize),
        Accept,
        Dismiss,
    }

    /// A copy of one render request.
    #[derive(Debug, Clone)]
    pub(crate) struct Rendered {
        pub(crate) items: Vec<ListItem>,
        pub(crate) placeholder: String,
        pub(crate) active: Option<usize>,
    }

    /// Test-side controls of a [`ScriptedWidget`].
    pub(crate) struct ScriptHandle {
        pub(crate) steps: mpsc::UnboundedSender<Step>,
        pub(crate) rendered: Arc<Mutex<Vec<Rendered>>>,
        pub(crate) disposals: Arc<AtomicUsize>,
    }

    impl ScriptHandle {
        pub(crate) fn send(&self, step: Step) {
            self.steps.send(step).unwrap();
        }

        pub(crate) fn frames(&self) -> Vec<Rendered> {
            self.rendered.lock().clone()
        }

        pub(crate) fn disposals(&self) -> usize {
            self.disposals.load(Ordering::SeqCst)
        }
    }

    /// A widget that replays [`Step`]s and behaves like the terminal widget:
    /// a fresh item list highlights the first item and reports it.
    pub(crate) struct ScriptedWidget {
        steps: mpsc::UnboundedReceiver<Step>,
        items: Vec<ListItem>,
        selected: Option<usize>,
        pending_highlight: bool,
        rendered: Arc<Mutex<Vec<Rendered>>>,
        disposals: Arc<AtomicUsize>,
    }

    pub(crate) fn scripted() -> (ScriptedWidget, ScriptHandle) {
        let (steps_tx, steps_rx) = mpsc::unbounded_channel();
        let rendered = Arc::new(Mutex::new(Vec::new()));
        let disposals = Arc::new(AtomicUsize::new(0));
        let widget = ScriptedWidget {
            steps: steps_rx,
            items: Vec::new(),
            selected: None,
            pending_highlight: false,
            rendered: Arc::clone(&rendered),
            disposals: Arc::clone(&disposals),
        };
        let handle = ScriptHandle {
            steps: steps_tx,
            rendered,
            disposals,
        };
        (widget, handle)
    }

    impl ListWidget for ScriptedWidget {
        type Error = Infallible;

        fn render(&mut self, frame: RenderFrame<'_>) -> Result<(), Infallible> {
            self.rendered.lock().push(Rendered {
                items: frame.items.to_vec(),
                placeholder: frame.placeholder.to_owned(),
                active: frame.active,
            });
            self.items = frame.items.to_vec();
            if let Some(active) = frame.active {
                self.selected = Some(active);
            } else {
                self.selected = if self.items.is_empty() { None } else { Some(0) };
                self.pending_highlight = true;
            }
            Ok(())
        }

        async fn next_event(&mut self) -> Option<WidgetEvent> {
            if self.pending_highlight {
                self.pending_highlight = false;
                return Some(WidgetEvent::HighlightChanged(self.selected_item()));
            }
            let event = match self.steps.recv().await? {
                Step::Query(query) => WidgetEvent::QueryChanged(query),
                Step::Highlight(index) => {
                    self.selected = Some(index).filter(|i| *i < self.items.len());
                    WidgetEvent::HighlightChanged(self.selected_item())
                }
                Step::Accept => WidgetEvent::Accept,
                Step::Dismiss => WidgetEvent::Dismiss,
            };
            Some(event)
        }

        fn selected_item(&self) -> Option<ListItem> {
            self.selected.and_then(|index| self.items.get(index).cloned())
        }

        fn dispose(&mut self) {
            self.disposals.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingWidget {
        disposals: Arc<AtomicUsize>,
    }

    impl ListWidget for CountingWidget {
        type Error = Infallible;

        fn render(&mut self, _frame: RenderFrame<'_>) -> Result<(), Infallible> {
            Ok(())
        }

        async fn next_event(&mut self) -> Option<WidgetEvent> {
            None
        }

        fn selected_item(&self) -> Option<ListItem> {
            None
        }

        fn dispose(&mut self) {
            self.disposals.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_guard_disposes_once() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let mut guard = WidgetGuard::new(CountingWidget {
            disposals: Arc::clone(&disposals),
        });
        guard.dispose();
        guard.dispose();
        drop(guard);
        assert_eq!(disposals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_disposes_on_drop() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let guard = WidgetGuard::new(CountingWidget {
            disposals: Arc::clone(&disposals),
        });
        assert!(!guard.is_disposed());
        drop(guard);
        assert_eq!(disposals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_highlighted_items_defaults_to_selection() {
        let widget = CountingWidget {
            disposals: Arc::new(AtomicUsize::new(0)),
        };
        assert!(widget.highlighted_items().is_empty());
    }
}
