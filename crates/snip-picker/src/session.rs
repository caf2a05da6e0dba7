//! The session driver.
//!
//! A [`Session`] wires the [`PaginatedSelector`] to a [`ListWidget`], the
//! [`PreviewService`] and the editing surface. All session state is mutated
//! on one task, between suspension points of a single `select!` loop over
//! widget events and finished preview loads.
//!
//! The widget is owned through a [`WidgetGuard`], so it is disposed exactly
//! once whichever way the session ends: acceptance, dismissal, a closed
//! event source, or an error.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use snip_catalog::FileSystem;
use snip_core::{CatalogEntry, Config, DisplayRecord, ListItem, Notifier};
use tokio::sync::mpsc;

use crate::error::PickerError;
use crate::insertion::{EditorSurface, InsertionKind, insert_snippet};
use crate::preview::{PreviewLoaded, PreviewService, Scheduler};
use crate::selector::{Acceptance, PaginatedSelector};
use crate::widget::{ListWidget, WidgetEvent, WidgetGuard};

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The catalog could not be built; the reason was already reported.
    NotShown,
    /// Closed without inserting anything.
    Dismissed,
    /// The chosen file was inserted.
    Inserted {
        /// The chosen file.
        path: Utf8PathBuf,
        /// How it was inserted.
        kind: InsertionKind,
    },
    /// Reading or inserting the chosen file failed; the error was reported.
    Failed(PickerError),
}

/// One run of the selection workflow.
pub struct Session<'a, W, F, E, N, S>
where
    W: ListWidget,
    S: Scheduler,
{
    selector: PaginatedSelector,
    widget: WidgetGuard<W>,
    fs: Arc<F>,
    editor: &'a mut E,
    notifier: &'a N,
    preview: PreviewService<F, S>,
    preview_rx: mpsc::UnboundedReceiver<PreviewLoaded>,
    highlighted: Option<Utf8PathBuf>,
}

impl<'a, W, F, E, N, S> Session<'a, W, F, E, N, S>
where
    W: ListWidget,
    F: FileSystem + 'static,
    E: EditorSurface,
    N: Notifier,
    S: Scheduler,
{
    /// Prepares a session over `entries`. Nothing is shown until
    /// [`run`](Self::run).
    #[must_use]
    pub fn new(
        entries: &[CatalogEntry],
        config: &Config,
        widget: W,
        fs: Arc<F>,
        scheduler: S,
        editor: &'a mut E,
        notifier: &'a N,
    ) -> Self {
        let (preview, preview_rx) = PreviewService::new(Arc::clone(&fs), scheduler, &config.preview);
        Self {
            selector: PaginatedSelector::new(entries, config.picker.page_size),
            widget: WidgetGuard::new(widget),
            fs,
            editor,
            notifier,
            preview,
            preview_rx,
            highlighted: None,
        }
    }

    /// Shows the first page and processes events until the session closes.
    pub async fn run(mut self) -> Result<SessionOutcome, PickerError> {
        self.selector.open();
        self.render(None)?;
        tracing::info!(
            pages = self.selector.page().total_pages(),
            "Snippet picker opened"
        );

        loop {
            tokio::select! {
                event = self.widget.widget_mut().next_event() => {
                    let Some(event) = event else {
                        tracing::debug!("Widget event source closed");
                        self.selector.dismiss();
                        return Ok(self.close(SessionOutcome::Dismissed));
                    };
                    if let Some(outcome) = self.handle_event(event).await? {
                        return Ok(outcome);
                    }
                }
                Some(loaded) = self.preview_rx.recv() => self.apply_preview(loaded)?,
            }
        }
    }

    async fn handle_event(
        &mut self,
        event: WidgetEvent,
    ) -> Result<Option<SessionOutcome>, PickerError> {
        match event {
            WidgetEvent::QueryChanged(query) => {
                if self.selector.set_query(&query) {
                    self.render(None)?;
                }
            }
            WidgetEvent::HighlightChanged(item) => {
                let path = item
                    .as_ref()
                    .and_then(ListItem::absolute_path)
                    .map(Utf8Path::to_path_buf);
                self.preview.on_highlight(path.as_deref());
                self.highlighted = path;
            }
            WidgetEvent::Accept => {
                let selected = self.widget.widget().selected_item();
                match self.selector.accept(selected.as_ref()) {
                    Acceptance::Ignored => {}
                    Acceptance::PageChanged => self.render(None)?,
                    Acceptance::Closed => return Ok(Some(self.close(SessionOutcome::Dismissed))),
                    Acceptance::Chosen(record) => return Ok(Some(self.finish(record).await)),
                }
            }
            WidgetEvent::Dismiss => {
                self.selector.dismiss();
                return Ok(Some(self.close(SessionOutcome::Dismissed)));
            }
        }
        Ok(None)
    }

    async fn finish(&mut self, record: DisplayRecord) -> SessionOutcome {
        self.preview.cancel();

        let outcome = match self.fs.read_file(&record.absolute_path).await {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                match insert_snippet(&mut *self.editor, &content, &record) {
                    Ok(kind) => SessionOutcome::Inserted {
                        path: record.absolute_path,
                        kind,
                    },
                    Err(source) => self.report(PickerError::from(source)),
                }
            }
            Err(source) => self.report(PickerError::content_read(record.absolute_path, source)),
        };

        self.close(outcome)
    }

    fn apply_preview(&mut self, loaded: PreviewLoaded) -> Result<(), PickerError> {
        let is_highlighted = self.highlighted.as_deref() == Some(loaded.path.as_path());
        if !self.preview.is_current(&loaded) || !is_highlighted {
            tracing::debug!(path = %loaded.path, "Discarding stale preview");
            return Ok(());
        }

        if let Some(index) = self.selector.attach_preview(&loaded.path, loaded.preview) {
            self.render(Some(index))?;
        }
        Ok(())
    }

    fn render(&mut self, active: Option<usize>) -> Result<(), PickerError> {
        let frame = self.selector.frame(active);
        self.widget
            .widget_mut()
            .render(frame)
            .map_err(PickerError::widget)
    }

    fn report(&self, err: PickerError) -> SessionOutcome {
        tracing::error!(error = %err, "Snippet insertion failed");
        self.notifier.error(&err.to_string());
        SessionOutcome::Failed(err)
    }

    fn close(&mut self, outcome: SessionOutcome) -> SessionOutcome {
        self.preview.cancel();
        self.widget.dispose();
        tracing::info!(outcome = ?outcome, "Snippet picker closed");
        outcome
    }
}
