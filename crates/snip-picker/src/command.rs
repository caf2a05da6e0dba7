//! The "insert code snippet" command.
//!
//! The command validates the configured folders, builds the catalog and, when
//! there is anything to pick from, runs a [`Session`]. Every problem is
//! reported through the notifier before the command returns.

use std::sync::Arc;

use snip_catalog::{CatalogError, FileCatalog, FileSystem, FolderValidator};
use snip_core::{Config, Notifier};

use crate::error::PickerError;
use crate::insertion::EditorSurface;
use crate::preview::{Scheduler, TokioScheduler};
use crate::session::{Session, SessionOutcome};
use crate::widget::ListWidget;

/// The snippet insertion command and its collaborators.
#[derive(Debug)]
pub struct InsertSnippetCommand<'a, F, N, S = TokioScheduler> {
    config: &'a Config,
    fs: Arc<F>,
    notifier: &'a N,
    scheduler: S,
}

impl<'a, F, N> InsertSnippetCommand<'a, F, N>
where
    F: FileSystem + 'static,
    N: Notifier,
{
    /// Creates the command with the tokio timer.
    #[must_use]
    pub const fn new(config: &'a Config, fs: Arc<F>, notifier: &'a N) -> Self {
        Self {
            config,
            fs,
            notifier,
            scheduler: TokioScheduler,
        }
    }
}

impl<'a, F, N, S> InsertSnippetCommand<'a, F, N, S>
where
    F: FileSystem + 'static,
    N: Notifier,
    S: Scheduler,
{
    /// Replaces the preview timer.
    #[must_use]
    pub fn with_scheduler<T: Scheduler>(self, scheduler: T) -> InsertSnippetCommand<'a, F, N, T> {
        InsertSnippetCommand {
            config: self.config,
            fs: self.fs,
            notifier: self.notifier,
            scheduler,
        }
    }

    /// Validates the folders and builds the catalog.
    ///
    /// Configuration and accessibility failures are reported as errors, an
    /// empty catalog as a warning.
    pub async fn load_catalog(&self) -> Result<FileCatalog, CatalogError> {
        let roots = FolderValidator::new(self.fs.as_ref())
            .validate(&self.config.snippet_folders, self.notifier)
            .await?;

        let catalog = FileCatalog::build(self.fs.as_ref(), &roots, &self.config.catalog).await;
        if catalog.is_empty() {
            let err = CatalogError::EmptyCatalog;
            self.notifier.warning(&err.to_string());
            return Err(err);
        }
        Ok(catalog)
    }

    /// Runs the command: shows `widget` over the catalog and inserts the
    /// chosen file into `editor`.
    ///
    /// Returns [`SessionOutcome::NotShown`] when the catalog could not be
    /// built. Only widget failures are returned as errors.
    pub async fn run<W, E>(self, widget: W, editor: &mut E) -> Result<SessionOutcome, PickerError>
    where
        W: ListWidget,
        E: EditorSurface,
    {
        let catalog = match self.load_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::info!(error = %err, "Snippet picker not shown");
                return Ok(SessionOutcome::NotShown);
            }
        };

        Session::new(
            catalog.entries(),
            self.config,
            widget,
            self.fs,
            self.scheduler,
            editor,
            self.notifier,
        )
        .run()
        .await
    }
}

/// Runs the snippet insertion command with the tokio timer.
pub async fn insert_code_snippet<F, N, W, E>(
    config: &Config,
    fs: Arc<F>,
    notifier: &N,
    widget: W,
    editor: &mut E,
) -> Result<SessionOutcome, PickerError>
where
    F: FileSystem + 'static,
    N: Notifier,
    W: ListWidget,
    E: EditorSurface,
{
    InsertSnippetCommand::new(config, fs, notifier)
        .run(widget, editor)
        .await
}

#[cfg(test)]
mod tests {
    use snip_catalog::MemoryFs;
    use snip_core::{NavigationMarker, NotificationLog, Severity};

    use super::*;
    use crate::insertion::InsertionKind;
    use crate::insertion::testing::FakeEditor;
    use crate::widget::testing::{Step, scripted};

    fn config(folders: &[&str]) -> Config {
        Config {
            snippet_folders: folders.iter().map(|f| (*f).to_owned()).collect(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_no_folders_is_not_shown() {
        let (widget, handle) = scripted();
        let mut editor = FakeEditor::default();
        let log = NotificationLog::new();

        let outcome = insert_code_snippet(&config(&[]), Arc::new(MemoryFs::new()), &log, widget, &mut editor)
            .await
            .unwrap();

        assert!(matches!(outcome, SessionOutcome::NotShown));
        assert!(handle.frames().is_empty());
        assert_eq!(handle.disposals(), 0);
        assert_eq!(log.count(Severity::Error), 1);
        assert_eq!(
            log.snapshot()[0].message,
            "Please configure at least one snippet folder in settings (snippet_folders)."
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_warns() {
        let fs = MemoryFs::new().with_dir("/snips").with_file("/snips/.hidden", "x");
        let (widget, handle) = scripted();
        let mut editor = FakeEditor::default();
        let log = NotificationLog::new();

        let outcome = insert_code_snippet(&config(&["/snips"]), Arc::new(fs), &log, widget, &mut editor)
            .await
            .unwrap();

        assert!(matches!(outcome, SessionOutcome::NotShown));
        assert!(handle.frames().is_empty());
        assert_eq!(
            log.snapshot()[0].message,
            "No files found in any of the snippet folders."
        );
        assert_eq!(log.snapshot()[0].severity, Severity::Warning);
    }

    #[tokio::test]
    async fn test_inaccessible_folders_report_instead_of_failing() {
        let (widget, handle) = scripted();
        let mut editor = FakeEditor::default();
        let log = NotificationLog::new();

        let result = insert_code_snippet(
            &config(&["/gone", "/also/gone"]),
            Arc::new(MemoryFs::new()),
            &log,
            widget,
            &mut editor,
        )
        .await;

        assert!(matches!(result, Ok(SessionOutcome::NotShown)));
        assert_eq!(handle.disposals(), 0);
        assert_eq!(
            log.snapshot()[0].message,
            "No snippet folders are accessible. Checked: /gone, /also/gone"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_to_end_across_roots() {
        let fs = MemoryFs::new();
        for i in 0..100 {
            fs.add_file(format!("/work/snips/w{i:03}.txt"), format!("work {i}"));
        }
        for i in 0..25 {
            fs.add_file(format!("/home/snips/util/h{i:03}.txt"), format!("home {i}"));
        }
        fs.add_file("/work/snips/shared_log.rs", "log!(\"{}\", x);");
        fs.add_file("/home/snips/shared_log.py", "print(x)");

        let (widget, handle) = scripted();
        let mut editor = FakeEditor::with_buffer("fn main() {\n}\n", 12);
        let log = NotificationLog::new();
        let config = config(&["/work/snips", "/missing", "/home/snips"]);

        handle.send(Step::Highlight(50));
        handle.send(Step::Accept);
        handle.send(Step::Query("SHARED_".to_owned()));
        handle.send(Step::Highlight(1));
        handle.send(Step::Accept);

        let outcome = InsertSnippetCommand::new(&config, Arc::new(fs), &log)
            .run(widget, &mut editor)
            .await
            .unwrap();

        let SessionOutcome::Inserted { path, kind } = outcome else {
            panic!("expected an insertion, got {outcome:?}");
        };
        assert_eq!(path, "/work/snips/shared_log.rs");
        assert_eq!(kind, InsertionKind::InsertedAtCursor);
        assert_eq!(editor.buffer.as_deref(), Some("fn main() {\nlog!(\"{}\", x);}\n"));

        assert_eq!(log.count(Severity::Warning), 1);
        assert_eq!(
            log.snapshot()[0].message,
            "Some snippet folders are not accessible: /missing"
        );

        let frames = handle.frames();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].placeholder.contains("(Page 1 of 3)"));
        assert_eq!(frames[0].items[50].as_marker(), Some(NavigationMarker::NextPage));
        assert!(frames[1].placeholder.contains("(Page 2 of 3)"));

        let filtered: Vec<_> = frames[2].items.iter().map(|item| item.description()).collect();
        assert_eq!(filtered, ["snips/shared_log.py", "snips/shared_log.rs"]);
        assert_eq!(handle.disposals(), 1);
    }
}
