//! Inserting the chosen snippet.
//!
//! With an active editing surface the content replaces a non-empty selection
//! or goes in at the cursor. Without one, a new document is opened with the
//! content and a language tag inferred from the file extension, and then
//! presented.

use snip_core::{DisplayRecord, language_for_path};

/// Errors reported by an editing surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// An edit was requested but no surface is active.
    #[error("no active editing surface")]
    NoActiveSurface,

    /// The surface refused the edit.
    #[error("edit rejected: {0}")]
    Rejected(String),

    /// The surface failed to read or write its backing storage.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SurfaceError {
    /// Creates a new [`SurfaceError::Rejected`] error.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

/// The host's text-editing surface.
pub trait EditorSurface {
    /// A newly opened, unsaved document.
    type Document;

    /// Returns `true` if a document is currently being edited.
    fn has_active_surface(&self) -> bool;

    /// Returns `true` if the active surface has no selected text.
    fn current_selection_empty(&self) -> bool;

    /// Replaces the current selection with `text`.
    fn replace_selection(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Inserts `text` at the cursor.
    fn insert_at_cursor(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Opens a new unsaved document holding `content`.
    fn open_new_document(
        &mut self,
        content: &str,
        language: Option<&str>,
    ) -> Result<Self::Document, SurfaceError>;

    /// Shows a document to the user.
    fn present(&mut self, document: Self::Document) -> Result<(), SurfaceError>;
}

/// How a snippet was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionKind {
    /// The non-empty selection was replaced.
    ReplacedSelection,
    /// The content was inserted at the cursor.
    InsertedAtCursor,
    /// A new document was opened with the inferred language tag.
    OpenedDocument {
        /// Language tag, `None` for unrecognized extensions.
        language: Option<&'static str>,
    },
}

/// Inserts `content`, read from `record`'s file, into `editor`.
pub fn insert_snippet<E: EditorSurface>(
    editor: &mut E,
    content: &str,
    record: &DisplayRecord,
) -> Result<InsertionKind, SurfaceError> {
    if editor.has_active_surface() {
        if editor.current_selection_empty() {
            editor.insert_at_cursor(content)?;
            tracing::info!(path = %record.absolute_path, "Inserted snippet at cursor");
            Ok(InsertionKind::InsertedAtCursor)
        } else {
            editor.replace_selection(content)?;
            tracing::info!(path = %record.absolute_path, "Replaced selection with snippet");
            Ok(InsertionKind::ReplacedSelection)
        }
    } else {
        let language = language_for_path(&record.absolute_path);
        let document = editor.open_new_document(content, language)?;
        editor.present(document)?;
        tracing::info!(
            path = %record.absolute_path,
            language = language.unwrap_or(""),
            "Opened snippet in new document"
        );
        Ok(InsertionKind::OpenedDocument { language })
    }
}


#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::testing::FakeEditor;
    use super::*;

    fn record(path: &str) -> DisplayRecord {
        DisplayRecord {
            label: "x".into(),
            description: "s/x".into(),
            absolute_path: Utf8PathBuf::from(path),
            preview: None,
        }
    }

    #[test]
    fn test_insert_at_cursor_when_selection_empty() {
        let mut editor = FakeEditor::with_buffer("ab", 1);
        let kind = insert_snippet(&mut editor, "XYZ", &record("/s/x.rs")).unwrap();

        assert_eq!(kind, InsertionKind::InsertedAtCursor);
        assert_eq!(editor.buffer.as_deref(), Some("aXYZb"));
    }

    #[test]
    fn test_replace_non_empty_selection() {
        let mut editor = FakeEditor::with_buffer("hello world", 0);
        editor.selection = Some((6, 11));
        let kind = insert_snippet(&mut editor, "there", &record("/s/x.rs")).unwrap();

        assert_eq!(kind, InsertionKind::ReplacedSelection);
        assert_eq!(editor.buffer.as_deref(), Some("hello there"));
    }

    #[test]
    fn test_no_surface_opens_document_with_language() {
        let mut editor = FakeEditor::default();
        let kind = insert_snippet(&mut editor, "SELECT 1;", &record("/s/q.SQL")).unwrap();

        assert_eq!(kind, InsertionKind::OpenedDocument { language: Some("sql") });
        assert_eq!(editor.opened, vec![("SELECT 1;".to_owned(), Some("sql".to_owned()))]);
        assert_eq!(editor.presented, 1);
    }

    #[test]
    fn test_unknown_extension_has_no_language() {
        let mut editor = FakeEditor::default();
        let kind = insert_snippet(&mut editor, "x", &record("/s/Makefile")).unwrap();
        assert_eq!(kind, InsertionKind::OpenedDocument { language: None });
    }

    #[test]
    fn test_rejected_edit_is_reported() {
        let mut editor = FakeEditor::with_buffer("", 0);
        editor.fail_edits = true;
        let err = insert_snippet(&mut editor, "x", &record("/s/x.rs")).unwrap_err();
        assert!(matches!(err, SurfaceError::Rejected(_)));
    }
}
