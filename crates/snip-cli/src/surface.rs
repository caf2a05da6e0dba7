//! A file-backed editing surface.
//!
//! With `--target FILE` the snippet is edited into a text buffer loaded from
//! that file, at the cursor or over the selection given on the command line,
//! and the buffer is saved once the picker has closed. Without a target there
//! is no active surface: the snippet becomes a new document that is written
//! out after the terminal has been restored.

use std::io::Write;
use std::ops::Range;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use snip_picker::{EditorSurface, SurfaceError};

/// A 1-based `LINE:COL` position. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub col: usize,
}

/// Failure to parse a [`Position`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("expected LINE:COL with both numbers at least 1, got '{0}'")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePositionError(s.to_owned());
        let (line, col) = s.split_once(':').ok_or_else(invalid)?;
        let line: usize = line.trim().parse().map_err(|_| invalid())?;
        let col: usize = col.trim().parse().map_err(|_| invalid())?;
        if line == 0 || col == 0 {
            return Err(invalid());
        }
        Ok(Self { line, col })
    }
}

/// Byte offset of `pos` in `text`, clamped to the end of its line and to the
/// end of the text.
#[must_use]
pub fn offset_of(text: &str, pos: Position) -> usize {
    let mut line_start = 0;
    for (index, line) in text.split_inclusive('\n').enumerate() {
        if index + 1 == pos.line {
            let content = line.strip_suffix('\n').unwrap_or(line);
            let content = content.strip_suffix('\r').unwrap_or(content);
            let within = content
                .char_indices()
                .nth(pos.col - 1)
                .map_or(content.len(), |(offset, _)| offset);
            return line_start + within;
        }
        line_start += line.len();
    }
    text.len()
}

/// An editable text buffer with a cursor and an optional selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
    selection: Option<Range<usize>>,
    modified: bool,
}

impl TextBuffer {
    /// Creates a buffer with the cursor at the end of `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            cursor: text.len(),
            text,
            selection: None,
            modified: false,
        }
    }

    /// Moves the cursor to `pos`.
    #[must_use]
    pub fn with_cursor(mut self, pos: Position) -> Self {
        self.cursor = offset_of(&self.text, pos);
        self
    }

    /// Selects from the cursor to `pos`.
    #[must_use]
    pub fn with_selection_to(mut self, pos: Position) -> Self {
        let other = offset_of(&self.text, pos);
        self.selection = Some(self.cursor.min(other)..self.cursor.max(other));
        self
    }

    /// The buffer text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` once an edit has been applied.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    fn selection_is_empty(&self) -> bool {
        self.selection.as_ref().is_none_or(Range::is_empty)
    }

    fn replace_selection(&mut self, content: &str) {
        let range = self.selection.take().unwrap_or(self.cursor..self.cursor);
        self.text.replace_range(range.clone(), content);
        self.cursor = range.start + content.len();
        self.modified = true;
    }

    fn insert_at_cursor(&mut self, content: &str) {
        self.text.insert_str(self.cursor, content);
        self.cursor += content.len();
        self.modified = true;
    }
}

/// A document opened for a snippet when no surface is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    /// The snippet text.
    pub content: String,
    /// Inferred language tag.
    pub language: Option<String>,
}

/// The command-line editing surface.
#[derive(Debug, Default)]
pub struct CliSurface {
    target: Option<(Utf8PathBuf, TextBuffer)>,
    presented: Vec<NewDocument>,
}

impl CliSurface {
    /// A surface with no active document.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// A surface editing `buffer`, saved back to `path`.
    #[must_use]
    pub fn editing(path: impl Into<Utf8PathBuf>, buffer: TextBuffer) -> Self {
        Self {
            target: Some((path.into(), buffer)),
            presented: Vec::new(),
        }
    }

    /// Loads `path` and places the cursor and selection.
    pub async fn open(
        path: &Utf8Path,
        cursor: Option<Position>,
        select_to: Option<Position>,
    ) -> std::io::Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let mut buffer = TextBuffer::new(text);
        if let Some(pos) = cursor {
            buffer = buffer.with_cursor(pos);
        }
        if let Some(pos) = select_to {
            buffer = buffer.with_selection_to(pos);
        }
        Ok(Self::editing(path, buffer))
    }

    /// The edited buffer, if any.
    #[must_use]
    pub fn buffer(&self) -> Option<&TextBuffer> {
        self.target.as_ref().map(|(_, buffer)| buffer)
    }

    /// Saves the edited buffer and writes presented documents.
    ///
    /// Documents go to `output` if given, else to `out`; their language tags
    /// are reported on `err`.
    pub async fn flush(
        &self,
        output: Option<&Utf8Path>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> std::io::Result<()> {
        if let Some((path, buffer)) = &self.target {
            if buffer.is_modified() {
                tokio::fs::write(path, buffer.text()).await?;
                tracing::info!(%path, "Saved edited file");
            }
        }

        for document in &self.presented {
            if let Some(language) = &document.language {
                writeln!(err, "language: {language}")?;
            }
            match output {
                Some(path) => {
                    tokio::fs::write(path, &document.content).await?;
                    tracing::info!(%path, "Wrote snippet document");
                }
                None => out.write_all(document.content.as_bytes())?,
            }
        }
        Ok(())
    }
}

impl EditorSurface for CliSurface {
    type Document = NewDocument;

    fn has_active_surface(&self) -> bool {
        self.target.is_some()
    }

    fn current_selection_empty(&self) -> bool {
        self.buffer().is_none_or(TextBuffer::selection_is_empty)
    }

    fn replace_selection(&mut self, text: &str) -> Result<(), SurfaceError> {
        let (_, buffer) = self.target.as_mut().ok_or(SurfaceError::NoActiveSurface)?;
        buffer.replace_selection(text);
        Ok(())
    }

    fn insert_at_cursor(&mut self, text: &str) -> Result<(), SurfaceError> {
        let (_, buffer) = self.target.as_mut().ok_or(SurfaceError::NoActiveSurface)?;
        buffer.insert_at_cursor(text);
        Ok(())
    }

    fn open_new_document(
        &mut self,
        content: &str,
        language: Option<&str>,
    ) -> Result<NewDocument, SurfaceError> {
        Ok(NewDocument {
            content: content.to_owned(),
            language: language.map(ToOwned::to_owned),
        })
    }

    fn present(&mut self, document: NewDocument) -> Result<(), SurfaceError> {
        self.presented.push(document);
        Ok(())
    }
}
