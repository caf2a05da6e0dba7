//! Recursive file enumeration under a snippet root.
//!
//! [`FileWalker`] descends depth-first through a root using the
//! [`FileSystem`] collaborator. Hidden directories are not entered. A
//! directory that fails to list contributes nothing and the walk continues.
//!
//! Directory cycles (through symbolic links) are broken with a visited set of
//! canonical directory paths, and descent stops at the configured maximum
//! depth.

use camino::{Utf8Path, Utf8PathBuf};
use rustc_hash::FxHashSet;
use snip_core::{CatalogConfig, HIDDEN_MARKER};

use crate::error::CatalogError;
use crate::fs::{EntryKind, FileSystem};

/// Files found under one root, plus the recoverable errors met on the way.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Absolute file paths, in discovery order.
    pub files: Vec<Utf8PathBuf>,
    /// Directories that could not be listed.
    pub errors: Vec<CatalogError>,
}

/// A depth-first walker over the [`FileSystem`] collaborator.
///
/// # Examples
///
/// ```
/// use snip_catalog::{FileWalker, MemoryFs};
/// use snip_core::CatalogConfig;
/// use camino::{Utf8Path, Utf8PathBuf};
///
/// let fs = MemoryFs::new().with_file("/snips/a.rs", "").with_file("/snips/.git/HEAD", "");
/// let walker = FileWalker::new(&fs, &CatalogConfig::default());
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let outcome = runtime.block_on(walker.walk(Utf8Path::new("/snips")));
/// assert_eq!(outcome.files, vec![Utf8PathBuf::from("/snips/a.rs")]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct FileWalker<'a, F> {
    fs: &'a F,
    max_depth: usize,
}

impl<'a, F: FileSystem> FileWalker<'a, F> {
    /// Creates a walker over `fs` with the enumeration settings of `config`.
    #[must_use]
    pub const fn new(fs: &'a F, config: &CatalogConfig) -> Self {
        Self {
            fs,
            max_depth: config.max_depth,
        }
    }

    /// Walks `root` and returns every file below it.
    pub async fn walk(&self, root: &Utf8Path) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();
        let mut visited: FxHashSet<Utf8PathBuf> = FxHashSet::default();
        let mut stack: Vec<(Utf8PathBuf, usize)> = vec![(root.to_owned(), 0)];

        while let Some((dir, depth)) = stack.pop() {
            let key = match self.fs.canonicalize(&dir).await {
                Ok(canonical) => canonical,
                Err(_) => dir.clone(),
            };
            if !visited.insert(key) {
                tracing::debug!(dir = %dir, "Skipping already visited directory");
                continue;
            }

            let entries = match self.fs.list_directory(&dir).await {
                Ok(entries) => entries,
                Err(source) => {
                    tracing::warn!(dir = %dir, error = %source, "Error reading snippet folder");
                    outcome.errors.push(CatalogError::enumeration(dir, source));
                    continue;
                }
            };

            let mut subdirs = Vec::new();
            for entry in entries {
                let path = dir.join(&entry.name);
                match entry.kind {
                    EntryKind::File => outcome.files.push(path),
                    EntryKind::Directory if entry.name.starts_with(HIDDEN_MARKER) => {}
                    EntryKind::Directory if depth >= self.max_depth => {
                        tracing::debug!(dir = %path, depth, "Maximum depth reached");
                    }
                    EntryKind::Directory => subdirs.push((path, depth + 1)),
                    EntryKind::Other => {}
                }
            }
            // Reversed so the first listed subdirectory is walked first.
            stack.extend(subdirs.into_iter().rev());
        }

        tracing::debug!(
            root = %root,
            files = outcome.files.len(),
            unreadable = outcome.errors.len(),
            "Walked snippet folder"
        );
        outcome
    }
}
