//! Snippet folder validation.
//!
//! [`FolderValidator`] turns the configured folder list into the roots a
//! session enumerates. Entries are processed in order:
//!
//! 1. Blank entries (after trimming) are skipped
//! 2. Entries with a hidden path segment are skipped
//! 3. The rest are checked for existence; failures are collected
//!
//! Duplicates are kept. An entry that fails the existence check never aborts
//! the batch.

use camino::Utf8PathBuf;
use smallvec::SmallVec;
use snip_core::{Notifier, RootFolder, has_hidden_segment};

use crate::error::CatalogError;
use crate::fs::FileSystem;

/// Result of checking the configured folders, before any message is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderValidation {
    /// Folders that passed the existence check, in configuration order.
    pub accepted: Vec<RootFolder>,
    /// Folders that failed the existence check, as configured.
    pub rejected: SmallVec<[String; 4]>,
    /// Number of blank or hidden entries that were skipped.
    pub skipped: usize,
}

impl FolderValidation {
    /// Returns the fatal error for this outcome, if there is one.
    ///
    /// `configured` is the number of entries in the input list.
    #[must_use]
    pub fn fatal_error(&self, configured: usize) -> Option<CatalogError> {
        if configured == 0 {
            return Some(CatalogError::NoFoldersConfigured);
        }
        if !self.accepted.is_empty() {
            return None;
        }
        if self.rejected.is_empty() {
            Some(CatalogError::NoValidFolders)
        } else {
            Some(CatalogError::NoAccessibleFolders {
                checked: self.rejected.to_vec(),
            })
        }
    }

    /// Returns the warning for a partial failure, if some folders were
    /// rejected but others accepted.
    #[must_use]
    pub fn partial_warning(&self) -> Option<String> {
        if self.accepted.is_empty() || self.rejected.is_empty() {
            return None;
        }
        Some(format!(
            "Some snippet folders are not accessible: {}",
            self.rejected.join(", ")
        ))
    }
}

/// Checks configured snippet folders against the file system.
#[derive(Debug)]
pub struct FolderValidator<'a, F> {
    fs: &'a F,
}

impl<'a, F: FileSystem> FolderValidator<'a, F> {
    /// Creates a validator over `fs`.
    #[must_use]
    pub const fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Checks every folder without emitting any message.
    pub async fn check(&self, folders: &[String]) -> FolderValidation {
        let mut outcome = FolderValidation::default();

        for folder in folders {
            let trimmed = folder.trim();
            if trimmed.is_empty() || has_hidden_segment(trimmed) {
                tracing::debug!(folder = %folder, "Skipping blank or hidden folder");
                outcome.skipped += 1;
                continue;
            }

            let path = Utf8PathBuf::from(trimmed);
            if self.fs.exists(&path).await {
                outcome.accepted.push(RootFolder::accessible(path));
            } else {
                tracing::warn!(folder = %trimmed, "Snippet folder not accessible");
                outcome.rejected.push(trimmed.to_owned());
            }
        }

        outcome
    }

    /// Checks every folder and reports the outcome through `notifier`.
    ///
    /// Fatal outcomes are reported as errors and returned; a partial failure
    /// is reported as a warning and the accepted roots are returned.
    pub async fn validate(
        &self,
        folders: &[String],
        notifier: &impl Notifier,
    ) -> Result<Vec<RootFolder>, CatalogError> {
        let outcome = self.check(folders).await;

        if let Some(err) = outcome.fatal_error(folders.len()) {
            notifier.error(&err.to_string());
            return Err(err);
        }
        if let Some(warning) = outcome.partial_warning() {
            notifier.warning(&warning);
        }

        tracing::debug!(
            accepted = outcome.accepted.len(),
            rejected = outcome.rejected.len(),
            skipped = outcome.skipped,
            "Validated snippet folders"
        );
        Ok(outcome.accepted)
    }
}
