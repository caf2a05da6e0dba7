//! Substring search over the projected catalog.

use snip_core::DisplayRecord;

#[derive(Debug, Clone)]
struct SearchKey {
    label: String,
    description: String,
}

/// Case-insensitive substring search over record labels and descriptions.
///
/// Lowercased keys are computed once per session. Matches are returned in
/// catalog order; there is no ranking.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use snip_core::{CatalogEntry, DisplayRecord, RootFolder};
/// use snip_picker::SearchFilter;
///
/// let root = Arc::new(RootFolder::accessible("/snips"));
/// let records: Vec<DisplayRecord> = ["sql/Upsert.sql", "rust/iter.rs"]
///     .iter()
///     .map(|rel| DisplayRecord::from_entry(&CatalogEntry::new(Arc::clone(&root), *rel)))
///     .collect();
///
/// let filter = SearchFilter::new(&records);
/// assert_eq!(filter.matches("upsert"), vec![0]);
/// assert_eq!(filter.matches("SNIPS/"), vec![0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    keys: Vec<SearchKey>,
}

impl SearchFilter {
    /// Builds the search index for `records`.
    #[must_use]
    pub fn new(records: &[DisplayRecord]) -> Self {
        let keys = records
            .iter()
            .map(|record| SearchKey {
                label: record.label.to_lowercase(),
                description: record.description.to_lowercase(),
            })
            .collect();
        Self { keys }
    }

    /// Indices of the records matching `query`, in catalog order.
    ///
    /// An empty query means "no filter"; callers check for it before calling.
    #[must_use]
    pub fn matches(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.label.contains(&needle) || key.description.contains(&needle))
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    fn record(label: &str, description: &str) -> DisplayRecord {
        DisplayRecord {
            label: label.to_owned(),
            description: description.to_owned(),
            absolute_path: Utf8PathBuf::from(format!("/x/{description}")),
            preview: None,
        }
    }

    fn sample() -> SearchFilter {
        SearchFilter::new(&[
            record("Foo.rs", "team/rust/Foo.rs"),
            record("bar.py", "team/foobar/bar.py"),
            record("baz.md", "personal/notes/baz.md"),
        ])
    }

    #[test]
    fn test_matches_label_case_insensitive() {
        assert_eq!(sample().matches("FOO.RS"), vec![0]);
    }

    #[test]
    fn test_matches_description() {
        assert_eq!(sample().matches("foo"), vec![0, 1]);
        assert_eq!(sample().matches("personal/"), vec![2]);
    }

    #[test]
    fn test_no_match() {
        assert!(sample().matches("zzz").is_empty());
    }

    #[test]
    fn test_len() {
        assert_eq!(sample().len(), 3);
        assert!(SearchFilter::default().is_empty());
    }
}
