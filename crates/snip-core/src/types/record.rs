//! Display records and the projection from catalog entries.

use camino::Utf8PathBuf;

use super::entry::CatalogEntry;

/// A catalog entry as shown in the list widget.
///
/// `preview` is either present or absent; at most one rendered record
/// carries a preview at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// File name.
    pub label: String,
    /// `<rootName>/<relativePath>`.
    pub description: String,
    /// Absolute path of the file.
    pub absolute_path: Utf8PathBuf,
    /// First lines of the file, once loaded.
    pub preview: Option<String>,
}

impl DisplayRecord {
    /// Projects a catalog entry into a display record. Pure, no I/O.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use snip_core::{CatalogEntry, DisplayRecord, RootFolder};
    ///
    /// let root = Arc::new(RootFolder::accessible("/home/me/snips"));
    /// let record = DisplayRecord::from_entry(&CatalogEntry::new(root, "rust/iter.rs"));
    /// assert_eq!(record.label, "iter.rs");
    /// assert_eq!(record.description, "snips/rust/iter.rs");
    /// ```
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            label: entry.file_name().to_owned(),
            description: format!("{}/{}", entry.source_root.name(), entry.relative_path),
            absolute_path: entry.absolute_path(),
            preview: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::RootFolder;

    fn entry(root: &str, relative: &str) -> CatalogEntry {
        CatalogEntry::new(Arc::new(RootFolder::accessible(root)), relative)
    }

    #[test]
    fn test_projection() {
        let record = DisplayRecord::from_entry(&entry("/work/team-snips/", "sql/upsert.sql"));
        assert_eq!(record.label, "upsert.sql");
        assert_eq!(record.description, "team-snips/sql/upsert.sql");
        assert_eq!(record.absolute_path, Utf8PathBuf::from("/work/team-snips/sql/upsert.sql"));
        assert!(record.preview.is_none());
    }

    #[test]
    fn test_inverse_mapping_is_exact() {
        let a = entry("/a/snips", "x/y.rs");
        let b = entry("/b/snips", "x/y.rs");
        let record = DisplayRecord::from_entry(&a);

        assert_eq!(record.absolute_path, a.absolute_path());
        assert_ne!(record.absolute_path, b.absolute_path());
        // Same root name, same relative path: description collides, path doesn't.
        assert_eq!(record.description, DisplayRecord::from_entry(&b).description);
    }
}
