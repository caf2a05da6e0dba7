//! Rendered list items.

use camino::Utf8Path;

use super::record::DisplayRecord;

/// A page-navigation pseudo entry.
///
/// Markers are synthesized on every render and never carry a path, so they
/// never take part in filtering or file resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationMarker {
    /// Go to the previous page.
    PreviousPage,
    /// Go to the next page.
    NextPage,
}

impl NavigationMarker {
    /// Returns the label shown in the list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreviousPage => "← Previous Page",
            Self::NextPage => "Next Page →",
        }
    }

    /// Returns the usage hint shown next to the label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PreviousPage => "Go to previous page. Use ↑/↓ arrows and Enter to select.",
            Self::NextPage => "Go to next page. Use ↑/↓ arrows and Enter to select.",
        }
    }
}

/// One row of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    /// A snippet file.
    Record(DisplayRecord),
    /// A page-navigation marker.
    Marker(NavigationMarker),
}

impl ListItem {
    /// Returns the label shown in the list.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Record(record) => &record.label,
            Self::Marker(marker) => marker.label(),
        }
    }

    /// Returns the secondary text shown next to the label.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Record(record) => &record.description,
            Self::Marker(marker) => marker.description(),
        }
    }

    /// Returns the preview, if this is a record with one attached.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        match self {
            Self::Record(record) => record.preview.as_deref(),
            Self::Marker(_) => None,
        }
    }

    /// Returns the resolvable file path.
    ///
    /// `None` for markers and for records with an empty path.
    #[must_use]
    pub fn absolute_path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Record(record) if !record.absolute_path.as_str().is_empty() => {
                Some(&record.absolute_path)
            }
            _ => None,
        }
    }

    /// Returns the marker, if this item is one.
    #[must_use]
    pub const fn as_marker(&self) -> Option<NavigationMarker> {
        match self {
            Self::Marker(marker) => Some(*marker),
            Self::Record(_) => None,
        }
    }
}

impl From<DisplayRecord> for ListItem {
    fn from(record: DisplayRecord) -> Self {
        Self::Record(record)
    }
}

impl From<NavigationMarker> for ListItem {
    fn from(marker: NavigationMarker) -> Self {
        Self::Marker(marker)
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    fn record(path: &str) -> DisplayRecord {
        DisplayRecord {
            label: "a.rs".into(),
            description: "snips/a.rs".into(),
            absolute_path: Utf8PathBuf::from(path),
            preview: None,
        }
    }

    #[test]
    fn test_markers_have_no_path() {
        let item = ListItem::from(NavigationMarker::NextPage);
        assert_eq!(item.absolute_path(), None);
        assert_eq!(item.label(), "Next Page →");
        assert_eq!(item.as_marker(), Some(NavigationMarker::NextPage));
    }

    #[test]
    fn test_record_path_resolution() {
        let item = ListItem::from(record("/snips/a.rs"));
        assert_eq!(item.absolute_path(), Some(Utf8Path::new("/snips/a.rs")));
        assert_eq!(item.as_marker(), None);

        assert_eq!(ListItem::from(record("")).absolute_path(), None);
    }
}
