//! Snippet root folders.

use camino::{Utf8Path, Utf8PathBuf};

/// A configured snippet folder that passed validation.
///
/// Created at session start and immutable for the session.
///
/// # Examples
///
/// ```
/// use snip_core::RootFolder;
///
/// let root = RootFolder::accessible("/home/me/snippets/");
/// assert_eq!(root.name(), "snippets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootFolder {
    /// Absolute path of the folder.
    pub path: Utf8PathBuf,
    /// Whether the existence check succeeded.
    pub exists: bool,
}

impl RootFolder {
    /// Creates a root folder that passed the existence check.
    #[must_use]
    pub fn accessible(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            exists: true,
        }
    }

    /// Returns the path of the folder.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the last non-empty path segment, used as the root name in
    /// display descriptions.
    ///
    /// Both `/` and `\` count as separators. Falls back to the whole path
    /// when no segment is left (e.g. `/`).
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .as_str()
            .split(['/', '\\'])
            .rfind(|segment| !segment.is_empty())
            .unwrap_or(self.path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_last_segment() {
        assert_eq!(RootFolder::accessible("/a/b/snips").name(), "snips");
    }

    #[test]
    fn test_name_ignores_trailing_separator() {
        assert_eq!(RootFolder::accessible("/a/b/snips//").name(), "snips");
        assert_eq!(RootFolder::accessible(r"C:\work\snips\").name(), "snips");
    }

    #[test]
    fn test_name_of_filesystem_root() {
        assert_eq!(RootFolder::accessible("/").name(), "/");
    }
}
