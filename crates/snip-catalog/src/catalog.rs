//! The merged, sorted file catalog of a session.
//!
//! [`FileCatalog::build`] walks every validated root, converts each file to a
//! `/`-separated path relative to its root, drops hidden paths, tags each
//! entry with its root, and sorts the concatenation with [`locale_cmp`].
//! The sort is stable, so equal relative paths under different roots keep
//! root configuration order.

use std::cmp::Ordering;
use std::sync::Arc;

use camino::{Utf8Component, Utf8Path};
use snip_core::{CatalogConfig, CatalogEntry, RootFolder, has_hidden_segment};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::fs::FileSystem;
use crate::walker::FileWalker;

/// Converts `file` to a `/`-separated path relative to `root`.
///
/// Returns `None` if `file` is not below `root` or is `root` itself.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use snip_catalog::relative_to_root;
///
/// let rel = relative_to_root(Utf8Path::new("/snips"), Utf8Path::new("/snips/rust/a.rs"));
/// assert_eq!(rel.as_deref(), Some("rust/a.rs"));
/// ```
#[must_use]
pub fn relative_to_root(root: &Utf8Path, file: &Utf8Path) -> Option<String> {
    let rest = file.strip_prefix(root).ok()?;
    let segments: Vec<&str> = rest
        .components()
        .filter_map(|component| match component {
            Utf8Component::Normal(segment) => Some(segment),
            _ => None,
        })
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Primary collation class: punctuation and whitespace, then digits, then
/// letters.
fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

/// Base characters of `s` with accents stripped.
fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

/// Decomposed lowercase characters of `s`, accents included.
fn accented_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Compares two strings the way a human-facing sorted list expects.
///
/// Base letters are compared first, ignoring case and accents; on a tie,
/// unaccented sorts before accented, then lowercase before uppercase; the raw
/// code-point order breaks any remaining tie so the order is total.
///
/// # Examples
///
/// ```
/// use snip_catalog::locale_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_cmp("apple.rs", "Banana.rs"), Ordering::Less);
/// assert_eq!(locale_cmp("a.rs", "A.rs"), Ordering::Less);
/// assert_eq!(locale_cmp("_tmp.rs", "1.rs"), Ordering::Less);
/// assert_eq!(locale_cmp("éclair.md", "fig.md"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_chars(a)
        .map(collation_key)
        .cmp(base_chars(b).map(collation_key))
        .then_with(|| accented_chars(a).cmp(accented_chars(b)))
        .then_with(|| {
            base_chars(a)
                .map(char::is_uppercase)
                .cmp(base_chars(b).map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// The full list of snippet files for one session.
///
/// Built once, before the session is shown, and never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCatalog {
    entries: Vec<CatalogEntry>,
    unreadable_dirs: usize,
}

impl FileCatalog {
    /// Walks every root and builds the sorted catalog.
    ///
    /// Directories that fail to list are logged and counted, never fatal.
    pub async fn build<F: FileSystem>(
        fs: &F,
        roots: &[RootFolder],
        config: &CatalogConfig,
    ) -> Self {
        let walker = FileWalker::new(fs, config);
        let mut entries = Vec::new();
        let mut unreadable_dirs = 0;

        for root in roots {
            let root = Arc::new(root.clone());
            let outcome = walker.walk(root.path()).await;
            unreadable_dirs += outcome.errors.len();

            for file in &outcome.files {
                let Some(relative) = relative_to_root(root.path(), file) else {
                    tracing::debug!(file = %file, root = %root.path(), "File outside its root");
                    continue;
                };
                if has_hidden_segment(&relative) {
                    continue;
                }
                entries.push(CatalogEntry::new(Arc::clone(&root), relative));
            }
        }

        let catalog = Self::from_entries(entries);
        tracing::info!(
            roots = roots.len(),
            files = catalog.len(),
            unreadable_dirs,
            "Built snippet catalog"
        );
        Self {
            unreadable_dirs,
            ..catalog
        }
    }

    /// Creates a catalog from already-enumerated entries, sorting them.
    #[must_use]
    pub fn from_entries(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by(|a, b| locale_cmp(&a.relative_path, &b.relative_path));
        Self {
            entries,
            unreadable_dirs: 0,
        }
    }

    /// The sorted entries.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Consumes the catalog, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no visible file was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of directories that could not be listed during the build.
    #[must_use]
    pub const fn unreadable_dirs(&self) -> usize {
        self.unreadable_dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    fn roots(paths: &[&str]) -> Vec<RootFolder> {
        paths.iter().map(|p| RootFolder::accessible(*p)).collect()
    }

    fn listing(catalog: &FileCatalog) -> Vec<String> {
        catalog
            .entries()
            .iter()
            .map(|e| format!("{}:{}", e.source_root.name(), e.relative_path))
            .collect()
    }

    #[test]
    fn test_relative_to_root() {
        let root = Utf8Path::new("/snips");
        assert_eq!(
            relative_to_root(root, Utf8Path::new("/snips/a/b.rs")).as_deref(),
            Some("a/b.rs")
        );
        assert_eq!(relative_to_root(root, Utf8Path::new("/other/b.rs")), None);
        assert_eq!(relative_to_root(root, root), None);
    }

    #[test]
    fn test_locale_cmp_orders_classes_and_case() {
        let mut names = vec!["b.rs", "A.rs", "a.rs", "_x.rs", "1.rs", "B.rs"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, ["_x.rs", "1.rs", "a.rs", "A.rs", "b.rs", "B.rs"]);
    }

    #[test]
    fn test_locale_cmp_accents() {
        let mut names = vec!["zebra.md", "éclair.md", "fig.md", "ecole.md"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, ["éclair.md", "ecole.md", "fig.md", "zebra.md"]);

        assert_eq!(locale_cmp("e.md", "é.md"), Ordering::Less);
        assert_eq!(locale_cmp("é.md", "É.md"), Ordering::Less);
        assert_eq!(locale_cmp("Äpfel.rs", "apricot.rs"), Ordering::Less);
        // Precomposed and decomposed forms still order totally.
        assert_ne!(locale_cmp("\u{e9}.md", "e\u{301}.md"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_dot_before_slash() {
        assert_eq!(locale_cmp("a.rs", "a/b.rs"), Ordering::Less);
    }

    #[tokio::test]
    async fn test_build_merges_and_sorts() {
        let fs = MemoryFs::new()
            .with_file("/one/zeta.rs", "")
            .with_file("/one/Alpha/x.rs", "")
            .with_file("/two/beta.rs", "")
            .with_file("/two/.cache/junk", "");
        let catalog =
            FileCatalog::build(&fs, &roots(&["/one", "/two"]), &CatalogConfig::default()).await;

        insta::assert_debug_snapshot!(listing(&catalog), @r#"
        [
            "one:Alpha/x.rs",
            "two:beta.rs",
            "one:zeta.rs",
        ]
        "#);
    }

    #[tokio::test]
    async fn test_same_relative_path_keeps_root_order() {
        let fs = MemoryFs::new()
            .with_file("/b/snips/x.rs", "")
            .with_file("/a/snips/x.rs", "");
        let catalog = FileCatalog::build(
            &fs,
            &roots(&["/b/snips", "/a/snips"]),
            &CatalogConfig::default(),
        )
        .await;

        let paths: Vec<String> = catalog
            .entries()
            .iter()
            .map(|e| e.absolute_path().into_string())
            .collect();
        assert_eq!(paths, ["/b/snips/x.rs", "/a/snips/x.rs"]);
    }

    #[tokio::test]
    async fn test_build_is_deterministic() {
        let fs = MemoryFs::new()
            .with_file("/s/c.rs", "")
            .with_file("/s/a/b.rs", "")
            .with_file("/s/B.rs", "");
        let roots = roots(&["/s"]);
        let first = FileCatalog::build(&fs, &roots, &CatalogConfig::default()).await;
        let second = FileCatalog::build(&fs, &roots, &CatalogConfig::default()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unreadable_dirs_are_counted() {
        let fs = MemoryFs::new()
            .with_file("/s/ok.rs", "")
            .with_file("/s/locked/no.rs", "")
            .with_unreadable("/s/locked");
        let catalog = FileCatalog::build(&fs, &roots(&["/s"]), &CatalogConfig::default()).await;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.unreadable_dirs(), 1);
    }
}
