//! Language tag inference from file extensions.

use camino::Utf8Path;

/// Extension to language tag table. Extensions are matched case-insensitively.
const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("ts", "typescript"),
    ("js", "javascript"),
    ("py", "python"),
    ("java", "java"),
    ("go", "go"),
    ("rs", "rust"),
    ("cpp", "cpp"),
    ("c", "c"),
    ("h", "c"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("rb", "ruby"),
    ("php", "php"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("sh", "shell"),
    ("bash", "bash"),
    ("zsh", "shell"),
    ("html", "html"),
    ("css", "css"),
    ("json", "json"),
    ("xml", "xml"),
    ("sql", "sql"),
    ("md", "markdown"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
];

/// Returns the language tag for a file, or `None` for unrecognized extensions.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use snip_core::language_for_path;
///
/// assert_eq!(language_for_path(Utf8Path::new("/s/lib.RS")), Some("rust"));
/// assert_eq!(language_for_path(Utf8Path::new("/s/notes.txt")), None);
/// ```
#[must_use]
pub fn language_for_path(path: &Utf8Path) -> Option<&'static str> {
    let ext = path.extension()?;
    LANGUAGE_TABLE
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
        .map(|(_, tag)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(language_for_path(Utf8Path::new("a.ts")), Some("typescript"));
        assert_eq!(language_for_path(Utf8Path::new("dir/b.hpp")), Some("cpp"));
        assert_eq!(language_for_path(Utf8Path::new("c.yml")), Some("yaml"));
        assert_eq!(language_for_path(Utf8Path::new("d.zsh")), Some("shell"));
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(language_for_path(Utf8Path::new("Makefile")), None);
        assert_eq!(language_for_path(Utf8Path::new("archive.tar.gz")), None);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(language_for_path(Utf8Path::new("Query.SQL")), Some("sql"));
    }
}
