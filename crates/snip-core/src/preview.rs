//! Preview text derivation.
//!
//! A preview is the first `max_lines` lines of a file, further cut to
//! `max_chars` characters. When the character cut happens,
//! [`TRUNCATION_MARKER`] is appended.

/// Appended to a preview that was cut at the character limit.
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Line and character limits applied to previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewLimits {
    /// Maximum number of lines kept.
    pub max_lines: usize,
    /// Maximum number of characters kept (excluding the truncation marker).
    pub max_chars: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            max_lines: 30,
            max_chars: 1000,
        }
    }
}

/// Renders the preview string for `content` under `limits`.
///
/// Lines are split on `\n` and re-joined with `\n`, so the kept lines are
/// returned unmodified. Characters are counted as Unicode scalar values.
///
/// # Examples
///
/// ```
/// use snip_core::{PreviewLimits, render_preview};
///
/// let limits = PreviewLimits { max_lines: 2, max_chars: 100 };
/// assert_eq!(render_preview("a\nb\nc", limits), "a\nb");
/// ```
#[must_use]
pub fn render_preview(content: &str, limits: PreviewLimits) -> String {
    let head = match content.match_indices('\n').nth(limits.max_lines.saturating_sub(1)) {
        Some((idx, _)) if limits.max_lines > 0 => &content[..idx],
        Some(_) => "",
        None if limits.max_lines == 0 => "",
        None => content,
    };

    match head.char_indices().nth(limits.max_chars) {
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + TRUNCATION_MARKER.len());
            preview.push_str(&head[..cut]);
            preview.push_str(TRUNCATION_MARKER);
            preview
        }
        None => head.to_owned(),
    }
}
