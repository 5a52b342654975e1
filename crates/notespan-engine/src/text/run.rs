use serde::{Deserialize, Serialize};

/// Style tag given to text that arrives without one (plain insertions).
pub const DEFAULT_STYLE: &str = "default";

/// A contiguous span of text sharing one style tag.
///
/// This is also the persisted shape: a text block's `data` field serializes
/// as an ordered array of `{style, text}` objects, and deserializing that
/// array reproduces an equal run list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub style: String,
    pub text: String,
}

impl Run {
    pub fn new(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            text: text.into(),
        }
    }

    /// Length in Unicode code points, not bytes.
    ///
    /// All position arithmetic in this module is code-point based so that
    /// multi-byte scripts (Cyrillic, CJK, emoji) behave correctly.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenated plain text of all runs.
pub fn plain_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// Total content length in code points.
pub fn total_len(runs: &[Run]) -> usize {
    runs.iter().map(Run::len).sum()
}

/// Byte offset of the `idx`-th code point in `s` (or `s.len()` past the end).
pub(crate) fn char_boundary(s: &str, idx: usize) -> usize {
    s.char_indices().nth(idx).map_or(s.len(), |(i, _)| i)
}

/// Slice `s` by code-point offsets `[start, end)`.
pub(crate) fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    debug_assert!(start <= end);
    &s[char_boundary(s, start)..char_boundary(s, end)]
}
