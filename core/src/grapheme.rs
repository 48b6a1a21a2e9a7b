//! Backward deletion boundaries.
//!
//! Two observably different policies: cluster deletion removes the whole
//! extended grapheme cluster ending at the cursor (one press, one visible
//! unit on combining-mark-heavy scripts), while the scalar fallback removes
//! exactly one Unicode scalar value and may need several presses per
//! visible character.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offset where the last extended grapheme cluster of `text[..end]`
/// starts. `end` must lie on a character boundary. Returns 0 for an empty
/// prefix.
pub fn last_cluster_start(text: &str, end: usize) -> usize {
    text[..end]
        .grapheme_indices(true)
        .next_back()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Byte offset where the last Unicode scalar of `text[..end]` starts.
/// Returns 0 for an empty prefix.
pub fn last_scalar_start(text: &str, end: usize) -> usize {
    let mut prev = end;
    while prev > 0 {
        prev -= 1;
        if text.is_char_boundary(prev) {
            break;
        }
    }
    prev
}
