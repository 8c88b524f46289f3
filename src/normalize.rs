// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for matching.
//!
//! Two variants with one important difference:
//!
//! - [`normalize_for_search`] maps every char to exactly one char. Ranges found
//!   in its output are valid char offsets into the input, which is what the
//!   highlighter relies on.
//! - [`normalize_for_display_comparison`] runs NFKD first, so "ﬁ" becomes "fi"
//!   and "é" becomes "e" + U+0301. Good for deciding whether two strings look
//!   the same, useless for offsets.
//!
//! Neither output is ever shown to a user.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Map one char to its matching form.
///
/// Lower-casing is done per char. A char whose lower-case form is more than
/// one char (`İ` → `i̇`) stays as it is so the length never changes.
#[inline]
fn fold_char(c: char) -> char {
    match c {
        '\u{00A0}' => ' ',
        '\u{2013}' | '\u{2014}' => '-',
        '\u{2018}' | '\u{2019}' => '\'',
        _ => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

/// Normalize text for locating matches.
///
/// Replaces non-breaking spaces with spaces, en/em dashes with `-`, curly
/// single quotes with `'`, and lower-cases the rest.
///
/// The output has exactly as many chars as the input:
///
/// ```
/// use pressmark::normalize_for_search;
///
/// let text = "Phase\u{00A0}3 \u{2014} Sponsor\u{2019}s";
/// let normalized = normalize_for_search(text);
/// assert_eq!(normalized, "phase 3 - sponsor's");
/// assert_eq!(normalized.chars().count(), text.chars().count());
/// ```
pub fn normalize_for_search(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Normalize text for comparing visually equivalent strings.
///
/// Applies compatibility decomposition (NFKD) before the same substitutions
/// as [`normalize_for_search`]. The output length may differ from the input,
/// so never compute highlight offsets on it.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_for_display_comparison(text: &str) -> String {
    text.nfkd().map(fold_char).collect()
}

/// Without `unicode-normalization` there is no decomposition step and this is
/// the same as [`normalize_for_search`].
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_for_display_comparison(text: &str) -> String {
    normalize_for_search(text)
}

/// Count chars, the unit every offset in this crate uses.
#[inline]
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a byte offset into a char offset.
#[inline]
pub(crate) fn char_offset(text: &str, byte_offset: usize) -> usize {
    char_len(&text[..byte_offset])
}
