// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded context windows around the first query hit.
//!
//! The window is placed so that about 40% of it precedes the hit, which reads
//! better on a result card than a hit dead centre. Near the end of the text the
//! window slides left to keep its full width. Truncated sides get a `…`.

use crate::contracts::check_snippet_bound;
use crate::normalize::{char_offset, normalize_for_search};
use crate::terms::match_terms;

/// Default character budget for a result-card excerpt.
pub const DEFAULT_SNIPPET_LENGTH: usize = 220;

/// Share of the window placed before the first hit, in fifths.
const LEAD_IN_FIFTHS: usize = 2;

/// Marker for a truncated side.
pub const ELLIPSIS: char = '…';

/// Extract up to `max_length` chars of `text` around the first query hit.
///
/// Newlines and tabs become spaces. Without a hit (or without a query) the
/// result is the first `max_length` chars, undecorated. A `max_length` of
/// zero yields an empty string.
///
/// # Example
///
/// ```
/// use pressmark::extract_snippet;
///
/// let text = format!("{}diabetes {}", "word ".repeat(100), "word ".repeat(100));
/// let snippet = extract_snippet(&text, "diabetes", 40);
/// assert!(snippet.starts_with('…') && snippet.ends_with('…'));
/// assert!(snippet.contains("diabetes"));
/// ```
pub fn extract_snippet(text: &str, query: &str, max_length: usize) -> String {
    let flattened = text.replace(['\n', '\t'], " ");
    let source = flattened.trim();
    if source.is_empty() || max_length == 0 {
        return String::new();
    }

    let chars: Vec<char> = source.chars().collect();
    let len = chars.len();
    // A budget past the text length shows the whole text either way
    let max_length = max_length.min(len);

    let Some(first) = first_match_offset(source, query) else {
        return chars[..max_length].iter().collect();
    };

    let lead_in = max_length * LEAD_IN_FIFTHS / 5;
    let mut start = first.saturating_sub(lead_in);
    let end = len.min(start + max_length);
    if end - start < max_length {
        start = end.saturating_sub(max_length);
    }

    let core: String = chars[start..end].iter().collect();
    let mut snippet = String::with_capacity(core.len() + 2 * ELLIPSIS.len_utf8());
    if start > 0 {
        snippet.push(ELLIPSIS);
    }
    snippet.push_str(core.trim());
    if end < len {
        snippet.push(ELLIPSIS);
    }

    check_snippet_bound(&snippet, max_length);
    snippet
}

/// Lowest char offset at which any match term occurs.
///
/// Position wins, not term length: a short word early in the text beats the
/// whole phrase further down.
fn first_match_offset(source: &str, query: &str) -> Option<usize> {
    let terms = match_terms(query);
    if terms.is_empty() {
        return None;
    }
    let normalized = normalize_for_search(source);
    terms
        .iter()
        .filter_map(|term| normalized.find(term.as_str()))
        .min()
        .map(|byte| char_offset(&normalized, byte))
}
