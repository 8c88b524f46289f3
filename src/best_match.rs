// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Picking the most relevant field match for a result card.
//!
//! The upstream search API returns several candidate excerpts per document.
//! Each candidate scores the summed length of the match terms it contains,
//! so a candidate holding the whole phrase "fda approval" outranks one
//! holding just "fda". Occurrence counts in the text do not matter, but a
//! term listed twice (a variant equal to another word) counts twice.

use crate::normalize::{char_len, normalize_for_search};
use crate::terms::{match_terms, scoring_terms};
use crate::types::FieldMatch;

/// Score a normalized candidate against match terms.
pub(crate) fn score_candidate(normalized: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .filter(|term| normalized.contains(term.as_str()))
        .map(|term| char_len(term))
        .sum()
}

/// Return the text of the best-scoring candidate, or `""` if none scores.
///
/// Ties keep the first candidate. The returned text is the trimmed original,
/// not its normalized form.
///
/// # Example
///
/// ```
/// use pressmark::{select_best_match, FieldMatch};
///
/// let candidates = vec![
///     FieldMatch::new("full_text", "Full text", "FDA approval granted"),
///     FieldMatch::new("summary", "Summary", "irrelevant text"),
/// ];
/// assert_eq!(select_best_match(&candidates, "FDA approval"), "FDA approval granted");
/// assert_eq!(select_best_match(&candidates, "diabetes"), "");
/// ```
pub fn select_best_match(candidates: &[FieldMatch], query: &str) -> String {
    let terms = scoring_terms(query);
    if terms.is_empty() || candidates.is_empty() {
        return String::new();
    }

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let text = candidate.plain_text.trim();
        if text.is_empty() {
            continue;
        }
        let score = score_candidate(&normalize_for_search(text), &terms);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((text, score));
        }
    }

    match best {
        Some((text, score)) if score > 0 => text.to_string(),
        _ => String::new(),
    }
}

/// Whether any query term occurs in `text`.
///
/// False for empty text and for an inactive query.
pub fn has_any_query_match(text: &str, query: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let terms = match_terms(query);
    if terms.is_empty() {
        return false;
    }
    let normalized = normalize_for_search(text);
    terms.iter().any(|term| normalized.contains(term.as_str()))
}
