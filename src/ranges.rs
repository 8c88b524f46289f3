// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Locating terms in normalized text and merging the hits.
//!
//! Every term is scanned independently, so "cancer" and "cancer therapy" both
//! report a hit over the same words. The merge pass folds those into one run:
//! a range joins the previous one whenever it starts at or before the previous
//! end. The result is the minimal ascending list of disjoint, non-touching
//! ranges, which is exactly what the highlighter needs to avoid nested marks.

use crate::contracts::check_ranges_well_formed;
use crate::normalize::{char_len, char_offset};
use crate::types::MatchRange;

/// Find every occurrence of every term and merge overlapping hits.
///
/// `source` and `terms` must already be normalized the same way. Offsets in
/// the result are chars of `source`.
///
/// # Example
///
/// ```
/// use pressmark::{build_ranges, MatchRange};
///
/// let terms = vec!["cancer".to_string(), "cancer therapy".to_string()];
/// let ranges = build_ranges("a cancer cancer therapy case", &terms);
/// // The second "cancer" is covered by "cancer therapy" and merges into it
/// assert_eq!(ranges, vec![MatchRange::new(2, 8), MatchRange::new(9, 23)]);
/// ```
pub fn build_ranges(source: &str, terms: &[String]) -> Vec<MatchRange> {
    if source.is_empty() || terms.is_empty() {
        return Vec::new();
    }

    let mut raw: Vec<MatchRange> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .flat_map(|term| find_occurrences(source, term))
        .collect();

    if raw.is_empty() {
        return raw;
    }

    raw.sort_by_key(|range| range.start);
    let merged = merge_ranges(raw);

    check_ranges_well_formed(&merged, char_len(source));
    merged
}

/// Non-overlapping left-to-right scan for one term.
///
/// `match_indices` resumes after each hit, so "aaaa" holds two "aa", not three.
fn find_occurrences<'a>(source: &'a str, term: &'a str) -> impl Iterator<Item = MatchRange> + 'a {
    let term_len = char_len(term);
    source.match_indices(term).map(move |(byte_start, _)| {
        let start = char_offset(source, byte_start);
        MatchRange::new(start, start + term_len)
    })
}

/// Merge ranges sorted by start into disjoint, non-touching runs.
fn merge_ranges(sorted: Vec<MatchRange>) -> Vec<MatchRange> {
    let mut merged: Vec<MatchRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}
