// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: from what the user typed to the strings we look for.
//!
//! A query produces two term lists. The *display* terms ([`extract_terms`])
//! keep the user's casing: the whole trimmed query first, then each word of
//! two or more chars, deduplicated case-insensitively and sorted longest-first.
//! The *match* terms ([`match_terms`]) are those terms normalized for search
//! and expanded with a naive singular/plural variant, which is what every
//! matching component actually scans for.
//!
//! The whole query is always a display term. Words, and every match term,
//! are at least two chars long, so a one-char query has a display term but
//! no match terms. An empty match list means "no active search". Every other
//! component treats it as a pass-through signal.

use std::collections::HashSet;

use crate::normalize::{char_len, normalize_for_search};

/// Terms shorter than this never get a plural/singular variant.
pub const MIN_VARIANT_LEN: usize = 3;

/// Parse a query into display terms.
///
/// # Example
///
/// ```
/// use pressmark::extract_terms;
///
/// let terms = extract_terms("  FDA approval ");
/// assert_eq!(terms, vec!["FDA approval", "approval", "FDA"]);
/// assert!(extract_terms("   ").is_empty());
/// ```
pub fn extract_terms(query: &str) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let words = trimmed
        .split_whitespace()
        .filter(|word| char_len(word) > 1);

    let mut seen = HashSet::new();
    let mut terms: Vec<String> = std::iter::once(trimmed)
        .chain(words)
        .filter(|term| seen.insert(term.to_lowercase()))
        .map(str::to_string)
        .collect();

    // Stable: equal lengths keep discovery order
    terms.sort_by_key(|term| std::cmp::Reverse(char_len(term)));
    terms
}

/// Expand a term with its naive plural or singular form.
///
/// Terms of three or more chars gain one variant: a trailing `s` is stripped
/// if present, appended otherwise. Results of one char or less are dropped.
pub fn expand_variants(term: &str) -> Vec<String> {
    let value = term.trim();
    if char_len(value) < MIN_VARIANT_LEN {
        return if char_len(value) > 1 {
            vec![value.to_string()]
        } else {
            Vec::new()
        };
    }

    let variant = match value.strip_suffix('s') {
        Some(singular) => singular.to_string(),
        None => format!("{}s", value),
    };

    [value.to_string(), variant]
        .into_iter()
        .filter(|item| char_len(item) > 1)
        .collect()
}

/// Parse a query into normalized match terms with variants.
///
/// Order follows [`extract_terms`], each term directly followed by its
/// variant. Duplicates are removed; see [`scoring_terms`] for the full list.
pub fn match_terms(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    scoring_terms(query)
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Match terms with duplicates kept.
///
/// A variant that equals another term ("trial" from "trials" next to the
/// word "trial") appears once per source term. Best-match scoring counts
/// every listed term, so such a term weighs twice.
pub(crate) fn scoring_terms(query: &str) -> Vec<String> {
    extract_terms(query)
        .iter()
        .flat_map(|term| expand_variants(&normalize_for_search(term)))
        .collect()
}
