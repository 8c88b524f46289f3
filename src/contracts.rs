// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching engine.
//!
//! Debug-mode assertions for the properties the highlighter and snippet code
//! depend on. They compile to nothing in release builds.
//!
//! | Contract                    | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_length_preserved`    | normalized text has the same char count         |
//! | `check_ranges_well_formed`  | ranges ascending, disjoint, non-touching, bounded |
//! | `check_reconstruction`      | segments concatenate back to the display text   |
//! | `check_snippet_bound`       | snippet fits the budget plus two ellipses       |
//!
//! # Usage
//!
//! ```ignore
//! use pressmark::contracts::*;
//!
//! // In debug builds, this panics if the ranges overlap
//! check_ranges_well_formed(&ranges, char_len);
//! ```

use crate::types::{MatchRange, Segment};

/// Check that normalization did not change the char count.
///
/// Ranges computed on `normalized` are applied to `original` unchanged, so a
/// length-changing normalizer would silently shift every highlight.
#[inline]
pub fn check_length_preserved(original: &str, normalized: &str) {
    debug_assert_eq!(
        original.chars().count(),
        normalized.chars().count(),
        "LENGTH_PRESERVED violated: normalization changed char count of {:?}",
        original
    );
}

/// Check that ranges are sorted, non-empty, disjoint, non-touching and
/// within `len` chars.
#[inline]
pub fn check_ranges_well_formed(ranges: &[MatchRange], len: usize) {
    #[cfg(debug_assertions)]
    {
        for range in ranges {
            debug_assert!(
                range.start < range.end,
                "RANGE_NONEMPTY violated: {:?}",
                range
            );
            debug_assert!(
                range.end <= len,
                "RANGE_BOUNDED violated: {:?} exceeds text length {}",
                range,
                len
            );
        }
        for pair in ranges.windows(2) {
            debug_assert!(
                pair[0].end < pair[1].start,
                "RANGES_DISJOINT violated: {:?} touches or overlaps {:?}",
                pair[0],
                pair[1]
            );
        }
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (ranges, len);
    }
}

/// Check that a segment sequence concatenates back to `text`.
#[inline]
pub fn check_reconstruction<'a>(text: &str, segments: impl Iterator<Item = Segment<'a>>) {
    #[cfg(debug_assertions)]
    {
        let rebuilt: String = segments.map(|segment| segment.text).collect();
        debug_assert_eq!(rebuilt, text, "RECONSTRUCTION violated");
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (text, segments);
    }
}

/// Check that a snippet stays within `max_length` chars plus two ellipses.
#[inline]
pub fn check_snippet_bound(snippet: &str, max_length: usize) {
    debug_assert!(
        snippet.chars().count() <= max_length.saturating_add(2),
        "SNIPPET_BOUND violated: {} chars for a budget of {}",
        snippet.chars().count(),
        max_length
    );
}
