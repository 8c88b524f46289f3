// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Arbitrary text and queries must never panic, must rebuild the input
//! exactly, and must never slice through a multi-byte char.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pressmark::{highlight, match_terms, normalize_for_search};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    // Cap sizes to avoid timeouts
    if input.text.len() > 4096 || input.query.len() > 200 {
        return;
    }

    // INVARIANT 1: folding keeps the char count
    assert_eq!(
        normalize_for_search(&input.text).chars().count(),
        input.text.chars().count()
    );

    // INVARIANT 2: segments rebuild the input
    let rebuilt: String = highlight(&input.text, &input.query).map(|s| s.text).collect();
    assert_eq!(rebuilt, input.text);

    // INVARIANT 3: every match segment contains a term
    let terms = match_terms(&input.query);
    for segment in highlight(&input.text, &input.query).filter(|s| s.is_match()) {
        let folded = normalize_for_search(segment.text);
        assert!(
            terms.iter().any(|t| folded.contains(t.as_str())),
            "match {:?} holds no term of {:?}",
            segment.text,
            terms
        );
    }
});
