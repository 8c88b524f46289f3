// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Whatever the text, query and budget, the snippet stays within the budget
//! plus two ellipses.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pressmark::extract_snippet;

#[derive(Debug, Arbitrary)]
struct SnippetInput {
    text: String,
    query: String,
    max_length: usize,
}

fuzz_target!(|input: SnippetInput| {
    if input.text.len() > 8192 || input.query.len() > 200 {
        return;
    }
    let max_length = input.max_length;

    let snippet = extract_snippet(&input.text, &input.query, max_length);
    let len = snippet.chars().count();
    assert!(
        len <= max_length.saturating_add(2),
        "snippet of {} chars for budget {}",
        len,
        max_length
    );
    if max_length == 0 {
        assert!(snippet.is_empty());
    }
});
