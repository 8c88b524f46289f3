// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for document payloads.
//!
//! Arbitrary bytes fed to the payload parser must fail cleanly, and any page
//! that parses must survive carding, filtering and structuring.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pressmark::{build_blocks, build_cards, default_categories, filter_by_category, parse_documents};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(page) = parse_documents(raw) else {
        return;
    };

    let cards = build_cards(&page, "fda approval", 120);
    assert_eq!(cards.len(), page.len());

    let categories = default_categories();
    for category in &categories {
        let filtered = filter_by_category(&page, &categories, Some(category.id.as_str()));
        assert!(page.is_empty() || !filtered.documents.is_empty());
    }

    for doc in &page {
        let _ = build_blocks(&doc.full_text);
    }
});
