// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Document, FieldMatch};

/// Create a document with just an id and a title.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: i64, title: &str) -> Document {
    Document {
        id,
        title: title.to_string(),
        url: format!("https://example.com/press/{}", id),
        published_date: "2024-01-15".to_string(),
        ..Document::default()
    }
}

/// Create a document with a title and summary.
pub fn make_doc_with_summary(id: i64, title: &str, summary: &str) -> Document {
    Document {
        summary: summary.to_string(),
        ..make_doc(id, title)
    }
}

/// Create a document carrying pre-computed field matches.
pub fn make_doc_with_matches(id: i64, title: &str, matches: &[&str]) -> Document {
    Document {
        field_matches: matches.iter().map(|text| make_full_text_match(text)).collect(),
        ..make_doc(id, title)
    }
}

/// Create a field match on the full text.
pub fn make_full_text_match(text: &str) -> FieldMatch {
    FieldMatch::new("full_text", "Full text", text)
}

/// Create a field match on the title.
pub fn make_title_match(text: &str) -> FieldMatch {
    FieldMatch::new("title", "Title", text)
}
