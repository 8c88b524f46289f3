//! Shared test utilities and fixtures.

#![allow(dead_code)]

use pressmark::{Document, Segment, SegmentKind};

// Re-export canonical test utilities from pressmark::testing
pub use pressmark::testing::{
    make_doc, make_doc_with_matches, make_doc_with_summary, make_full_text_match, make_title_match,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small results page, shaped like the search API's `data` array.
pub const PAGE_JSON: &str = include_str!("../fixtures/page.json");

pub fn load_page() -> Vec<Document> {
    pressmark::parse_documents(PAGE_JSON).expect("fixture page parses")
}

// ============================================================================
// SEGMENT HELPERS
// ============================================================================

/// Collapse segments to `(is_match, text)` pairs for compact assertions.
pub fn pairs<'a>(segments: impl IntoIterator<Item = Segment<'a>>) -> Vec<(bool, &'a str)> {
    segments.into_iter().map(|s| (s.is_match(), s.text)).collect()
}

/// Texts of the match segments only.
pub fn matched<'a>(segments: impl IntoIterator<Item = Segment<'a>>) -> Vec<&'a str> {
    segments
        .into_iter()
        .filter(|s| s.kind == SegmentKind::Match)
        .map(|s| s.text)
        .collect()
}

/// Concatenate segment texts.
pub fn joined<'a>(segments: impl IntoIterator<Item = Segment<'a>>) -> String {
    segments.into_iter().map(|s| s.text).collect()
}

/// Char count, the unit every offset and budget is measured in.
pub fn chars(s: &str) -> usize {
    s.chars().count()
}
