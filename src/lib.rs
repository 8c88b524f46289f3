// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching, excerpts and highlighting for press-release search results.
//!
//! This crate is the presentation-side engine behind a results page: it takes
//! a free-text query and a page of already-fetched documents, and decides what
//! matched, which excerpt to show, and which runs of text to highlight. There
//! is no index here; the inputs are a handful of documents and short strings.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ normalize.rs │────▶│  terms.rs   │────▶│  ranges.rs   │
//! │ (char-stable │     │ (display +  │     │ (scan, sort, │
//! │  folding)    │     │  variants)  │     │   merge)     │
//! └──────────────┘     └─────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                    ┌───────────────┐    ┌──────────────┐
//!                    │ best_match.rs │    │ highlight.rs │
//!                    │  snippet.rs   │    │  (Segments)  │
//!                    └───────────────┘    └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                    ┌─────────────────────────────────┐
//!                    │ card.rs (title + excerpt cards) │
//!                    └─────────────────────────────────┘
//! ```
//!
//! `category.rs` (keyword topics) and `blocks.rs` (full-text structuring) sit
//! beside the pipeline and only share the document types.
//!
//! # Usage
//!
//! ```
//! use pressmark::{build_card, highlight, Segment};
//! use pressmark::testing::make_doc_with_matches;
//!
//! let doc = make_doc_with_matches(1, "FDA grants approval", &["FDA approval granted"]);
//! let card = build_card(&doc, "FDA approval", 220);
//! assert_eq!(card.excerpt.as_str(), "FDA approval granted");
//!
//! let rendered = highlight("FDA grants approval", "approval").render("<mark>", "</mark>");
//! assert_eq!(rendered, "FDA grants <mark>approval</mark>");
//! ```

// Module declarations
pub mod best_match;
pub mod blocks;
pub mod card;
pub mod category;
pub mod config;
pub mod contracts;
pub mod error;
pub mod highlight;
pub mod normalize;
pub mod ranges;
pub mod snippet;
pub mod terms;
pub mod testing;
mod types;

// Re-exports for public API
pub use best_match::{has_any_query_match, select_best_match};
pub use blocks::{build_blocks, clean_body_text, locate_match_target, normalize_title};
pub use card::{build_card, build_cards, result_excerpt, ResultCard};
pub use category::{
    document_haystack, filter_by_category, matches_category, CategoryFilter, CategoryMatcher,
};
pub use config::{default_categories, load_documents, parse_documents, EngineConfig};
pub use error::{Error, Result};
pub use highlight::{highlight, highlight_with_terms, HighlightedText, Segments};
pub use normalize::{normalize_for_display_comparison, normalize_for_search};
pub use ranges::build_ranges;
pub use snippet::{extract_snippet, DEFAULT_SNIPPET_LENGTH, ELLIPSIS};
pub use terms::{expand_variants, extract_terms, match_terms};
pub use types::{
    Block, BlockKind, Category, Document, FieldMatch, MatchRange, MatchTarget, Segment,
    SegmentKind,
};
