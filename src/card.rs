// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result cards: what a page of search results actually shows.
//!
//! A card pairs a document with a highlighted title and a highlighted excerpt.
//! The excerpt prefers the best upstream field match; documents without one
//! fall back to their summary, then their description. Either way the text
//! goes through the snippet extractor so it fits the card.
//!
//! A page is small, but every card is independent, so with the `parallel`
//! feature the page is built on rayon. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::best_match::select_best_match;
use crate::highlight::HighlightedText;
use crate::snippet::extract_snippet;
use crate::terms::match_terms;
use crate::types::Document;

/// A document ready for rendering on a results page.
#[derive(Debug, Clone, Serialize)]
pub struct ResultCard<'a> {
    pub document: &'a Document,
    pub title: HighlightedText,
    pub excerpt: HighlightedText,
}

/// Pick and trim the excerpt shown for `document`.
pub fn result_excerpt(document: &Document, query: &str, max_length: usize) -> String {
    let best = select_best_match(&document.field_matches, query);
    let source = if best.is_empty() {
        [document.summary.as_str(), document.description.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    } else {
        best.as_str()
    };
    extract_snippet(source, query, max_length)
}

/// Build one card.
pub fn build_card<'a>(document: &'a Document, query: &str, max_length: usize) -> ResultCard<'a> {
    let terms = match_terms(query);
    card_with_terms(document, query, &terms, max_length)
}

fn card_with_terms<'a>(
    document: &'a Document,
    query: &str,
    terms: &[String],
    max_length: usize,
) -> ResultCard<'a> {
    ResultCard {
        document,
        title: HighlightedText::with_terms(document.title.as_str(), terms),
        excerpt: HighlightedText::with_terms(result_excerpt(document, query, max_length), terms),
    }
}

/// Build cards for a page of documents, preserving order.
pub fn build_cards<'a>(
    documents: &'a [Document],
    query: &str,
    max_length: usize,
) -> Vec<ResultCard<'a>> {
    let terms = match_terms(query);

    #[cfg(feature = "parallel")]
    {
        documents
            .par_iter()
            .map(|doc| card_with_terms(doc, query, &terms, max_length))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        documents
            .iter()
            .map(|doc| card_with_terms(doc, query, &terms, max_length))
            .collect()
    }
}
