// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword-based topic categories.
//!
//! A document belongs to a category when at least one keyword occurs in its
//! aggregated text. Phrases ("clinical trial") are plain substring tests.
//! Single words are anchored on word boundaries so that "ai" finds "AI
//! platform" but not "said".
//!
//! Filtering never silently empties a page: a category with no hits falls
//! back to the unfiltered list and says so.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::types::{Category, Document};

/// One compiled keyword test.
#[derive(Debug, Clone)]
enum KeywordTest {
    Phrase(String),
    Word(Regex),
}

impl KeywordTest {
    fn matches(&self, haystack: &str) -> bool {
        match self {
            KeywordTest::Phrase(phrase) => haystack.contains(phrase.as_str()),
            KeywordTest::Word(pattern) => pattern.is_match(haystack),
        }
    }
}

/// A category with its keyword patterns compiled once.
///
/// Compile once per page of documents rather than once per document.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    id: String,
    tests: Vec<KeywordTest>,
}

impl CategoryMatcher {
    pub fn compile(category: &Category) -> Result<Self> {
        let tests = category
            .keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .map(|keyword| compile_keyword(&category.id, keyword))
            .collect::<Result<Vec<_>>>()?;

        Ok(CategoryMatcher {
            id: category.id.clone(),
            tests,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Test a pre-built, lower-cased haystack.
    pub fn matches_haystack(&self, haystack: &str) -> bool {
        self.tests.iter().any(|test| test.matches(haystack))
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.matches_haystack(&document_haystack(document))
    }
}

fn compile_keyword(category_id: &str, keyword: String) -> Result<KeywordTest> {
    if keyword.contains(' ') {
        return Ok(KeywordTest::Phrase(keyword));
    }
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&keyword)))
        .case_insensitive(true)
        .build()
        .map(KeywordTest::Word)
        .map_err(|source| Error::Keyword {
            category: category_id.to_string(),
            keyword,
            source,
        })
}

/// All searchable text of a document, space-joined and lower-cased.
///
/// Title, company, summary and description, then every field match's text
/// and label.
pub fn document_haystack(document: &Document) -> String {
    let fields = [
        document.title.as_str(),
        document.company.as_str(),
        document.summary.as_str(),
        document.description.as_str(),
    ];
    let matches = document
        .field_matches
        .iter()
        .flat_map(|m| [m.plain_text.as_str(), m.field_label.as_str()]);

    fields
        .into_iter()
        .chain(matches)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether `document` belongs to `category`.
///
/// A keyword that fails to compile is logged and counts as no match.
pub fn matches_category(document: &Document, category: &Category) -> bool {
    match CategoryMatcher::compile(category) {
        Ok(matcher) => matcher.matches(document),
        Err(e) => {
            tracing::warn!(category = %category.id, error = %e, "skipping category");
            false
        }
    }
}

/// Outcome of applying one category filter to a page.
#[derive(Debug, Clone)]
pub struct CategoryFilter<'a> {
    pub documents: Vec<&'a Document>,
    /// Id of the category that was applied, if any.
    pub applied: Option<String>,
    /// True when a category was requested but the full list is shown instead.
    pub fell_back: bool,
}

/// Restrict `documents` to the active category, falling back to all of them.
///
/// - no active category: all documents
/// - unknown id, uncompilable keywords, or zero hits: all documents, `fell_back`
/// - otherwise: the matching documents, in input order
pub fn filter_by_category<'a>(
    documents: &'a [Document],
    categories: &[Category],
    active: Option<&str>,
) -> CategoryFilter<'a> {
    let everything = |fell_back| CategoryFilter {
        documents: documents.iter().collect(),
        applied: None,
        fell_back,
    };

    let Some(active) = active else {
        return everything(false);
    };

    let Some(category) = categories.iter().find(|c| c.id == active) else {
        tracing::warn!(category = active, "unknown category, showing all documents");
        return everything(true);
    };

    let matcher = match CategoryMatcher::compile(category) {
        Ok(matcher) => matcher,
        Err(e) => {
            tracing::warn!(category = active, error = %e, "category failed to compile");
            return everything(true);
        }
    };

    let hits: Vec<&Document> = documents.iter().filter(|d| matcher.matches(d)).collect();
    if hits.is_empty() {
        tracing::debug!(
            category = active,
            total = documents.len(),
            "no category hits, falling back"
        );
        return everything(!documents.is_empty());
    }

    tracing::debug!(
        category = active,
        hits = hits.len(),
        total = documents.len(),
        "category applied"
    );
    CategoryFilter {
        documents: hits,
        applied: Some(category.id.clone()),
        fell_back: false,
    }
}
