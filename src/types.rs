// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types the matching engine passes around.
//!
//! Everything here is recomputed per query and per render. Nothing is mutated
//! in place once built, and nothing outlives the call that produced it unless
//! the caller decides to keep it.
//!
//! # Invariants
//!
//! - **MatchRange**: `start < end`, offsets count `char`s of a normalized text.
//!   Within one list, ranges are sorted by `start` and never overlap or touch.
//!
//! - **Segment**: borrowed slices of the *display* text. Concatenating every
//!   segment of one highlight, in order, gives back the display text exactly.
//!
//! - **Document**: every string field is present. Missing or `null` JSON
//!   values become empty strings, a missing `field_matches` becomes `[]`.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// MATCHING
// =============================================================================

/// Half-open interval `[start, end)` over character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {} past end {}", start, end);
        MatchRange { start, end }
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Whether a run of text is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Plain,
    Match,
}

/// One run of display text, either plain or highlighted.
///
/// The rendering layer decides what a `Match` looks like (`<mark>`, ANSI
/// colors, bold). The engine only says where the runs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    #[inline]
    pub fn plain(text: &'a str) -> Self {
        Segment {
            kind: SegmentKind::Plain,
            text,
        }
    }

    #[inline]
    pub fn matched(text: &'a str) -> Self {
        Segment {
            kind: SegmentKind::Match,
            text,
        }
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.kind == SegmentKind::Match
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Treat a JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A pre-identified textual hit inside a document, produced upstream.
///
/// The engine never creates these. It scores them, picks one, and uses the
/// field name to decide where the hit lives in the full text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatch {
    #[serde(default, deserialize_with = "nullable")]
    pub field: String,
    #[serde(default, deserialize_with = "nullable")]
    pub field_label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub plain_text: String,
}

impl FieldMatch {
    pub fn new(field: &str, field_label: &str, plain_text: &str) -> Self {
        FieldMatch {
            field: field.to_string(),
            field_label: field_label.to_string(),
            plain_text: plain_text.to_string(),
        }
    }
}

/// One press release as the search API returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub published_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub full_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub field_matches: Vec<FieldMatch>,
}

/// Static keyword-based document grouping.
///
/// Keywords containing a space are matched as phrases, single words are
/// matched on word boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Category {
    pub fn new(id: &str, title: &str, keywords: &[&str]) -> Self {
        Category {
            id: id.to_string(),
            title: title.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

// =============================================================================
// FULL TEXT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Paragraph,
}

/// A heading or paragraph recovered from a flat press-release body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

/// Where the reader should be scrolled to when opening a field match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchTarget {
    /// The hit is in the title.
    Title,
    /// The hit lives in this block of the structured body.
    Block(usize),
    /// No block matched; fall back to the first highlighted run.
    FirstHighlight,
    /// Nothing to locate.
    Nothing,
}
