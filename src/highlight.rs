// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting display text into plain and highlighted runs.
//!
//! Matching happens on [`normalize_for_search`] output, slicing happens on the
//! original text. That only works because the search normalizer keeps every
//! char in place: char `i` of the normalized string is char `i` of the
//! display string. Swapping in a decomposing normalizer here would shift every
//! highlight after the first accented letter.
//!
//! The result is a plain data sequence. Turning a `Match` run into `<mark>`,
//! ANSI escapes or anything else is the renderer's call.

use std::iter::FusedIterator;

use serde::Serialize;

use crate::contracts::{check_length_preserved, check_reconstruction};
use crate::normalize::normalize_for_search;
use crate::ranges::build_ranges;
use crate::terms::match_terms;
use crate::types::{MatchRange, Segment};

/// Highlight every query term in `text`.
///
/// With no active query (or no hit) this yields the whole text as a single
/// plain segment, so a caller can always render the output in place of the
/// raw string.
///
/// # Example
///
/// ```
/// use pressmark::{highlight, Segment};
///
/// let segments: Vec<_> = highlight("FDA grants approval", "approval").collect();
/// assert_eq!(
///     segments,
///     vec![Segment::plain("FDA grants "), Segment::matched("approval")]
/// );
/// ```
pub fn highlight<'a>(text: &'a str, query: &str) -> Segments<'a> {
    highlight_with_terms(text, &match_terms(query))
}

/// Highlight with a pre-computed match term set.
///
/// Use this when the same query is applied to many paragraphs; `terms` must
/// come from [`match_terms`].
pub fn highlight_with_terms<'a>(text: &'a str, terms: &[String]) -> Segments<'a> {
    let ranges = find_ranges(text, terms);
    let segments = Segments::new(text, &ranges);
    check_reconstruction(text, segments.clone());
    segments
}

/// Char ranges of every term in `text`, computed on its normalized form.
fn find_ranges(text: &str, terms: &[String]) -> Vec<MatchRange> {
    if text.is_empty() || terms.is_empty() {
        return Vec::new();
    }
    let normalized = normalize_for_search(text);
    check_length_preserved(text, &normalized);
    build_ranges(&normalized, terms)
}

/// Lazy sequence of [`Segment`]s over one display text.
///
/// Cloning gives an independent iterator from the current position; iterate a
/// fresh clone to restart.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    /// Byte spans of highlighted runs, ascending and disjoint.
    spans: Vec<(usize, usize)>,
    index: usize,
    cursor: usize,
    finished: bool,
}

impl<'a> Segments<'a> {
    /// Build segments from char ranges over `text`.
    ///
    /// Ranges past the end of the text are ignored.
    pub fn new(text: &'a str, ranges: &[MatchRange]) -> Self {
        Segments {
            text,
            spans: byte_spans(text, ranges),
            index: 0,
            cursor: 0,
            finished: false,
        }
    }

    /// The whole text as one plain segment.
    pub fn whole(text: &'a str) -> Self {
        Segments::new(text, &[])
    }

    /// Whether any run is highlighted.
    pub fn has_matches(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Render by wrapping each highlighted run in `open` / `close`.
    ///
    /// ```
    /// use pressmark::highlight;
    ///
    /// let html = highlight("New AI platform", "ai").render("<mark>", "</mark>");
    /// assert_eq!(html, "New <mark>AI</mark> platform");
    /// ```
    pub fn render(self, open: &str, close: &str) -> String {
        let markup = self.spans.len() * (open.len() + close.len());
        let mut out = String::with_capacity(self.text.len() + markup);
        for segment in self {
            if segment.is_match() {
                out.push_str(open);
                out.push_str(segment.text);
                out.push_str(close);
            } else {
                out.push_str(segment.text);
            }
        }
        out
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.finished {
            return None;
        }

        if let Some(&(start, end)) = self.spans.get(self.index) {
            if self.cursor < start {
                let gap = &self.text[self.cursor..start];
                self.cursor = start;
                return Some(Segment::plain(gap));
            }
            self.index += 1;
            self.cursor = end;
            return Some(Segment::matched(&self.text[start..end]));
        }

        self.finished = true;
        if self.cursor < self.text.len() || self.spans.is_empty() {
            return Some(Segment::plain(&self.text[self.cursor..]));
        }
        None
    }
}

impl FusedIterator for Segments<'_> {}

/// Translate char ranges into byte spans of `text`.
fn byte_spans(text: &str, ranges: &[MatchRange]) -> Vec<(usize, usize)> {
    if ranges.is_empty() {
        return Vec::new();
    }
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();

    ranges
        .iter()
        .filter_map(|range| Some((*offsets.get(range.start)?, *offsets.get(range.end)?)))
        .filter(|(start, end)| start < end)
        .collect()
}

/// Owned text together with its highlight ranges.
///
/// For results that outlive the call that built them, such as result cards.
/// [`HighlightedText::segments`] replays the runs without re-matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightedText {
    pub text: String,
    pub ranges: Vec<MatchRange>,
}

impl HighlightedText {
    pub fn new(text: impl Into<String>, query: &str) -> Self {
        Self::with_terms(text, &match_terms(query))
    }

    pub fn with_terms(text: impl Into<String>, terms: &[String]) -> Self {
        let text = text.into();
        let ranges = find_ranges(&text, terms);
        HighlightedText { text, ranges }
    }

    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.text, &self.ranges)
    }

    pub fn has_matches(&self) -> bool {
        !self.ranges.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
