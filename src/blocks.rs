// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structuring scraped press-release bodies for reading.
//!
//! Scraped full text arrives as a flat run of lines: real paragraphs split
//! mid-sentence, footnote markers, social-media link labels, stray glyphs.
//! This module cleans those lines, groups them into headings and paragraphs,
//! and finds the block a field match came from so a reader can be taken to it.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Block, BlockKind, FieldMatch, MatchTarget};

/// Shown when a document has no usable title.
pub const UNTITLED: &str = "Press Release";

/// Headings are short.
const MAX_HEADING_CHARS: usize = 70;
const MAX_HEADING_WORDS: usize = 10;

/// A paragraph ending in terminal punctuation closes once it is this long.
const PARAGRAPH_SOFT_LIMIT: usize = 240;

/// Words of a field match used to find its paragraph.
const LOCATE_WORDS: usize = 10;
/// Leading chars of a paragraph tested against the field match.
const LOCATE_PREFIX_CHARS: usize = 80;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static CAMEL_JOIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// "a The company" → "The company": a dropped-cap artifact.
static STRAY_LEADING_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]\s+([A-Z])").unwrap());

static TRAILING_FOOTNOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+[0-9]+$").unwrap());

static NOISE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:weblink|[.,;:!\-–—]+|and connect with us on|x(?:\s*\(formerly twitter\))?|facebook|instagram|youtube|linkedin|[®©™]|[0-9]{1,2})$",
    )
    .unwrap()
});

static HEADING_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9®&(),\-\s]+$").unwrap());

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Lower-case and collapse whitespace, for comparing block text.
fn normalize_for_locate(text: &str) -> String {
    collapse_whitespace(&text.to_lowercase())
}

/// Split camel-case joins and collapse whitespace.
///
/// ```
/// use pressmark::normalize_title;
///
/// assert_eq!(normalize_title("Pfizer AnnouncesResults"), "Pfizer Announces Results");
/// assert_eq!(normalize_title("   "), "Press Release");
/// ```
pub fn normalize_title(title: &str) -> String {
    let split = CAMEL_JOIN.replace_all(title, "$1 $2");
    let cleaned = collapse_whitespace(&split);
    if cleaned.is_empty() {
        UNTITLED.to_string()
    } else {
        cleaned
    }
}

/// Clean scraped body text line by line, dropping noise lines.
pub fn clean_body_text(text: &str) -> String {
    text.split('\n')
        .map(collapse_whitespace)
        .map(|line| STRAY_LEADING_LETTER.replace(&line, "$1").into_owned())
        .map(|line| TRAILING_FOOTNOTE.replace(&line, "").into_owned())
        .filter(|line| !line.is_empty() && !NOISE_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_heading_like(line: &str) -> bool {
    if line.is_empty() || line.chars().count() > MAX_HEADING_CHARS {
        return false;
    }
    if line.ends_with(':') {
        return true;
    }
    if line.split_whitespace().count() > MAX_HEADING_WORDS {
        return false;
    }
    HEADING_CHARS.is_match(line) && line == line.to_uppercase()
}

fn ends_sentence(text: &str) -> bool {
    text.ends_with(['.', '!', '?'])
}

/// Group cleaned body lines into headings and paragraphs.
pub fn build_blocks(text: &str) -> Vec<Block> {
    let cleaned = clean_body_text(text);
    let mut blocks = Vec::new();
    let mut buffer = String::new();

    fn flush(buffer: &mut String, blocks: &mut Vec<Block>) {
        let paragraph = buffer.trim();
        if !paragraph.is_empty() {
            blocks.push(Block {
                kind: BlockKind::Paragraph,
                text: paragraph.to_string(),
            });
        }
        buffer.clear();
    }

    for line in cleaned.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if is_heading_like(line) {
            flush(&mut buffer, &mut blocks);
            blocks.push(Block {
                kind: BlockKind::Heading,
                text: line.strip_suffix(':').unwrap_or(line).to_string(),
            });
            continue;
        }

        if buffer.is_empty() {
            buffer.push_str(line);
        } else if ends_sentence(&buffer) && buffer.chars().count() > PARAGRAPH_SOFT_LIMIT {
            flush(&mut buffer, &mut blocks);
            buffer.push_str(line);
        } else {
            buffer.push(' ');
            buffer.push_str(line);
        }
    }
    flush(&mut buffer, &mut blocks);

    blocks
}

/// Find where a field match lives among structured blocks.
///
/// Title matches point at the title. Otherwise the first paragraph holding
/// the match's opening words (or whose opening is inside the match) wins.
pub fn locate_match_target(blocks: &[Block], field_match: &FieldMatch) -> MatchTarget {
    let target = normalize_for_locate(&field_match.plain_text);
    if target.is_empty() {
        return MatchTarget::Nothing;
    }

    let field = if field_match.field.is_empty() {
        &field_match.field_label
    } else {
        &field_match.field
    };
    if normalize_for_locate(field).contains("title") {
        return MatchTarget::Title;
    }

    let opening: String = target
        .split(' ')
        .filter(|w| !w.is_empty())
        .take(LOCATE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.kind == BlockKind::Paragraph)
        .find(|(_, block)| {
            let text = normalize_for_locate(&block.text);
            let prefix: String = text.chars().take(LOCATE_PREFIX_CHARS).collect();
            text.contains(opening.as_str()) || target.contains(prefix.as_str())
        })
        .map_or(MatchTarget::FirstHighlight, |(index, _)| MatchTarget::Block(index))
}
