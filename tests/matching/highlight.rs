use pressmark::{
    build_ranges, highlight, match_terms, normalize_for_search, HighlightedText, MatchRange,
};

use crate::common::{joined, matched, pairs};

#[test]
fn test_empty_query_is_identity() {
    let text = "Pfizer announces results";
    assert_eq!(pairs(highlight(text, "")), vec![(false, text)]);
    assert_eq!(pairs(highlight(text, "   ")), vec![(false, text)]);
}

#[test]
fn test_empty_text_yields_one_empty_plain_segment() {
    assert_eq!(pairs(highlight("", "vaccine")), vec![(false, "")]);
}

#[test]
fn test_no_match_is_identity() {
    let text = "Quarterly revenue grew";
    assert_eq!(pairs(highlight(text, "diabetes")), vec![(false, text)]);
}

#[test]
fn test_original_casing_is_preserved() {
    let segments = highlight("The FDA Approval came early", "fda approval");
    assert_eq!(
        pairs(segments),
        vec![(false, "The "), (true, "FDA Approval"), (false, " came early")]
    );
}

#[test]
fn test_nested_matches_merge() {
    let text = "a cancer cancer therapy case";
    assert_eq!(
        pairs(highlight(text, "cancer therapy")),
        vec![
            (false, "a "),
            (true, "cancer"),
            (false, " "),
            (true, "cancer therapy"),
            (false, " case"),
        ]
    );
}

#[test]
fn test_nested_ranges_built_once() {
    let terms = vec!["cancer therapy".to_string(), "cancer".to_string()];
    assert_eq!(
        build_ranges("a cancer cancer therapy case", &terms),
        vec![MatchRange::new(2, 8), MatchRange::new(9, 23)]
    );
}

#[test]
fn test_touching_ranges_merge() {
    let terms = vec!["ab".to_string(), "cd".to_string()];
    assert_eq!(build_ranges("abcd", &terms), vec![MatchRange::new(0, 4)]);
}

#[test]
fn test_plural_variant_highlights() {
    assert_eq!(matched(highlight("Two vaccines were approved", "vaccine")), vec!["vaccines"]);
    assert_eq!(matched(highlight("One vaccine was approved", "vaccines")), vec!["vaccine"]);
}

#[test]
fn test_typographic_punctuation_matches_ascii_query() {
    let text = "Phase\u{a0}3 results – Smith’s team";
    assert_eq!(matched(highlight(text, "phase 3")), vec!["Phase\u{a0}3"]);
    assert_eq!(matched(highlight(text, "smith's")), vec!["Smith’s"]);
    assert_eq!(matched(highlight(text, "results - smith's")), vec!["results – Smith’s"]);
}

#[test]
fn test_offsets_are_chars_not_bytes() {
    let text = "Née Müller’s café opened";
    let segments = highlight(text, "café");
    assert_eq!(matched(segments.clone()), vec!["café"]);
    assert_eq!(joined(segments), text);
}

#[test]
fn test_segments_restart_from_clone() {
    let segments = highlight("vaccine and vaccine", "vaccine");
    let first: Vec<_> = segments.clone().collect();
    let second: Vec<_> = segments.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_render_wraps_matches() {
    let html = highlight("New AI platform", "ai").render("<mark>", "</mark>");
    assert_eq!(html, "New <mark>AI</mark> platform");
}

#[test]
fn test_highlighted_text_owns_its_ranges() {
    let owned = HighlightedText::new(String::from("Oncology pipeline update"), "pipeline");
    assert!(owned.has_matches());
    assert_eq!(owned.ranges, vec![MatchRange::new(9, 17)]);
    assert_eq!(matched(owned.segments()), vec!["pipeline"]);
}

#[test]
fn test_ranges_from_match_terms_cover_variants() {
    let terms = match_terms("trial");
    let source = normalize_for_search("Trials and a trial");
    assert_eq!(
        build_ranges(&source, &terms),
        vec![MatchRange::new(0, 6), MatchRange::new(13, 18)]
    );
}
