use proptest::prelude::*;

use pressmark::{highlight, normalize_for_display_comparison, normalize_for_search};

use super::text_strategy;
use crate::common::{chars, joined, matched};

const CAFE_COMPOSED: &str = "caf\u{e9}";
const CAFE_DECOMPOSED: &str = "cafe\u{301}";

#[test]
fn test_composed_cafe_highlights_in_place() {
    let text = format!("Le {} du coin", CAFE_COMPOSED);
    assert_eq!(matched(highlight(&text, CAFE_COMPOSED)), vec![CAFE_COMPOSED]);
}

#[test]
fn test_decomposed_cafe_highlights_in_place() {
    let text = format!("Le {} du coin", CAFE_DECOMPOSED);
    let segments = highlight(&text, CAFE_DECOMPOSED);
    assert_eq!(matched(segments.clone()), vec![CAFE_DECOMPOSED]);
    assert_eq!(joined(segments), text);
}

#[test]
fn test_mixed_forms_never_corrupt_offsets() {
    // Offsets come from the length-preserving fold, so a form mismatch
    // misses the match instead of slicing the wrong chars.
    let text = format!("Le {} du coin", CAFE_DECOMPOSED);
    let segments = highlight(&text, CAFE_COMPOSED);
    assert_eq!(joined(segments.clone()), text);
    assert!(segments.clone().all(|s| !s.is_match() || s.text.contains("caf")));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_display_comparison_unifies_forms() {
    assert_eq!(
        normalize_for_display_comparison(CAFE_COMPOSED),
        normalize_for_display_comparison(CAFE_DECOMPOSED)
    );
    assert_eq!(normalize_for_display_comparison("ﬁnal"), "final");
    assert_ne!(chars(&normalize_for_display_comparison(CAFE_COMPOSED)), chars(CAFE_COMPOSED));
}

#[test]
fn test_search_fold_keeps_expanding_lowercase() {
    // U+0130 lower-cases to two chars, so it is left as is.
    assert_eq!(normalize_for_search("İstanbul"), "İstanbul");
}

proptest! {
    /// Property: the search fold never changes the char count.
    #[test]
    fn prop_search_fold_preserves_length(text in text_strategy()) {
        prop_assert_eq!(chars(&normalize_for_search(&text)), chars(&text));
    }

    /// Property: arbitrary Unicode never breaks the fold or highlighting.
    #[test]
    fn prop_any_unicode_reconstructs(text in "\\PC{0,40}", query in "\\PC{0,6}") {
        prop_assert_eq!(chars(&normalize_for_search(&text)), chars(&text));
        prop_assert_eq!(joined(highlight(&text, &query)), text);
    }

    /// Property: folding is idempotent.
    #[test]
    fn prop_search_fold_idempotent(text in text_strategy()) {
        let once = normalize_for_search(&text);
        prop_assert_eq!(normalize_for_search(&once), once.clone());
    }
}
