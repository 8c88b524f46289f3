use proptest::prelude::*;

use pressmark::{extract_snippet, ELLIPSIS};

use super::{query_strategy, text_strategy};
use crate::common::chars;

proptest! {
    /// Property: a snippet never exceeds its budget plus two ellipses.
    #[test]
    fn prop_snippet_bounded(
        text in text_strategy(),
        query in query_strategy(),
        max_length in 1usize..80,
    ) {
        let snippet = extract_snippet(&text, &query, max_length);
        prop_assert!(chars(&snippet) <= max_length + 2, "{} > {}", chars(&snippet), max_length + 2);
    }

    /// Property: without a hit the snippet is a plain prefix, no ellipsis.
    #[test]
    fn prop_no_hit_is_prefix(
        text in "[a-m ]{0,120}",
        query in "[n-z]{2,6}",
        max_length in 1usize..60,
    ) {
        let snippet = extract_snippet(&text, &query, max_length);
        let expected: String = text.trim().chars().take(max_length).collect();
        prop_assert_eq!(snippet, expected);
    }

    /// Property: a query word planted in filler is always kept in the window.
    #[test]
    fn prop_planted_term_is_kept(
        before in 0usize..60,
        after in 0usize..60,
        max_length in 20usize..80,
    ) {
        let text = format!("{}needle {}", "word ".repeat(before), "word ".repeat(after));
        let snippet = extract_snippet(&text, "needle", max_length);
        prop_assert!(snippet.contains("needle"), "{:?}", snippet);
        if before == 0 {
            prop_assert!(!snippet.starts_with(ELLIPSIS));
        }
    }

    /// Property: snippets are idempotent once they fit.
    #[test]
    fn prop_short_text_unchanged(
        text in "[a-z]{1,8}( [a-z]{1,8}){0,4}",
        query in query_strategy(),
    ) {
        let snippet = extract_snippet(&text, &query, 200);
        prop_assert_eq!(snippet, text);
    }
}
