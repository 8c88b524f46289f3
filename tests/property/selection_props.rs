use proptest::prelude::*;

use pressmark::{
    default_categories, filter_by_category, has_any_query_match, select_best_match, FieldMatch,
};

use super::{query_strategy, text_strategy};
use crate::common::make_doc;

proptest! {
    /// Property: the best match is one of the candidates, trimmed, or empty.
    #[test]
    fn prop_best_match_is_a_candidate(
        texts in prop::collection::vec(text_strategy(), 0..5),
        query in query_strategy(),
    ) {
        let candidates: Vec<FieldMatch> = texts
            .iter()
            .map(|t| FieldMatch::new("full_text", "Full text", t))
            .collect();
        let best = select_best_match(&candidates, &query);
        prop_assert!(best.is_empty() || candidates.iter().any(|c| c.plain_text.trim() == best));
    }

    /// Property: a non-empty best match always contains a query term.
    #[test]
    fn prop_best_match_has_a_hit(
        texts in prop::collection::vec(text_strategy(), 1..5),
        query in query_strategy(),
    ) {
        let candidates: Vec<FieldMatch> = texts
            .iter()
            .map(|t| FieldMatch::new("full_text", "Full text", t))
            .collect();
        let best = select_best_match(&candidates, &query);
        if !best.is_empty() {
            prop_assert!(has_any_query_match(&best, &query));
        }
    }

    /// Property: a category filter never empties a non-empty page.
    #[test]
    fn prop_filter_never_empties(
        titles in prop::collection::vec(text_strategy(), 1..6),
        category in prop::sample::select(vec![
            "ai", "approvals", "oncology", "vaccines", "deals", "unknown",
        ]),
    ) {
        let docs: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| make_doc(i as i64, t))
            .collect();
        let filtered = filter_by_category(&docs, &default_categories(), Some(category));
        prop_assert!(!filtered.documents.is_empty());
        prop_assert_eq!(filtered.fell_back, filtered.applied.is_none());
    }
}
