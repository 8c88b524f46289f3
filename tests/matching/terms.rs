use pressmark::{expand_variants, extract_terms, match_terms};

#[test]
fn test_empty_and_blank_queries_have_no_terms() {
    assert!(extract_terms("").is_empty());
    assert!(extract_terms("   ").is_empty());
    assert!(extract_terms("\t\n").is_empty());
    assert!(match_terms("   ").is_empty());
}

#[test]
fn test_phrase_then_words_longest_first() {
    assert_eq!(extract_terms("FDA approval"), vec!["FDA approval", "approval", "FDA"]);
}

#[test]
fn test_case_insensitive_dedupe_keeps_first_spelling() {
    assert_eq!(extract_terms("Vaccine vaccine"), vec!["Vaccine vaccine", "Vaccine"]);
}

#[test]
fn test_single_word_query_is_not_repeated() {
    assert_eq!(extract_terms("oncology"), vec!["oncology"]);
}

#[test]
fn test_short_words_are_dropped() {
    assert_eq!(extract_terms("a b trial"), vec!["a b trial", "trial"]);
}

#[test]
fn test_equal_lengths_keep_discovery_order() {
    assert_eq!(extract_terms("beta alfa"), vec!["beta alfa", "beta", "alfa"]);
}

#[test]
fn test_variants_go_both_ways() {
    assert_eq!(expand_variants("trial"), vec!["trial", "trials"]);
    assert_eq!(expand_variants("trials"), vec!["trials", "trial"]);
    assert_eq!(expand_variants("ai"), vec!["ai"]);
    assert!(expand_variants("x").is_empty());
}

#[test]
fn test_match_terms_are_normalized_and_unique() {
    let terms = match_terms("Trials trial");
    assert_eq!(terms, vec!["trials trial", "trials trials", "trials", "trial"]);
    assert!(terms.iter().all(|t| t.chars().count() > 1));
}

#[test]
fn test_match_terms_fold_punctuation() {
    assert_eq!(match_terms("Smith’s"), vec!["smith's", "smith'"]);
}

#[test]
fn test_single_char_query_is_shown_but_matches_nothing() {
    assert_eq!(extract_terms(" x "), vec!["x"]);
    assert!(match_terms("x").is_empty());
}
