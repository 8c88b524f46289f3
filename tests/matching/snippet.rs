use pressmark::{extract_snippet, DEFAULT_SNIPPET_LENGTH, ELLIPSIS};

use crate::common::chars;

fn padded(word: &str) -> String {
    format!("{}{} {}", "word ".repeat(100), word, "word ".repeat(100))
}

#[test]
fn test_window_around_match_has_both_ellipses() {
    let snippet = extract_snippet(&padded("diabetes"), "diabetes", 40);
    assert!(snippet.starts_with(ELLIPSIS), "{snippet}");
    assert!(snippet.ends_with(ELLIPSIS), "{snippet}");
    assert!(snippet.contains("diabetes"));
    assert!(chars(&snippet) <= 42);
    assert!(chars(&snippet) >= 38);
}

#[test]
fn test_match_sits_after_the_lead_in() {
    let snippet = extract_snippet(&padded("diabetes"), "diabetes", 40);
    let core = snippet.trim_matches(ELLIPSIS);
    let at = core.find("diabetes").map(|byte| chars(&core[..byte]));
    assert_eq!(at, Some(15));
}

#[test]
fn test_no_match_returns_plain_prefix() {
    let text = "Revenue grew in the quarter and margins held steady.";
    assert_eq!(extract_snippet(text, "diabetes", 12), "Revenue grew");
    assert_eq!(extract_snippet(text, "", 7), "Revenue");
}

#[test]
fn test_match_at_start_has_no_leading_ellipsis() {
    let text = format!("diabetes {}", "word ".repeat(50));
    let snippet = extract_snippet(&text, "diabetes", 30);
    assert!(snippet.starts_with("diabetes"));
    assert!(snippet.ends_with(ELLIPSIS));
}

#[test]
fn test_match_near_end_shifts_window_left() {
    let text = format!("{}diabetes", "word ".repeat(20));
    let snippet = extract_snippet(&text, "diabetes", 40);
    assert!(snippet.starts_with(ELLIPSIS));
    assert!(snippet.ends_with("diabetes"));
    assert_eq!(chars(&snippet), 41);
}

#[test]
fn test_short_text_is_returned_whole() {
    assert_eq!(
        extract_snippet("Vaccine approved", "vaccine", DEFAULT_SNIPPET_LENGTH),
        "Vaccine approved"
    );
}

#[test]
fn test_earliest_position_wins_over_longest_term() {
    let text = format!("approval first. {}FDA approval later.", "filler ".repeat(40));
    let snippet = extract_snippet(&text, "FDA approval", 30);
    assert!(snippet.starts_with("approval first."), "{snippet}");
}

#[test]
fn test_newlines_and_tabs_become_spaces() {
    assert_eq!(
        extract_snippet("  Line one\nvaccine\tdata  ", "vaccine", 100),
        "Line one vaccine data"
    );
}

#[test]
fn test_empty_inputs() {
    assert_eq!(extract_snippet("", "vaccine", 40), "");
    assert_eq!(extract_snippet(" \n\t ", "vaccine", 40), "");
}

#[test]
fn test_zero_budget_is_empty() {
    assert_eq!(extract_snippet("Vaccine approved", "vaccine", 0), "");
}

#[test]
fn test_oversized_budget_is_the_whole_text() {
    let text = "lead text then needle here";
    assert_eq!(extract_snippet(text, "needle", usize::MAX), text);
}
