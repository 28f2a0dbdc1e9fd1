use super::*;
use crate::grammar::NoGrammarChecker;
use std::sync::atomic::{AtomicUsize, Ordering};

struct FixedChecker {
    issues: usize,
    calls: AtomicUsize,
}

impl FixedChecker {
    fn new(issues: usize) -> Self {
        Self {
            issues,
            calls: AtomicUsize::new(0),
        }
    }
}

impl GrammarChecker for FixedChecker {
    fn check(&self, _text: &str) -> GrammarCheck {
        self.calls.fetch_add(1, Ordering::SeqCst);
        GrammarCheck::Issues(
            (0..self.issues)
                .map(|i| GrammarIssue::new(format!("issue {i}"), "ctx"))
                .collect(),
        )
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn score_with(text: &str, checker: &dyn GrammarChecker) -> GrammarScore {
    score_grammar(text, &TokenizedText::new(text), checker)
}

#[test]
fn test_unavailable_checker_full_marks() {
    let out = score_with("one two three four", &NoGrammarChecker);
    assert_eq!(out.grammar_score, 10.0);
    assert_eq!(out.error_count, 0);
    assert!(out.issues.is_empty());
    assert!(!out.checker_available);
}

#[test]
fn test_empty_text_skips_checker() {
    let checker = FixedChecker::new(3);
    let out = score_with("   ", &checker);
    assert_eq!(checker.calls.load(Ordering::SeqCst), 0);
    assert_eq!(out.grammar_score, 10.0);
    assert_eq!(out.ttr, 0.0);
    assert_eq!(out.vocab_score, 2.0);
    assert_eq!(out.total, 12.0);
}

#[test]
fn test_grammar_points_linear_then_saturated() {
    assert_eq!(grammar_points(0, 100), 10.0);
    assert_eq!(grammar_points(1, 100), 9.0);
    assert_eq!(grammar_points(5, 100), 5.0);
    assert_eq!(grammar_points(10, 100), 0.0);
    assert_eq!(grammar_points(25, 100), 0.0);
    // 1 error in 30 words = 3.33 per 100 -> 6.67 -> 6.7
    assert_eq!(grammar_points(1, 30), 6.7);
}

#[test]
fn test_grammar_points_non_increasing() {
    let words = 57;
    let mut previous = f64::INFINITY;
    for issues in 0..20 {
        let points = grammar_points(issues, words);
        assert!(points <= previous);
        assert!((0.0..=10.0).contains(&points));
        previous = points;
    }
    assert_eq!(grammar_points(6, words), 0.0);
}

#[test]
fn test_issues_are_surfaced() {
    let checker = FixedChecker::new(2);
    let text = "a b c d e f g h i j k l m n o p q r s t";
    let out = score_with(text, &checker);
    assert!(out.checker_available);
    assert_eq!(out.error_count, 2);
    assert_eq!(out.issues[1].message, "issue 1");
    assert_eq!(out.grammar_score, 0.0);
    assert_eq!(out.vocab_score, 10.0);
    assert_eq!(out.total, 10.0);
}

#[test]
fn test_ttr_is_case_folded() {
    let out = score_with("The the THE cat", &NoGrammarChecker);
    assert_eq!(out.ttr, 0.5);
    assert_eq!(out.vocab_score, 6.0);
}

#[test]
fn test_ttr_counts_punctuated_tokens_separately() {
    let tokens: Vec<String> = ["dog", "dog.", "dog"].iter().map(|s| s.to_string()).collect();
    assert!((type_token_ratio(&tokens) - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_ttr_rounded_two_decimals() {
    let out = score_with("a b c a b c d", &NoGrammarChecker);
    assert_eq!(out.ttr, 0.57);
    assert_eq!(out.vocab_score, 6.0);
}
