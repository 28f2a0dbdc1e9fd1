use std::collections::HashSet;

use crate::grammar::{GrammarCheck, GrammarChecker, GrammarIssue};
use crate::model::bands::vocabulary_band;
use crate::model::rubric::GRAMMAR_MAX;
use crate::model::scores::{GrammarScore, round_to};
use crate::pipeline::stage1_tokenize::TokenizedText;

/// Errors per 100 words at which the grammar penalty saturates.
pub const ERROR_RATE_CEILING: f64 = 10.0;

pub fn score_grammar(
    transcript: &str,
    text: &TokenizedText,
    checker: &dyn GrammarChecker,
) -> GrammarScore {
    let word_count = text.word_count();

    // Skip the checker entirely for empty transcripts.
    let check = if word_count == 0 {
        GrammarCheck::Unavailable
    } else {
        checker.check(transcript)
    };

    let (grammar_score, issues, checker_available) = match check {
        GrammarCheck::Issues(issues) => {
            let score = grammar_points(issues.len(), word_count);
            (score, issues, true)
        }
        GrammarCheck::Unavailable => (GRAMMAR_MAX, Vec::<GrammarIssue>::new(), false),
    };

    let ttr = type_token_ratio(&text.tokens);
    let vocab_score = f64::from(vocabulary_band(ttr));

    GrammarScore {
        total: grammar_score + vocab_score,
        grammar_score,
        vocab_score,
        ttr: round_to(ttr, 2),
        error_count: issues.len(),
        issues,
        checker_available,
    }
}

/// `(1 - min(errors_per_100 / 10, 1)) * 10`, rounded to one decimal.
pub fn grammar_points(issue_count: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return GRAMMAR_MAX;
    }
    let errors_per_100 = issue_count as f64 / word_count as f64 * 100.0;
    let penalty = (errors_per_100 / ERROR_RATE_CEILING).min(1.0);
    round_to((1.0 - penalty) * GRAMMAR_MAX, 1)
}

pub fn type_token_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() as f64 / tokens.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_grammar.rs"]
mod tests;
