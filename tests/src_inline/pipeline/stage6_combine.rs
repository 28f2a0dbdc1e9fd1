use super::*;
use crate::model::bands::PaceBand;
use crate::model::rubric::{CLARITY_MAX, CONTENT_MAX, GRAMMAR_VOCAB_MAX, SPEECH_RATE_MAX};

fn parts(
    content_total: f64,
    grammar_total: f64,
    speech: f64,
    clarity: f64,
) -> (ContentScore, GrammarScore, SpeechRateScore, ClarityScore) {
    (
        ContentScore {
            total: content_total,
            breakdown: Vec::new(),
            found_categories: Vec::new(),
            missing_categories: Vec::new(),
            is_flow_correct: false,
        },
        GrammarScore {
            total: grammar_total,
            grammar_score: 10.0,
            vocab_score: grammar_total - 10.0,
            ttr: 0.0,
            error_count: 0,
            issues: Vec::new(),
            checker_available: false,
        },
        SpeechRateScore {
            score: speech,
            wpm: 0,
            band: PaceBand::Slow,
            feedback: "Slow",
        },
        ClarityScore {
            score: clarity,
            filler_rate: 0.0,
            filler_count: 0,
            fillers_found: Vec::new(),
        },
    )
}

#[test]
fn test_sum_of_parts() {
    let (c, g, s, k) = parts(35.7, 18.0, 2.0, 30.0);
    let out = combine(c, g, s, k);
    assert!((out.final_score - 85.7).abs() < 1e-9);
    assert_eq!(out.verdict, Verdict::Excellent);
}

#[test]
fn test_exactly_80_is_average() {
    let (c, g, s, k) = parts(30.0, 14.0, 6.0, 30.0);
    let out = combine(c, g, s, k);
    assert_eq!(out.final_score, 80.0);
    assert_eq!(out.verdict, Verdict::Average);
}

#[test]
fn test_exactly_50_is_poor() {
    let (c, g, s, k) = parts(10.0, 12.0, 10.0, 18.0);
    let out = combine(c, g, s, k);
    assert_eq!(out.final_score, 50.0);
    assert_eq!(out.verdict, Verdict::Poor);
}

#[test]
fn test_maximum_is_100() {
    let (c, g, s, k) = parts(CONTENT_MAX, GRAMMAR_VOCAB_MAX, SPEECH_RATE_MAX, CLARITY_MAX);
    let out = combine(c, g, s, k);
    assert_eq!(out.final_score, 100.0);
    assert_eq!(out.verdict, Verdict::Excellent);
}
