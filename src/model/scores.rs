use serde::Serialize;

use crate::grammar::GrammarIssue;
use crate::model::bands::PaceBand;
use crate::model::verdict::Verdict;

pub const SALUTATION_COMPONENT: &str = "Salutation (5)";
pub const FLOW_COMPONENT: &str = "Flow (5)";
pub const KEYWORDS_COMPONENT: &str = "Keywords (30)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub name: &'static str,
    pub score: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentScore {
    pub total: f64,
    pub breakdown: Vec<ScoreComponent>,
    pub found_categories: Vec<String>,
    pub missing_categories: Vec<String>,
    pub is_flow_correct: bool,
}

impl ContentScore {
    pub fn component(&self, name: &str) -> Option<f64> {
        self.breakdown
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.score)
    }

    pub fn has_salutation(&self) -> bool {
        self.component(SALUTATION_COMPONENT)
            .is_some_and(|s| s > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRateScore {
    pub score: f64,
    /// Truncated toward zero.
    pub wpm: u32,
    pub band: PaceBand,
    pub feedback: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarScore {
    pub total: f64,
    pub grammar_score: f64,
    pub vocab_score: f64,
    pub ttr: f64,
    pub error_count: usize,
    pub issues: Vec<GrammarIssue>,
    pub checker_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClarityScore {
    pub score: f64,
    pub filler_rate: f64,
    pub filler_count: usize,
    pub fillers_found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalAssessment {
    pub content: ContentScore,
    pub grammar: GrammarScore,
    pub speech: SpeechRateScore,
    pub clarity: ClarityScore,
    pub final_score: f64,
    pub verdict: Verdict,
}

/// Half-to-even rounding at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
