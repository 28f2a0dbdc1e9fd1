pub mod stage1_tokenize;
pub mod stage2_content;
pub mod stage3_speech_rate;
pub mod stage4_grammar;
pub mod stage5_clarity;
pub mod stage6_combine;
pub mod stage7_report;

use std::sync::Arc;

use tracing::debug;

use crate::error::AnalysisError;
use crate::grammar::{GrammarChecker, NoGrammarChecker};
use crate::model::rubric::Rubric;
use crate::model::scores::FinalAssessment;
use crate::pipeline::stage1_tokenize::TokenizedText;
use crate::pipeline::stage2_content::score_content;
use crate::pipeline::stage3_speech_rate::score_speech_rate;
use crate::pipeline::stage4_grammar::score_grammar;
use crate::pipeline::stage5_clarity::score_clarity;
use crate::pipeline::stage6_combine::combine;

/// Scores one transcript. The four scorers are independent; only the
/// combiner sees all of their results.
pub fn analyze_transcript(
    transcript: &str,
    duration_seconds: f64,
    rubric: &Rubric,
    checker: &dyn GrammarChecker,
) -> Result<FinalAssessment, AnalysisError> {
    if !duration_seconds.is_finite() {
        return Err(AnalysisError::validation(format!(
            "duration must be a finite number of seconds, got {duration_seconds}"
        )));
    }

    let text = TokenizedText::new(transcript);

    let content = score_content(&text, rubric);
    debug!(
        total = content.total,
        found = content.found_categories.len(),
        flow = content.is_flow_correct,
        "content scored"
    );

    let grammar = score_grammar(transcript, &text, checker);
    debug!(
        total = grammar.total,
        errors = grammar.error_count,
        ttr = grammar.ttr,
        checker = checker.name(),
        "grammar scored"
    );

    let speech = score_speech_rate(text.word_count(), duration_seconds);
    debug!(
        score = speech.score,
        wpm = speech.wpm,
        feedback = speech.feedback,
        "speech rate scored"
    );

    let clarity = score_clarity(&text, &rubric.fillers);
    debug!(
        score = clarity.score,
        filler_rate = clarity.filler_rate,
        "clarity scored"
    );

    Ok(combine(content, grammar, speech, clarity))
}

/// Holds the rubric and a shared checker so repeated calls reuse both.
#[derive(Clone)]
pub struct Analyzer {
    rubric: Rubric,
    checker: Arc<dyn GrammarChecker>,
}

impl Analyzer {
    pub fn new(rubric: Rubric, checker: Arc<dyn GrammarChecker>) -> Self {
        Self { rubric, checker }
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn analyze(
        &self,
        transcript: &str,
        duration_seconds: f64,
    ) -> Result<FinalAssessment, AnalysisError> {
        analyze_transcript(
            transcript,
            duration_seconds,
            &self.rubric,
            self.checker.as_ref(),
        )
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Rubric::default_v1(), Arc::new(NoGrammarChecker))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/analyze.rs"]
mod tests;
