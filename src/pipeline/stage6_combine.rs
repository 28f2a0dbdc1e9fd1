use tracing::info;

use crate::model::scores::{
    ClarityScore, ContentScore, FinalAssessment, GrammarScore, SpeechRateScore,
};
use crate::model::verdict::Verdict;

pub fn combine(
    content: ContentScore,
    grammar: GrammarScore,
    speech: SpeechRateScore,
    clarity: ClarityScore,
) -> FinalAssessment {
    let final_score = content.total + grammar.total + speech.score + clarity.score;
    let verdict = Verdict::from_score(final_score);
    info!(
        final_score,
        verdict = verdict.label(),
        "assessment complete"
    );

    FinalAssessment {
        content,
        grammar,
        speech,
        clarity,
        final_score,
        verdict,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_combine.rs"]
mod tests;
