use crate::lexicon::FillerLexicon;
use crate::model::bands::filler_band;
use crate::model::rubric::CLARITY_MAX;
use crate::model::scores::{ClarityScore, round_to};
use crate::pipeline::stage1_tokenize::{TokenizedText, strip_punctuation};

/// Raw filler bands are on a 10-point scale.
const CLARITY_SCALE: f64 = CLARITY_MAX / 10.0;

pub fn score_clarity(text: &TokenizedText, fillers: &FillerLexicon) -> ClarityScore {
    if text.is_empty() {
        return ClarityScore {
            score: CLARITY_MAX,
            filler_rate: 0.0,
            filler_count: 0,
            fillers_found: Vec::new(),
        };
    }

    // Token-by-token: multi-word lexicon entries never match here.
    let fillers_found: Vec<String> = text
        .tokens
        .iter()
        .map(|t| strip_punctuation(t))
        .filter(|t| fillers.contains(t))
        .collect();

    let filler_count = fillers_found.len();
    let filler_rate = filler_count as f64 / text.word_count() as f64 * 100.0;

    ClarityScore {
        score: f64::from(filler_band(filler_rate)) * CLARITY_SCALE,
        filler_rate: round_to(filler_rate, 2),
        filler_count,
        fillers_found,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_clarity.rs"]
mod tests;
