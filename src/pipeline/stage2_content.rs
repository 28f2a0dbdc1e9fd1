use crate::model::rubric::{FLOW_MAX, KEYWORDS_MAX, Rubric, SALUTATION_MAX};
use crate::model::scores::{
    ContentScore, FLOW_COMPONENT, KEYWORDS_COMPONENT, SALUTATION_COMPONENT, ScoreComponent,
    round_to,
};
use crate::pipeline::stage1_tokenize::TokenizedText;

pub const FLOW_OK_MESSAGE: &str = "Flow detected: Salutation -> Name -> Closing";
pub const FLOW_ISSUE_MESSAGE: &str =
    "Flow issue: Ensure you start with a greeting, say your name, and end with a thank you.";

/// Byte offsets into the lower-cased transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowMarkers {
    pub salutation: Option<usize>,
    pub name: Option<usize>,
    pub closing: Option<usize>,
}

pub fn score_content(text: &TokenizedText, rubric: &Rubric) -> ContentScore {
    let lower = text.lower.as_str();

    let has_salutation = rubric.salutations.iter().any(|s| lower.contains(s.as_str()));
    let salutation_score = if has_salutation { SALUTATION_MAX } else { 0.0 };

    let markers = locate_flow(lower, rubric);
    let is_flow_correct = is_flow_correct(&markers);
    let flow_score = if is_flow_correct { FLOW_MAX } else { 0.0 };

    let mut found_categories = Vec::new();
    let mut missing_categories = Vec::new();
    for category in &rubric.categories.categories {
        if category.matches(lower) {
            found_categories.push(category.name.clone());
        } else {
            missing_categories.push(category.name.clone());
        }
    }
    let keyword_score = keyword_coverage_score(found_categories.len(), rubric.categories.len());

    ContentScore {
        total: salutation_score + flow_score + keyword_score,
        breakdown: vec![
            ScoreComponent {
                name: SALUTATION_COMPONENT,
                score: salutation_score,
                max: SALUTATION_MAX,
            },
            ScoreComponent {
                name: FLOW_COMPONENT,
                score: flow_score,
                max: FLOW_MAX,
            },
            ScoreComponent {
                name: KEYWORDS_COMPONENT,
                score: keyword_score,
                max: KEYWORDS_MAX,
            },
        ],
        found_categories,
        missing_categories,
        is_flow_correct,
    }
}

pub fn locate_flow(lower: &str, rubric: &Rubric) -> FlowMarkers {
    // Earliest salutation of any kind.
    let salutation = rubric
        .salutations
        .iter()
        .filter_map(|s| lower.find(s.as_str()))
        .min();
    FlowMarkers {
        salutation,
        name: first_present(lower, &rubric.name_phrases),
        closing: first_present(lower, &rubric.closing_phrases),
    }
}

/// Position of the first phrase, in table order, that occurs at all.
fn first_present(lower: &str, phrases: &[String]) -> Option<usize> {
    phrases.iter().find_map(|p| lower.find(p.as_str()))
}

pub fn is_flow_correct(markers: &FlowMarkers) -> bool {
    match (markers.salutation, markers.name, markers.closing) {
        (Some(s), Some(n), Some(c)) => s < n && n < c,
        (None, Some(n), Some(c)) => n < c,
        _ => false,
    }
}

pub fn keyword_coverage_score(found: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(found as f64 / total as f64 * KEYWORDS_MAX, 1)
}

pub fn flow_message(is_flow_correct: bool) -> &'static str {
    if is_flow_correct {
        FLOW_OK_MESSAGE
    } else {
        FLOW_ISSUE_MESSAGE
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_content.rs"]
mod tests;
