use serde::Serialize;

use crate::model::rubric::{
    CLARITY_MAX, CONTENT_MAX, GRAMMAR_VOCAB_MAX, RUBRIC_TOTAL, SPEECH_RATE_MAX,
};
use crate::model::scores::{
    ClarityScore, ContentScore, FinalAssessment, GrammarScore, SpeechRateScore,
};
use crate::report::ReportMeta;

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
    grammar_checker: &'a str,
}

#[derive(Debug, Serialize)]
struct Section<'a, T> {
    max: f64,
    #[serde(flatten)]
    result: &'a T,
}

#[derive(Debug, Serialize)]
struct SummaryData<'a> {
    tool: ToolMeta<'a>,
    duration_seconds: f64,
    final_score: f64,
    max_score: f64,
    verdict: &'static str,
    content: Section<'a, ContentScore>,
    grammar: Section<'a, GrammarScore>,
    speech_rate: Section<'a, SpeechRateScore>,
    clarity: Section<'a, ClarityScore>,
}

pub fn render_summary_json(
    a: &FinalAssessment,
    meta: &ReportMeta,
) -> Result<String, serde_json::Error> {
    let data = SummaryData {
        tool: ToolMeta {
            name: &meta.tool_name,
            version: &meta.tool_version,
            grammar_checker: &meta.grammar_checker,
        },
        duration_seconds: meta.duration_seconds,
        final_score: a.final_score,
        max_score: RUBRIC_TOTAL,
        verdict: a.verdict.label(),
        content: Section {
            max: CONTENT_MAX,
            result: &a.content,
        },
        grammar: Section {
            max: GRAMMAR_VOCAB_MAX,
            result: &a.grammar,
        },
        speech_rate: Section {
            max: SPEECH_RATE_MAX,
            result: &a.speech,
        },
        clarity: Section {
            max: CLARITY_MAX,
            result: &a.clarity,
        },
    };
    serde_json::to_string_pretty(&data)
}
