use crate::model::rubric::{
    CLARITY_MAX, CONTENT_MAX, GRAMMAR_MAX, GRAMMAR_VOCAB_MAX, SPEECH_RATE_MAX, VOCABULARY_MAX,
};
use crate::model::scores::FinalAssessment;
use crate::pipeline::stage2_content::flow_message;
use crate::report::{ReportMeta, format_f64_2, format_score};

const RULE: &str = "--------------------------------------------------";

pub fn render_report_text(a: &FinalAssessment, meta: &ReportMeta) -> String {
    let mut out = String::new();

    out.push_str("SPEECH RUBRIC ASSESSMENT REPORT\n");
    out.push_str(&format!("{} {}\n", meta.tool_name, meta.tool_version));
    out.push_str(RULE);
    out.push_str("\n\n");

    out.push_str(&format!(
        "OVERALL SCORE: {} / 100 ({})\n\n",
        a.final_score as i64,
        a.verdict.label()
    ));

    let content = &a.content;
    out.push_str(&format!(
        "1. CONTENT & STRUCTURE (Score: {}/{})\n",
        format_score(content.total),
        format_score(CONTENT_MAX)
    ));
    for c in &content.breakdown {
        out.push_str(&format!(
            "   - {}: {} / {}\n",
            c.name,
            format_score(c.score),
            format_score(c.max)
        ));
    }
    out.push_str(&format!(
        "   - Salutation: {}\n",
        if content.has_salutation() {
            "Present"
        } else {
            "Missing"
        }
    ));
    out.push_str(&format!(
        "   - Flow: {}\n",
        if content.is_flow_correct {
            "Correct"
        } else {
            "Needs Improvement"
        }
    ));
    out.push_str(&format!("     {}\n", flow_message(content.is_flow_correct)));
    out.push_str(&format!(
        "   - Keywords Found: {}\n",
        content.found_categories.join(", ")
    ));
    out.push_str(&format!(
        "   - Keywords Missing: {}\n\n",
        content.missing_categories.join(", ")
    ));

    let grammar = &a.grammar;
    out.push_str(&format!(
        "2. LANGUAGE & GRAMMAR (Score: {}/{})\n",
        format_score(grammar.total),
        format_score(GRAMMAR_VOCAB_MAX)
    ));
    out.push_str(&format!(
        "   - Grammar: {} / {}\n",
        format_score(grammar.grammar_score),
        format_score(GRAMMAR_MAX)
    ));
    if grammar.checker_available {
        out.push_str(&format!("   - Grammar Errors: {}\n", grammar.error_count));
        for issue in &grammar.issues {
            out.push_str(&format!("     Issue: {}\n", issue.message));
            out.push_str(&format!("     Context: {}\n", issue.context));
        }
    } else {
        out.push_str(&format!(
            "   - Grammar Errors: not checked (checker: {})\n",
            meta.grammar_checker
        ));
    }
    out.push_str(&format!(
        "   - Vocabulary: {} / {}\n",
        format_score(grammar.vocab_score),
        format_score(VOCABULARY_MAX)
    ));
    out.push_str(&format!(
        "   - Vocabulary Diversity (TTR): {}\n\n",
        format_f64_2(grammar.ttr)
    ));

    let speech = &a.speech;
    out.push_str(&format!(
        "3. SPEECH RATE (Score: {}/{})\n",
        format_score(speech.score),
        format_score(SPEECH_RATE_MAX)
    ));
    out.push_str(&format!(
        "   - Duration: {} s\n",
        format_score(meta.duration_seconds)
    ));
    out.push_str(&format!("   - Speed: {} WPM\n", speech.wpm));
    out.push_str(&format!("   - Verdict: {}\n\n", speech.band.description()));

    let clarity = &a.clarity;
    out.push_str(&format!(
        "4. CLARITY & FLOW (Score: {}/{})\n",
        format_score(clarity.score),
        format_score(CLARITY_MAX)
    ));
    out.push_str(&format!(
        "   - Filler Word Rate: {}%\n",
        format_f64_2(clarity.filler_rate)
    ));
    out.push_str(&format!(
        "   - Filler Words Found: {}\n",
        clarity.filler_count
    ));
    if !clarity.fillers_found.is_empty() {
        out.push_str(&format!(
            "   - Fillers: {}\n",
            clarity.fillers_found.join(", ")
        ));
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out
}
