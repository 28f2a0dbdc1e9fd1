use super::*;
use crate::grammar::{GrammarCheck, GrammarChecker, GrammarIssue};
use crate::model::rubric::Rubric;
use crate::pipeline::analyze_transcript;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_rubric_report_test_{}_{}", std::process::id(), id));
    dir
}

struct TwoIssues;

impl GrammarChecker for TwoIssues {
    fn check(&self, _text: &str) -> GrammarCheck {
        GrammarCheck::Issues(vec![
            GrammarIssue::new("Missing comma", "Hello my name"),
            GrammarIssue::new("Possible typo", "I am Sma"),
        ])
    }

    fn name(&self) -> &'static str {
        "two-issues"
    }
}

fn meta(checker: &str) -> ReportMeta {
    ReportMeta {
        tool_name: "kira-speechrubric".to_string(),
        tool_version: "0.0.0".to_string(),
        duration_seconds: 20.0,
        grammar_checker: checker.to_string(),
    }
}

fn assessment(checker: &dyn GrammarChecker) -> FinalAssessment {
    analyze_transcript(
        "Hello my name is Sam, um, I am 10 years old. Thank you.",
        20.0,
        &Rubric::default_v1(),
        checker,
    )
    .unwrap()
}

#[test]
fn test_text_report_sections() {
    let a = assessment(&crate::grammar::NoGrammarChecker);
    let text = render_report(&a, &meta("none"), ReportFormat::Text).unwrap();
    assert!(text.contains("OVERALL SCORE:"));
    assert!(text.contains("1. CONTENT & STRUCTURE"));
    assert!(text.contains("   - Salutation: Present"));
    assert!(text.contains("   - Flow: Correct"));
    assert!(text.contains("Keywords Found: Name, Age"));
    assert!(text.contains("Keywords Missing: Class/School, Family"));
    assert!(text.contains("not checked (checker: none)"));
    assert!(text.contains("3. SPEECH RATE (Score: 2/10)"));
    assert!(text.contains("Filler Words Found: 1"));
    assert!(text.contains("   - Fillers: um"));
}

#[test]
fn test_text_report_lists_issues() {
    let a = assessment(&TwoIssues);
    let text = render_report(&a, &meta("two-issues"), ReportFormat::Text).unwrap();
    assert!(text.contains("Grammar Errors: 2"));
    assert!(text.contains("Issue: Missing comma"));
    assert!(text.contains("Context: I am Sma"));
}

#[test]
fn test_json_summary_fields() {
    let a = assessment(&TwoIssues);
    let json = render_report(&a, &meta("two-issues"), ReportFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["max_score"], 100.0);
    assert_eq!(v["tool"]["grammar_checker"], "two-issues");
    assert_eq!(v["content"]["max"], 40.0);
    assert_eq!(v["content"]["is_flow_correct"], true);
    assert_eq!(v["grammar"]["error_count"], 2);
    assert_eq!(v["speech_rate"]["feedback"], "Too Slow");
    assert_eq!(v["clarity"]["filler_count"], 1);
    assert_eq!(v["verdict"], a.verdict.label());
}

#[test]
fn test_write_reports_creates_files() {
    let dir = make_temp_dir();
    let a = assessment(&crate::grammar::NoGrammarChecker);
    write_reports(&a, &meta("none"), &dir).unwrap();

    let report = std::fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(report.starts_with("SPEECH RUBRIC ASSESSMENT REPORT"));
    let summary = std::fs::read_to_string(dir.join("summary.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert!(v["final_score"].is_number());

    std::fs::remove_dir_all(&dir).unwrap();
}
