pub mod json;
pub mod text;

#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub tool_name: String,
    pub tool_version: String,
    pub duration_seconds: f64,
    pub grammar_checker: String,
}

/// Whole scores print without a fraction ("18"), others with one decimal.
pub fn format_score(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.1}", v)
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
