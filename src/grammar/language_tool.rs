use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::grammar::{GrammarCheck, GrammarChecker, GrammarIssue};

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageToolConfig {
    /// Server base URL, e.g. `http://localhost:8081`.
    pub url: String,
    pub language: String,
    pub timeout_secs: u64,
}

impl LanguageToolConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn check_endpoint(&self) -> String {
        format!("{}/v2/check", self.url.trim_end_matches('/'))
    }
}

/// Client for a LanguageTool HTTP server. Any failure degrades to
/// `GrammarCheck::Unavailable`.
pub struct LanguageToolChecker {
    config: LanguageToolConfig,
    agent: ureq::Agent,
}

impl LanguageToolChecker {
    pub fn new(config: LanguageToolConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();
        Self { config, agent }
    }

    pub fn config(&self) -> &LanguageToolConfig {
        &self.config
    }

    fn request(&self, text: &str) -> Result<String, String> {
        let endpoint = self.config.check_endpoint();
        let mut response = self
            .agent
            .post(&endpoint)
            .send_form([("text", text), ("language", self.config.language.as_str())])
            .map_err(|e| format!("request to {endpoint} failed: {e}"))?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| format!("reading response from {endpoint} failed: {e}"))
    }
}

impl GrammarChecker for LanguageToolChecker {
    fn check(&self, text: &str) -> GrammarCheck {
        let body = match self.request(text) {
            Ok(body) => body,
            Err(message) => {
                warn!("{message}; grammar scoring falls back to full marks");
                return GrammarCheck::Unavailable;
            }
        };
        match parse_check_response(&body) {
            Ok(issues) => {
                debug!(issues = issues.len(), "languagetool check complete");
                GrammarCheck::Issues(issues)
            }
            Err(err) => {
                warn!("unparseable languagetool response: {err}");
                GrammarCheck::Unavailable
            }
        }
    }

    fn name(&self) -> &'static str {
        "languagetool"
    }
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    message: String,
    #[serde(default)]
    offset: Option<usize>,
    #[serde(default)]
    length: Option<usize>,
    #[serde(default)]
    context: Option<RawContext>,
    #[serde(default)]
    rule: Option<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawContext {
    text: String,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    id: String,
}

pub fn parse_check_response(body: &str) -> Result<Vec<GrammarIssue>, serde_json::Error> {
    let response: CheckResponse = serde_json::from_str(body)?;
    Ok(response
        .matches
        .into_iter()
        .map(|m| GrammarIssue {
            message: m.message,
            context: m.context.map(|c| c.text).unwrap_or_default(),
            rule_id: m.rule.map(|r| r.id),
            offset: m.offset,
            length: m.length,
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/grammar/language_tool.rs"]
mod tests;
