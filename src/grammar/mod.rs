pub mod cache;
pub mod language_tool;

use serde::{Deserialize, Serialize};

/// One finding reported by a grammar checker. Only counted and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl GrammarIssue {
    pub fn new(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: context.into(),
            rule_id: None,
            offset: None,
            length: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarCheck {
    Issues(Vec<GrammarIssue>),
    /// No checker is configured or the checker could not be reached.
    Unavailable,
}

pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> GrammarCheck;

    fn name(&self) -> &'static str;
}

/// Null checker: every call reports `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGrammarChecker;

impl GrammarChecker for NoGrammarChecker {
    fn check(&self, _text: &str) -> GrammarCheck {
        GrammarCheck::Unavailable
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/grammar/tests.rs"]
mod tests;
