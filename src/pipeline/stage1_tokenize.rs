use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("invalid punctuation pattern"));

/// Case-folded view of a transcript shared by all scorers.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    pub lower: String,
    /// Whitespace tokens of `lower`, punctuation untouched.
    pub tokens: Vec<String>,
}

impl TokenizedText {
    pub fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens = lower.split_whitespace().map(str::to_string).collect();
        Self { lower, tokens }
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn strip_punctuation(token: &str) -> String {
    NON_WORD.replace_all(token, "").into_owned()
}
