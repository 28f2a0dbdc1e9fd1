pub mod defs;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::lexicon::defs::{builtin_categories, builtin_fillers};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub triggers: Vec<String>,
}

impl KeywordCategory {
    /// True when any trigger occurs in `text_lower` as a substring.
    pub fn matches(&self, text_lower: &str) -> bool {
        self.triggers.iter().any(|t| text_lower.contains(t.as_str()))
    }
}

/// Ordered category table. Order is the reporting order for found/missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKeywordSet {
    pub categories: Vec<KeywordCategory>,
}

impl CategoryKeywordSet {
    pub fn builtin() -> Self {
        let categories = builtin_categories()
            .iter()
            .map(|def| KeywordCategory {
                name: def.name.to_string(),
                triggers: def.triggers.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillerLexicon {
    pub entries: Vec<String>,
}

impl FillerLexicon {
    pub fn builtin() -> Self {
        Self {
            entries: builtin_fillers().iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Exact comparison against a lower-cased, punctuation-stripped token.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.iter().any(|e| e == token)
    }

    /// Entries that contain whitespace and therefore never equal a single token.
    pub fn multi_word_entries(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|e| e.split_whitespace().nth(1).is_some())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/lexicon/tests.rs"]
mod tests;
