use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::lexicon::defs::{CLOSING_PHRASES, NAME_PHRASES, SALUTATIONS};
use crate::lexicon::{CategoryKeywordSet, FillerLexicon};

pub const SALUTATION_MAX: f64 = 5.0;
pub const FLOW_MAX: f64 = 5.0;
pub const KEYWORDS_MAX: f64 = 30.0;

pub const CONTENT_MAX: f64 = SALUTATION_MAX + FLOW_MAX + KEYWORDS_MAX;
pub const GRAMMAR_MAX: f64 = 10.0;
pub const VOCABULARY_MAX: f64 = 10.0;
pub const GRAMMAR_VOCAB_MAX: f64 = GRAMMAR_MAX + VOCABULARY_MAX;
pub const SPEECH_RATE_MAX: f64 = 10.0;
pub const CLARITY_MAX: f64 = 30.0;

pub const RUBRIC_TOTAL: f64 = CONTENT_MAX + GRAMMAR_VOCAB_MAX + SPEECH_RATE_MAX + CLARITY_MAX;

/// Lookup tables consumed by the scorers. All entries are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    pub salutations: Vec<String>,
    pub name_phrases: Vec<String>,
    pub closing_phrases: Vec<String>,
    pub categories: CategoryKeywordSet,
    pub fillers: FillerLexicon,
}

impl Rubric {
    pub fn default_v1() -> Self {
        Self {
            salutations: to_owned(SALUTATIONS),
            name_phrases: to_owned(NAME_PHRASES),
            closing_phrases: to_owned(CLOSING_PHRASES),
            categories: CategoryKeywordSet::builtin(),
            fillers: FillerLexicon::builtin(),
        }
    }

    /// Lower-cases every entry so matching against case-folded text works.
    pub fn normalized(mut self) -> Self {
        lower_all(&mut self.salutations);
        lower_all(&mut self.name_phrases);
        lower_all(&mut self.closing_phrases);
        for category in &mut self.categories.categories {
            lower_all(&mut category.triggers);
        }
        lower_all(&mut self.fillers.entries);
        self
    }

    /// An empty trigger would match every transcript.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        check_entries("salutations", &self.salutations)?;
        check_entries("name_phrases", &self.name_phrases)?;
        check_entries("closing_phrases", &self.closing_phrases)?;
        check_entries("fillers", &self.fillers.entries)?;
        for category in &self.categories.categories {
            if category.name.trim().is_empty() {
                return Err(AnalysisError::validation("category with empty name"));
            }
            check_entries(&category.name, &category.triggers)?;
        }
        Ok(())
    }
}

impl Default for Rubric {
    fn default() -> Self {
        Self::default_v1()
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lower_all(items: &mut [String]) {
    for item in items.iter_mut() {
        *item = item.to_lowercase();
    }
}

fn check_entries(table: &str, entries: &[String]) -> Result<(), AnalysisError> {
    if entries.iter().any(|e| e.trim().is_empty()) {
        return Err(AnalysisError::validation(format!(
            "rubric table '{table}' contains an empty entry"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rubric.rs"]
mod tests;
