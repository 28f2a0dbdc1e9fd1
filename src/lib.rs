pub mod error;
pub mod grammar;
pub mod input;
pub mod lexicon;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::AnalysisError;
pub use grammar::cache::GrammarCheckerCache;
pub use grammar::language_tool::{LanguageToolChecker, LanguageToolConfig};
pub use grammar::{GrammarCheck, GrammarChecker, GrammarIssue, NoGrammarChecker};
pub use model::rubric::Rubric;
pub use model::scores::FinalAssessment;
pub use model::verdict::Verdict;
pub use pipeline::{Analyzer, analyze_transcript};
