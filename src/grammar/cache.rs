use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::grammar::language_tool::{LanguageToolChecker, LanguageToolConfig};
use crate::grammar::{GrammarChecker, NoGrammarChecker};

type CheckerFactory = Box<dyn Fn() -> Arc<dyn GrammarChecker> + Send + Sync>;

/// Builds the grammar checker on first use and hands out the same instance
/// afterwards. Owned by the caller; there is no process-global slot.
pub struct GrammarCheckerCache {
    slot: OnceLock<Arc<dyn GrammarChecker>>,
    factory: CheckerFactory,
}

impl GrammarCheckerCache {
    pub fn new(config: Option<LanguageToolConfig>) -> Self {
        Self::with_factory(move || match &config {
            Some(cfg) => {
                info!(url = %cfg.url, language = %cfg.language, "using languagetool grammar checker");
                Arc::new(LanguageToolChecker::new(cfg.clone())) as Arc<dyn GrammarChecker>
            }
            None => {
                info!("no grammar checker configured; grammar scored with full marks");
                Arc::new(NoGrammarChecker)
            }
        })
    }

    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn GrammarChecker> + Send + Sync + 'static,
    {
        Self {
            slot: OnceLock::new(),
            factory: Box::new(factory),
        }
    }

    pub fn get(&self) -> Arc<dyn GrammarChecker> {
        Arc::clone(self.slot.get_or_init(|| (self.factory)()))
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/grammar/cache.rs"]
mod tests;
