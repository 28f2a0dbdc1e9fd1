use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::AnalysisError;

/// Reads a UTF-8 transcript from a file, or from stdin when `path` is `-`.
pub fn read_transcript(path: &Path) -> Result<String, AnalysisError> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AnalysisError::io("read transcript from stdin", e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| AnalysisError::io("read transcript file", e))?
    };

    if text.trim().is_empty() {
        warn!("transcript is empty; scorers fall back to their empty-input defaults");
    }
    debug!(bytes = text.len(), "transcript loaded");
    Ok(text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
