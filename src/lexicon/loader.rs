use std::path::Path;

use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::model::rubric::Rubric;

pub fn load_rubric(path: Option<&Path>) -> Result<Rubric, AnalysisError> {
    let Some(path) = path else {
        return Ok(Rubric::default_v1());
    };
    let data =
        std::fs::read_to_string(path).map_err(|e| AnalysisError::io("read rubric file", e))?;
    let rubric = parse_rubric(&data)?;
    for entry in rubric.fillers.multi_word_entries() {
        warn!(entry, "multi-word filler can never match a single token");
    }
    debug!(
        path = %path.display(),
        categories = rubric.categories.len(),
        fillers = rubric.fillers.entries.len(),
        "loaded rubric"
    );
    Ok(rubric)
}

pub fn parse_rubric(json: &str) -> Result<Rubric, AnalysisError> {
    let rubric: Rubric =
        serde_json::from_str(json).map_err(|e| AnalysisError::json("parse rubric file", e))?;
    let rubric = rubric.normalized();
    rubric.validate()?;
    Ok(rubric)
}
