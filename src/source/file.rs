// src/source/file.rs
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{ResultSource, SourcePage, SourceResponse};
use crate::error::SourceError;

/// Offline adapter over recorded responses: a JSON object mapping runner
/// name to an adapter answer.
///
/// ```json
/// { "Dana": {"headers": ["מקצה", "תוצאה"], "results": [{"מקצה": "10K", "תוצאה": "50:00"}]},
///   "Noa":  {"error": "No results found"} }
/// ```
#[derive(Clone, Debug, Default)]
pub struct FileSource {
    responses: HashMap<String, SourceResponse>,
}

impl FileSource {
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        let responses: HashMap<String, SourceResponse> = serde_json::from_str(text)?;
        Ok(Self { responses })
    }

    /// Runner names present in the document, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.responses.keys().cloned().collect();
        names.sort();
        names
    }
}

impl ResultSource for FileSource {
    fn fetch(&self, name: &str) -> Result<SourcePage, SourceError> {
        self.responses
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::UnknownRunner(name.to_string()))?
            .into_result()
    }
}
