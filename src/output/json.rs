use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classifier::Classifier;
use crate::error::Result;
use crate::verifier::{RunResult, Statistics};

use super::Severity;

/// Machine-readable summary of a verification run.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub root: PathBuf,
    pub passed: bool,
    pub missing: Vec<MissingTest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    pub messages: Vec<JsonMessage>,
}

#[derive(Debug, Serialize)]
pub struct MissingTest {
    pub source: PathBuf,
    pub expected: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct JsonMessage {
    pub severity: Severity,
    pub text: String,
}

impl JsonReport {
    /// Build a report; expected test paths are re-derived with `classifier`.
    #[must_use]
    pub fn new(
        root: &Path,
        result: &RunResult,
        classifier: &Classifier,
        messages: Vec<(Severity, String)>,
    ) -> Self {
        let missing = result
            .testless_files()
            .iter()
            .map(|source| MissingTest {
                source: source.clone(),
                expected: expected_for(classifier, source),
            })
            .collect();

        Self {
            root: root.to_path_buf(),
            passed: result.is_all_tested(),
            missing,
            statistics: result.statistics().copied(),
            messages: messages
                .into_iter()
                .map(|(severity, text)| JsonMessage { severity, text })
                .collect(),
        }
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn expected_for(classifier: &Classifier, source: &Path) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    classifier.expected_test_path(dir, &name)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
