//! Match classification: is a file significant, and does its test exist?

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::config::Config;

/// Outcome of classifying a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Significant file whose sibling test file exists.
    Tested { source: PathBuf, test: PathBuf },
    /// Significant file whose sibling test file is missing.
    Testless { source: PathBuf, expected: PathBuf },
    /// Not a tracked suffix, or a mock.
    NotApplicable,
}

impl Classification {
    #[must_use]
    pub const fn is_significant(&self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

/// Decides significance and test presence for file names.
#[derive(Debug, Clone)]
pub struct Classifier {
    suffixes: IndexSet<String>,
    mock_identifier: String,
    source_marker: String,
    test_marker: String,
}

impl Classifier {
    #[must_use]
    pub fn new(
        suffixes: IndexSet<String>,
        mock_identifier: impl Into<String>,
        source_marker: impl Into<String>,
        test_marker: impl Into<String>,
    ) -> Self {
        Self {
            suffixes,
            mock_identifier: mock_identifier.into(),
            source_marker: source_marker.into(),
            test_marker: test_marker.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.suffixes.clone(),
            config.mock_identifier.clone(),
            config.source_marker.clone(),
            config.test_marker.clone(),
        )
    }

    /// The tracked suffix `file_name` ends with, if any.
    #[must_use]
    pub fn matching_suffix(&self, file_name: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|suffix| file_name.ends_with(suffix.as_str()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_significant(&self, file_name: &str) -> bool {
        self.matching_suffix(file_name).is_some()
            && (self.mock_identifier.is_empty() || !file_name.contains(&self.mock_identifier))
    }

    /// Replaces the first occurrence of the source marker.
    /// A name without the marker is returned unchanged.
    #[must_use]
    pub fn expected_test_name(&self, file_name: &str) -> String {
        file_name.replacen(&self.source_marker, &self.test_marker, 1)
    }

    #[must_use]
    pub fn expected_test_path(&self, dir: &Path, file_name: &str) -> PathBuf {
        dir.join(self.expected_test_name(file_name))
    }

    /// Classify `file_name` inside `dir`. The file is assumed to already have
    /// passed exclusion.
    #[must_use]
    pub fn classify(&self, dir: &Path, file_name: &str) -> Classification {
        if !self.is_significant(file_name) {
            return Classification::NotApplicable;
        }

        let source = dir.join(file_name);
        let expected = self.expected_test_path(dir, file_name);

        // Permission errors on the probe count as "missing".
        if matches!(expected.try_exists(), Ok(true)) {
            Classification::Tested {
                source,
                test: expected,
            }
        } else {
            Classification::Testless { source, expected }
        }
    }

    /// Classify a full path by splitting it into directory and file name.
    #[must_use]
    pub fn classify_path(&self, path: &Path) -> Classification {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            return Classification::NotApplicable;
        };
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        self.classify(dir, file_name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
