use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::config::{ExcludeConfig, ExclusionRuleConfig};
use crate::error::{Result, SpecGuardError};

/// Decides whether a path is skipped by the traversal.
pub trait FileFilter {
    /// `is_file` is true only for regular files; directories, FIFOs, sockets
    /// and unresolved symlinks must never be opened for reading.
    fn is_excluded(&self, path: &Path, is_file: bool) -> bool;
}

/// A compiled content exclusion rule.
#[derive(Debug, Clone)]
pub enum ContentRule {
    Contains(String),
    Regex(Regex),
}

impl ContentRule {
    /// Compile a rule from its config form.
    ///
    /// # Errors
    /// Returns an error if a regex rule does not compile.
    pub fn compile(rule: &ExclusionRuleConfig) -> Result<Self> {
        match rule {
            ExclusionRuleConfig::Contains(text) => Ok(Self::Contains(text.clone())),
            ExclusionRuleConfig::Regex(pattern) => Regex::new(pattern)
                .map(Self::Regex)
                .map_err(|source| SpecGuardError::InvalidRegex {
                    pattern: pattern.clone(),
                    source,
                }),
        }
    }

    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        match self {
            Self::Contains(text) => content.contains(text.as_str()),
            Self::Regex(regex) => regex.is_match(content),
        }
    }
}

/// Exclusion filter built from glob patterns and content rules.
///
/// Globs are checked first and match either the full path or the path
/// relative to the scan root. Content rules only apply to regular files; a
/// file whose content cannot be read as text is not excluded by them.
pub struct ExclusionFilter {
    root: PathBuf,
    globs: GlobSet,
    rules: Vec<ContentRule>,
}

impl ExclusionFilter {
    /// Compile the filter for a scan rooted at `root`.
    ///
    /// # Errors
    /// Returns an error if any glob pattern or regex rule is invalid.
    pub fn new(root: impl Into<PathBuf>, config: &ExcludeConfig) -> Result<Self> {
        let globs = build_glob_set(&config.patterns)?;
        let rules = config
            .rules
            .iter()
            .map(ContentRule::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.into(),
            globs,
            rules,
        })
    }

    fn matches_glob(&self, path: &Path) -> bool {
        if self.globs.is_match(path) {
            return true;
        }
        path.strip_prefix(&self.root)
            .is_ok_and(|relative| !relative.as_os_str().is_empty() && self.globs.is_match(relative))
    }

    fn matches_content_rule(&self, path: &Path) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "cannot read file for content rules, treating as not excluded"
                );
                return false;
            }
        };

        self.rules.iter().any(|rule| rule.matches(&content))
    }
}

impl FileFilter for ExclusionFilter {
    fn is_excluded(&self, path: &Path, is_file: bool) -> bool {
        if self.matches_glob(path) {
            tracing::debug!(path = %path.display(), "excluded by glob");
            return true;
        }

        if is_file && self.matches_content_rule(path) {
            tracing::debug!(path = %path.display(), "excluded by content rule");
            return true;
        }

        false
    }
}

/// `*` stays within one path segment; `**` crosses segments.
fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| SpecGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| SpecGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
