use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Default directory scanned when neither the config nor the CLI names one.
pub const DEFAULT_ROOT: &str = "src/app";

/// Default substring marking a file as a mock (never needs a test).
pub const DEFAULT_MOCK_IDENTIFIER: &str = "mock";

/// Marker replaced in a source file name to derive its test file name.
pub const DEFAULT_SOURCE_MARKER: &str = ".ts";

/// Replacement for [`DEFAULT_SOURCE_MARKER`] in the expected test file name.
pub const DEFAULT_TEST_MARKER: &str = ".spec.ts";

/// Top-level configuration.
///
/// Every field is optional in the TOML file. Once loaded (and after CLI
/// overrides are applied) the value is treated as immutable for the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory to scan, relative to the working directory unless absolute.
    #[serde(default = "default_root")]
    pub root: String,

    /// File-name endings that mark a file as needing a test.
    /// An empty list falls back to the defaults.
    #[serde(default = "default_suffixes")]
    pub suffixes: IndexSet<String>,

    /// Files whose name contains this substring are mocks and never tracked.
    #[serde(default = "default_mock_identifier")]
    pub mock_identifier: String,

    /// Maximum directory depth below the root (root is depth 0).
    /// `None` means unbounded.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Report files that do have a test.
    #[serde(default)]
    pub show_tested_files: bool,

    /// Fail the run when any test file is missing.
    #[serde(default = "default_true")]
    pub fail_on_missing: bool,

    /// Print total/tested/testless counts before the verdict.
    #[serde(default)]
    pub show_statistics: bool,

    /// Marker in a source file name that is replaced to find its test file.
    #[serde(default = "default_source_marker")]
    pub source_marker: String,

    /// Replacement for `source_marker`.
    #[serde(default = "default_test_marker")]
    pub test_marker: String,

    #[serde(default)]
    pub exclude: ExcludeConfig,

    /// Messages picked from when every significant file has a test.
    /// An empty list falls back to the defaults.
    #[serde(default = "default_congratulations")]
    pub congratulations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            suffixes: default_suffixes(),
            mock_identifier: default_mock_identifier(),
            max_depth: None,
            show_tested_files: false,
            fail_on_missing: true,
            show_statistics: false,
            source_marker: default_source_marker(),
            test_marker: default_test_marker(),
            exclude: ExcludeConfig::default(),
            congratulations: default_congratulations(),
        }
    }
}

impl Config {
    /// Replace empty lists with their defaults so downstream code can rely
    /// on non-empty suffixes and congratulations.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.suffixes.is_empty() {
            self.suffixes = default_suffixes();
        }
        if self.congratulations.is_empty() {
            self.congratulations = default_congratulations();
        }
        self
    }
}

/// Exclusion settings `[exclude]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExcludeConfig {
    /// Glob patterns; a matching file is skipped, a matching directory is
    /// pruned with its whole subtree.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Content rules, checked only for files that no glob excluded.
    #[serde(default)]
    pub rules: Vec<ExclusionRuleConfig>,
}

/// A content rule as written in the config file.
///
/// ```toml
/// rules = [{ contains = "DEPRECATED" }, { regex = "TO_BE_REMOVED\\b" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionRuleConfig {
    /// Plain substring containment.
    Contains(String),
    /// Regular expression searched anywhere in the file content.
    Regex(String),
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_suffixes() -> IndexSet<String> {
    [
        ".component.ts",
        ".service.ts",
        ".guard.ts",
        ".directive.ts",
        ".pipe.ts",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_mock_identifier() -> String {
    DEFAULT_MOCK_IDENTIFIER.to_string()
}

fn default_source_marker() -> String {
    DEFAULT_SOURCE_MARKER.to_string()
}

fn default_test_marker() -> String {
    DEFAULT_TEST_MARKER.to_string()
}

const fn default_true() -> bool {
    true
}

fn default_congratulations() -> Vec<String> {
    [
        "🎉 Great job! All necessary files have tests. 🎉",
        "👏 Well done! Every important file has been tested. 👏",
        "💪 Excellent! All your critical files have their own tests. 💪",
        "🥳 Fantastic! You have tests for all necessary files. 🥳",
        "👍 Superb! Every single file that needs to be tested, is. 👍",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
