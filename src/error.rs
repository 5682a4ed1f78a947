use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read directory: {path}")]
    DirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to traverse {path}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclusion regex: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Some files are missing tests. ({count} testless)")]
    MissingTests { count: usize },
}

impl SpecGuardError {
    /// Short category name, used in log events and machine-readable output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::DirRead { .. } | Self::NotADirectory(_) | Self::Traversal { .. } | Self::Io(_) => {
                "IO"
            }
            Self::JsonSerialize(_) => "Serialize",
            Self::MissingTests { .. } => "MissingTests",
        }
    }

    /// Whether this error is the "tests missing" verdict rather than a
    /// configuration or I/O failure.
    #[must_use]
    pub const fn is_policy_failure(&self) -> bool {
        matches!(self, Self::MissingTests { .. })
    }
}

pub type Result<T> = std::result::Result<T, SpecGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
