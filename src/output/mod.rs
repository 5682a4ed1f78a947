mod json;
mod text;

pub use json::{JsonMessage, JsonReport, MissingTest};
pub use text::{ColorMode, ConsoleReporter, SEPARATOR, frame};

use serde::Serialize;

/// Severity of a report message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// Line-oriented output channel for verification messages.
pub trait Reporter {
    fn emit(&mut self, severity: Severity, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn emit(&mut self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

/// Reporter that keeps every message in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryReporter {
    messages: Vec<(Severity, String)>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[(Severity, String)] {
        &self.messages
    }

    /// Messages of the given severity, in emission order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<(Severity, String)> {
        self.messages
    }
}

impl Reporter for MemoryReporter {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_string()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
