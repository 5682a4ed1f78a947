use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Aggregate counts over significant files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub tested: usize,
    pub testless: usize,
}

impl Statistics {
    pub const fn record_tested(&mut self) {
        self.total += 1;
        self.tested += 1;
    }

    pub const fn record_testless(&mut self) {
        self.total += 1;
        self.testless += 1;
    }

    /// Share of significant files that have a test, in percent.
    /// `None` when no significant file was seen.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage_percent(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.tested as f64 * 100.0 / self.total as f64)
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test file statistics:")?;
        writeln!(f, "  Total files:    {}", self.total)?;
        writeln!(f, "  Tested files:   {}", self.tested)?;
        writeln!(f, "  Testless files: {}", self.testless)?;
        match self.coverage_percent() {
            Some(pct) => write!(f, "  Coverage:       {pct:.1}%"),
            None => write!(f, "  Coverage:       n/a"),
        }
    }
}

/// Final verdict of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    AllTested {
        statistics: Option<Statistics>,
    },
    SomeTestless {
        files: Vec<PathBuf>,
        statistics: Option<Statistics>,
    },
}

impl RunResult {
    #[must_use]
    pub const fn is_all_tested(&self) -> bool {
        matches!(self, Self::AllTested { .. })
    }

    /// Source files lacking a test, in traversal order.
    #[must_use]
    pub fn testless_files(&self) -> &[PathBuf] {
        match self {
            Self::AllTested { .. } => &[],
            Self::SomeTestless { files, .. } => files,
        }
    }

    #[must_use]
    pub const fn statistics(&self) -> Option<&Statistics> {
        match self {
            Self::AllTested { statistics } | Self::SomeTestless { statistics, .. } => {
                statistics.as_ref()
            }
        }
    }
}
