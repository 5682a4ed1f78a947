//! Orchestrates a verification run.
//!
//! The [`Verifier`] walks the configured root, classifies every surviving
//! file, reports each finding through a [`Reporter`], and produces a
//! [`RunResult`]. [`Verifier::on_run_complete`] additionally turns missing
//! tests into [`SpecGuardError::MissingTests`] when `fail_on_missing` is set.

mod picker;
mod result;

pub use picker::{FixedPicker, MessagePicker, RandomPicker};
pub use result::{RunResult, Statistics};

use std::path::{Path, PathBuf};

use crate::classifier::{Classification, Classifier};
use crate::config::Config;
use crate::error::{Result, SpecGuardError};
use crate::output::{Reporter, Severity};
use crate::scanner::{DirectoryScanner, ExclusionFilter, FileScanner};

pub const MISSING_TESTS_MESSAGE: &str = "Some files are missing tests.";

/// Accumulator threaded through a single run.
struct RunState {
    testless: Vec<PathBuf>,
    statistics: Option<Statistics>,
}

impl RunState {
    fn new(collect_statistics: bool) -> Self {
        Self {
            testless: Vec::new(),
            statistics: collect_statistics.then(Statistics::default),
        }
    }
}

/// Test-presence verifier.
///
/// `G` is an opaque context handed over by the host that invokes the
/// verifier; it is kept for the host's benefit and never inspected.
pub struct Verifier<R: Reporter, P: MessagePicker = RandomPicker, G = ()> {
    host_context: G,
    config: Config,
    root: PathBuf,
    scanner: DirectoryScanner<ExclusionFilter>,
    classifier: Classifier,
    reporter: R,
    picker: P,
}

impl<R: Reporter> Verifier<R> {
    /// Build a verifier whose root is resolved against the working directory.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined or an
    /// exclusion pattern is invalid.
    pub fn new(config: Config, reporter: R) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::with_base_dir(config, &cwd, reporter)
    }

    /// Build a verifier whose root is resolved against `base_dir`.
    ///
    /// # Errors
    /// Returns an error if an exclusion pattern is invalid.
    pub fn with_base_dir(config: Config, base_dir: &Path, reporter: R) -> Result<Self> {
        let config = config.normalized();
        let root = base_dir.join(&config.root);
        let filter = ExclusionFilter::new(&root, &config.exclude)?;
        let scanner = DirectoryScanner::new(filter).with_max_depth(config.max_depth);
        let classifier = Classifier::from_config(&config);

        Ok(Self {
            host_context: (),
            config,
            root,
            scanner,
            classifier,
            reporter,
            picker: RandomPicker::new(),
        })
    }
}

impl<R: Reporter, P: MessagePicker, G> Verifier<R, P, G> {
    /// Replace the success-message picker.
    #[must_use]
    pub fn with_picker<Q: MessagePicker>(self, picker: Q) -> Verifier<R, Q, G> {
        Verifier {
            host_context: self.host_context,
            config: self.config,
            root: self.root,
            scanner: self.scanner,
            classifier: self.classifier,
            reporter: self.reporter,
            picker,
        }
    }

    /// Attach the host's context value.
    #[must_use]
    pub fn with_host_context<H>(self, host_context: H) -> Verifier<R, P, H> {
        Verifier {
            host_context,
            config: self.config,
            root: self.root,
            scanner: self.scanner,
            classifier: self.classifier,
            reporter: self.reporter,
            picker: self.picker,
        }
    }

    #[must_use]
    pub const fn host_context(&self) -> &G {
        &self.host_context
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute directory the run starts from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    #[must_use]
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    #[must_use]
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Traverse, classify and report.
    ///
    /// Missing tests are part of the returned [`RunResult`], not an error.
    ///
    /// # Errors
    /// Returns an error if the root or a directory below it cannot be read.
    pub fn run(&mut self) -> Result<RunResult> {
        let files = self.scanner.scan(&self.root)?;
        let mut state = RunState::new(self.config.show_statistics);

        for path in &files {
            let classification = self.classifier.classify_path(path);
            self.record(classification, &mut state);
        }

        if let Some(statistics) = &state.statistics {
            self.reporter.emit(Severity::Info, &statistics.to_string());
        }

        let RunState {
            testless,
            statistics,
        } = state;

        tracing::info!(
            root = %self.root.display(),
            scanned = files.len(),
            testless = testless.len(),
            "verification complete"
        );

        if testless.is_empty() {
            self.congratulate();
            Ok(RunResult::AllTested { statistics })
        } else {
            self.reporter.emit(Severity::Error, MISSING_TESTS_MESSAGE);
            Ok(RunResult::SomeTestless {
                files: testless,
                statistics,
            })
        }
    }

    /// Host lifecycle hook: run, then apply the fail-on-missing policy.
    ///
    /// # Errors
    /// Returns a fatal I/O error from [`Self::run`], or
    /// [`SpecGuardError::MissingTests`] after the report has been emitted.
    pub fn on_run_complete(&mut self) -> Result<RunResult> {
        let result = self.run()?;
        self.enforce_policy(&result)?;
        Ok(result)
    }

    /// # Errors
    /// Returns [`SpecGuardError::MissingTests`] when `result` has testless
    /// files and `fail_on_missing` is enabled.
    pub fn enforce_policy(&self, result: &RunResult) -> Result<()> {
        if let RunResult::SomeTestless { files, .. } = result
            && self.config.fail_on_missing
        {
            return Err(SpecGuardError::MissingTests { count: files.len() });
        }
        Ok(())
    }

    fn record(&mut self, classification: Classification, state: &mut RunState) {
        match classification {
            Classification::NotApplicable => {}
            Classification::Tested { source, test } => {
                tracing::trace!(source = %source.display(), test = %test.display(), "tested");
                if let Some(statistics) = state.statistics.as_mut() {
                    statistics.record_tested();
                }
                if self.config.show_tested_files {
                    self.reporter.emit(
                        Severity::Info,
                        &format!("File with test: {}", source.display()),
                    );
                }
            }
            Classification::Testless { source, expected } => {
                tracing::trace!(source = %source.display(), "testless");
                if let Some(statistics) = state.statistics.as_mut() {
                    statistics.record_testless();
                }
                self.reporter.emit(
                    Severity::Error,
                    &format!(
                        "File without test: {}\n\nExpected test file: {}",
                        source.display(),
                        expected.display()
                    ),
                );
                state.testless.push(source);
            }
        }
    }

    fn congratulate(&mut self) {
        let messages = &self.config.congratulations;
        if messages.is_empty() {
            return;
        }
        let index = self.picker.pick(messages.len()).min(messages.len() - 1);
        self.reporter.emit(Severity::Info, &messages[index]);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
