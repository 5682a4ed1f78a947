#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the spec-guard binary.
#[macro_export]
macro_rules! spec_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("spec-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates an empty file.
    pub fn touch(&self, relative_path: &str) {
        self.create_file(relative_path, "");
    }

    /// Creates a source file together with its sibling spec file.
    pub fn create_tested(&self, relative_path: &str) {
        self.touch(relative_path);
        self.touch(&relative_path.replacen(".ts", ".spec.ts", 1));
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a spec-guard config file in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".spec-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config that keeps the report deterministic.
pub const SINGLE_MESSAGE_CONFIG: &str = r#"
congratulations = ["All files tested."]
"#;
