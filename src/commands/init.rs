use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SpecGuardError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SpecGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# spec-guard configuration file

# Directory to check, relative to the working directory (default: "src/app")
root = "src/app"

# File name endings that need a sibling test file
suffixes = [".component.ts", ".service.ts", ".guard.ts", ".directive.ts", ".pipe.ts"]

# Files whose name contains this text are mocks and never need a test
mock_identifier = "mock"

# Maximum directory depth below the root; omit for unlimited (0 = root only)
# max_depth = 3

# Also report files that have a test (default: false)
show_tested_files = false

# Exit with an error when tests are missing (default: true)
fail_on_missing = true

# Print total/tested/testless counts (default: false)
show_statistics = false

# The expected test file replaces the first source_marker in the file name
# with test_marker: foo.component.ts -> foo.component.spec.ts
source_marker = ".ts"
test_marker = ".spec.ts"

# Messages shown when every file has a test (one is picked at random)
# congratulations = ["All good!"]

[exclude]
# Glob patterns; a matching directory is skipped with everything below it
patterns = ["**/environments/**"]

# Skip files whose content matches
# rules = [{ contains = "DEPRECATED" }, { regex = "TO_BE_REMOVED" }]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
