use std::path::Path;

use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, ExclusionRuleConfig, FileConfigLoader};
use crate::output::{ColorMode, ConsoleReporter, JsonReport, MemoryReporter, OutputFormat};
use crate::verifier::{RandomPicker, Verifier};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_TESTS_MISSING, Result, SpecGuardError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(kind = e.error_type(), "check failed");
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the check command and returns the process exit code.
///
/// # Errors
/// Returns an error for configuration problems and fatal I/O failures.
/// Missing tests are reported through the exit code, not as an error.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    let picker = args.seed.map_or_else(RandomPicker::new, RandomPicker::seeded);

    match args.format {
        OutputFormat::Text => {
            let reporter =
                ConsoleReporter::stdio(color_choice_to_mode(cli.color)).with_quiet(cli.quiet);
            let mut verifier = Verifier::new(config, reporter)?.with_picker(picker);
            exit_code(verifier.on_run_complete().map(|_| ()))
        }
        OutputFormat::Json => {
            let mut verifier = Verifier::new(config, MemoryReporter::new())?.with_picker(picker);
            let result = verifier.run()?;
            let verdict = verifier.enforce_policy(&result);

            let root = verifier.root().to_path_buf();
            let classifier = verifier.classifier().clone();
            let messages = verifier.into_reporter().into_messages();
            let report = JsonReport::new(&root, &result, &classifier, messages);
            println!("{}", report.to_json()?);

            exit_code(verdict)
        }
    }
}

fn exit_code(verdict: Result<()>) -> Result<i32> {
    match verdict {
        Ok(()) => Ok(EXIT_SUCCESS),
        Err(SpecGuardError::MissingTests { .. }) => Ok(EXIT_TESTS_MISSING),
        Err(e) => Err(e),
    }
}

/// Load the config file unless `--no-config` was given.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "using config file");
    }
    Ok(loaded.config)
}

/// CLI values replace scalar settings; exclusions are added to the config's.
pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(root) = &args.root {
        config.root = root.to_string_lossy().into_owned();
    }

    if let Some(suffixes) = &args.suffix {
        config.suffixes = suffixes
            .iter()
            .filter(|suffix| !suffix.is_empty())
            .cloned()
            .collect();
    }

    if let Some(mock_identifier) = &args.mock_identifier {
        config.mock_identifier.clone_from(mock_identifier);
    }

    if args.max_depth.is_some() {
        config.max_depth = args.max_depth;
    }

    if args.show_tested {
        config.show_tested_files = true;
    }

    if args.stats {
        config.show_statistics = true;
    }

    if args.fail_on_missing {
        config.fail_on_missing = true;
    }

    if args.no_fail {
        config.fail_on_missing = false;
    }

    config.exclude.patterns.extend(args.exclude.iter().cloned());
    config.exclude.rules.extend(
        args.exclude_contains
            .iter()
            .cloned()
            .map(ExclusionRuleConfig::Contains),
    );
    config.exclude.rules.extend(
        args.exclude_regex
            .iter()
            .cloned()
            .map(ExclusionRuleConfig::Regex),
    );
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
