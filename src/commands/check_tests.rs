use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn parse(argv: &[&str]) -> Cli {
    let mut full = vec!["spec-guard", "--no-config", "--quiet", "--color", "never", "check"];
    full.extend_from_slice(argv);
    Cli::parse_from(full)
}

fn run(cli: &Cli) -> Result<i32> {
    let Commands::Check(args) = &cli.command else {
        panic!("Expected Check command");
    };
    run_check_impl(args, cli)
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "").unwrap();
}

#[test]
fn overrides_replace_scalars() {
    let mut config = Config::default();
    let args = CheckArgs {
        root: Some("web/app".into()),
        suffix: Some(vec![".pipe.ts".to_string()]),
        mock_identifier: Some("stub".to_string()),
        max_depth: Some(1),
        show_tested: true,
        stats: true,
        no_fail: true,
        ..CheckArgs::default()
    };

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.root, "web/app");
    assert_eq!(config.suffixes.len(), 1);
    assert_eq!(config.mock_identifier, "stub");
    assert_eq!(config.max_depth, Some(1));
    assert!(config.show_tested_files);
    assert!(config.show_statistics);
    assert!(!config.fail_on_missing);
}

#[test]
fn overrides_without_flags_keep_config() {
    let mut config = Config {
        max_depth: Some(4),
        fail_on_missing: false,
        ..Config::default()
    };

    apply_cli_overrides(&mut config, &CheckArgs::default());

    assert_eq!(config.max_depth, Some(4));
    assert!(!config.fail_on_missing);
    assert_eq!(config.root, "src/app");
}

#[test]
fn fail_on_missing_flag_reenables_failure() {
    let mut config = Config {
        fail_on_missing: false,
        ..Config::default()
    };
    let args = CheckArgs {
        fail_on_missing: true,
        ..CheckArgs::default()
    };

    apply_cli_overrides(&mut config, &args);

    assert!(config.fail_on_missing);
}

#[test]
fn overrides_append_exclusions() {
    let mut config = Config::default();
    config.exclude.patterns.push("**/legacy/**".to_string());
    let args = CheckArgs {
        exclude: vec!["*.module.ts".to_string()],
        exclude_contains: vec!["DEPRECATED".to_string()],
        exclude_regex: vec!["TO_BE_REMOVED".to_string()],
        ..CheckArgs::default()
    };

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.exclude.patterns, vec!["**/legacy/**", "*.module.ts"]);
    assert_eq!(
        config.exclude.rules,
        vec![
            ExclusionRuleConfig::Contains("DEPRECATED".to_string()),
            ExclusionRuleConfig::Regex("TO_BE_REMOVED".to_string()),
        ]
    );
}

#[test]
fn load_config_with_no_config_returns_defaults() {
    let config = load_config(Some(Path::new("/definitely/missing.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_config_reads_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "show_statistics = true\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();

    assert!(config.show_statistics);
}

#[test]
fn run_check_succeeds_when_all_tested() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "foo.component.ts");
    touch(temp_dir.path(), "foo.component.spec.ts");

    let root = temp_dir.path().to_string_lossy().into_owned();
    let code = run(&parse(&[root.as_str()])).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn run_check_returns_missing_tests_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "bar.service.ts");

    let root = temp_dir.path().to_string_lossy().into_owned();
    let code = run(&parse(&[root.as_str()])).unwrap();

    assert_eq!(code, EXIT_TESTS_MISSING);
}

#[test]
fn run_check_no_fail_succeeds_with_missing_tests() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "bar.service.ts");

    let root = temp_dir.path().to_string_lossy().into_owned();
    let code = run(&parse(&[root.as_str(), "--no-fail"])).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn run_check_json_uses_same_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "bar.service.ts");

    let root = temp_dir.path().to_string_lossy().into_owned();
    let code = run(&parse(&[root.as_str(), "--format", "json"])).unwrap();

    assert_eq!(code, EXIT_TESTS_MISSING);
}

#[test]
fn run_check_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("missing").to_string_lossy().into_owned();

    let result = run(&parse(&[root.as_str()]));

    assert!(matches!(result, Err(SpecGuardError::DirRead { .. })));
}

#[test]
fn run_check_maps_errors_to_config_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_string_lossy().into_owned();
    let cli = parse(&[root.as_str(), "-x", "[broken"]);
    let Commands::Check(args) = &cli.command else {
        panic!("Expected Check command");
    };

    assert_eq!(run_check(args, &cli), EXIT_CONFIG_ERROR);
}
