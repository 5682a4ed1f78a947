mod mock_fs;

use std::path::{Path, PathBuf};

use super::*;
use mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.spec-guard.toml", "max_depth = 3\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.max_depth, Some(3));
    assert_eq!(
        result.source,
        Some(PathBuf::from("/my/project/.spec-guard.toml"))
    );
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/spec-guard/config.toml",
        "mock_identifier = \"fake\"\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.mock_identifier, "fake");
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.spec-guard.toml", "root = \"local\"\n")
        .with_file(
            "/home/user/.config/spec-guard/config.toml",
            "root = \"user\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.root, "local");
}

#[test]
fn missing_user_config_dir_falls_back_to_defaults() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config, Config::default());
}

#[test]
fn load_from_path_reports_missing_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert!(matches!(err, SpecGuardError::Config(_)));
    assert!(err.to_string().contains("/nope.toml"));
}

#[test]
fn load_from_path_reports_invalid_toml() {
    let fs = MockFileSystem::new().with_file("/project/bad.toml", "max_depth = [");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load_from_path(Path::new("/project/bad.toml")).unwrap_err();

    assert!(matches!(err, SpecGuardError::TomlParse(_)));
}

#[test]
fn loaded_config_is_normalized() {
    let fs = MockFileSystem::new()
        .with_file("/project/.spec-guard.toml", "suffixes = []\ncongratulations = []\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.suffixes, Config::default().suffixes);
    assert_eq!(
        result.config.congratulations,
        Config::default().congratulations
    );
}
