use std::path::Path;

use tempfile::TempDir;

use super::*;

const FILE: bool = true;
const DIR: bool = false;

fn exclude(patterns: &[&str], rules: Vec<ExclusionRuleConfig>) -> ExcludeConfig {
    ExcludeConfig {
        patterns: patterns.iter().map(ToString::to_string).collect(),
        rules,
    }
}

#[test]
fn glob_double_star_matches_across_segments() {
    let filter = ExclusionFilter::new("/proj/src/app", &exclude(&["**/*.service.ts"], vec![]))
        .unwrap();

    assert!(filter.is_excluded(Path::new("/proj/src/app/x.service.ts"), FILE));
    assert!(filter.is_excluded(Path::new("/proj/src/app/a/b/x.service.ts"), FILE));
    assert!(!filter.is_excluded(Path::new("/proj/src/app/x.component.ts"), FILE));
}

#[test]
fn glob_single_star_stays_within_segment() {
    let filter = ExclusionFilter::new("/root", &exclude(&["legacy/*.ts"], vec![])).unwrap();

    assert!(filter.is_excluded(Path::new("/root/legacy/old.ts"), FILE));
    assert!(!filter.is_excluded(Path::new("/root/legacy/nested/old.ts"), FILE));
}

#[test]
fn glob_matches_path_relative_to_root() {
    let filter = ExclusionFilter::new("/proj/src/app", &exclude(&["shared"], vec![])).unwrap();

    assert!(filter.is_excluded(Path::new("/proj/src/app/shared"), DIR));
    assert!(!filter.is_excluded(Path::new("/proj/src/app/feature/shared.ts"), FILE));
}

#[test]
fn glob_matches_full_path() {
    let filter =
        ExclusionFilter::new("/proj/src/app", &exclude(&["/proj/src/app/legacy"], vec![]))
            .unwrap();

    assert!(filter.is_excluded(Path::new("/proj/src/app/legacy"), DIR));
}

#[test]
fn invalid_glob_returns_error() {
    let result = ExclusionFilter::new("/root", &exclude(&["[invalid"], vec![]));
    assert!(matches!(
        result,
        Err(SpecGuardError::InvalidPattern { .. })
    ));
}

#[test]
fn invalid_regex_returns_error() {
    let rules = vec![ExclusionRuleConfig::Regex("(unclosed".to_string())];
    let result = ExclusionFilter::new("/root", &exclude(&[], rules));
    assert!(matches!(result, Err(SpecGuardError::InvalidRegex { .. })));
}

#[test]
fn content_rule_substring_excludes_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("old.service.ts");
    std::fs::write(&file, "// DEPRECATED: use new.service.ts\n").unwrap();

    let rules = vec![ExclusionRuleConfig::Contains("DEPRECATED".to_string())];
    let filter = ExclusionFilter::new(temp_dir.path(), &exclude(&[], rules)).unwrap();

    assert!(filter.is_excluded(&file, FILE));
}

#[test]
fn content_rule_regex_excludes_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("x.pipe.ts");
    std::fs::write(&file, "export class X {}\n// TO_BE_REMOVED in v3\n").unwrap();

    let rules = vec![ExclusionRuleConfig::Regex(r"TO_BE_REMOVED in v\d+".to_string())];
    let filter = ExclusionFilter::new(temp_dir.path(), &exclude(&[], rules)).unwrap();

    assert!(filter.is_excluded(&file, FILE));
}

#[test]
fn content_rule_without_match_keeps_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("x.pipe.ts");
    std::fs::write(&file, "export class X {}\n").unwrap();

    let rules = vec![
        ExclusionRuleConfig::Contains("DEPRECATED".to_string()),
        ExclusionRuleConfig::Regex("TO_BE_REMOVED".to_string()),
    ];
    let filter = ExclusionFilter::new(temp_dir.path(), &exclude(&[], rules)).unwrap();

    assert!(!filter.is_excluded(&file, FILE));
}

#[test]
fn content_rules_skip_directories() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("DEPRECATED");
    std::fs::create_dir(&dir).unwrap();

    let rules = vec![ExclusionRuleConfig::Contains("DEPRECATED".to_string())];
    let filter = ExclusionFilter::new(temp_dir.path(), &exclude(&[], rules)).unwrap();

    assert!(!filter.is_excluded(&dir, DIR));
}

#[test]
fn content_rules_skip_non_regular_entries() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("DEPRECATED.service.ts");
    std::fs::write(&file, "DEPRECATED").unwrap();

    let rules = vec![ExclusionRuleConfig::Contains("DEPRECATED".to_string())];
    let filter = ExclusionFilter::new(temp_dir.path(), &exclude(&[], rules)).unwrap();

    assert!(!filter.is_excluded(&file, false));
    assert!(filter.is_excluded(&file, true));
}

#[test]
fn unreadable_content_is_not_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("binary.service.ts");
    std::fs::write(&file, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let rules = vec![ExclusionRuleConfig::Regex(".*".to_string())];
    let filter = ExclusionFilter::new(temp_dir.path(), &exclude(&[], rules)).unwrap();

    assert!(!filter.is_excluded(&file, FILE));
}

#[test]
fn missing_file_is_not_excluded_by_content() {
    let rules = vec![ExclusionRuleConfig::Contains("x".to_string())];
    let filter = ExclusionFilter::new("/root", &exclude(&[], rules)).unwrap();

    assert!(!filter.is_excluded(Path::new("/root/gone.ts"), FILE));
}

#[test]
fn empty_filter_excludes_nothing() {
    let filter = ExclusionFilter::new("/root", &ExcludeConfig::default()).unwrap();

    assert!(!filter.is_excluded(Path::new("/root/a.service.ts"), FILE));
    assert!(!filter.is_excluded(Path::new("/root/sub"), DIR));
}

#[test]
fn content_rule_matches_directly() {
    assert!(ContentRule::Contains("abc".to_string()).matches("xxabcxx"));
    assert!(!ContentRule::Contains("abc".to_string()).matches("ab c"));
    assert!(ContentRule::Regex(Regex::new("^export").unwrap()).matches("export const a = 1;"));
}
