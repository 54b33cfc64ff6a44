//! `streams check` over the fixture documents.

use std::path::{Path, PathBuf};

use streams_cli::{check_file, check_files, roundtrip_file, Config, Severity};
use streams_engine::{DecodeOptions, VocabularyRegistry};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn check(name: &str, options: &DecodeOptions) -> streams_cli::CheckResult {
    check_file(&fixture(name), &VocabularyRegistry::default(), options)
}

#[test]
fn fixtures_report_as_expected() {
    let paths: Vec<PathBuf> = [
        "move.json",
        "extension.json",
        "place.json",
        "malformed.json",
        "truncated.json",
    ]
    .iter()
    .map(|name| fixture(name))
    .collect();
    let report = check_files(paths.as_slice(), &VocabularyRegistry::default(), &DecodeOptions::default());
    let severities: Vec<Severity> = report.results.iter().map(|r| r.severity).collect();
    assert_eq!(
        severities,
        [
            Severity::Pass,
            Severity::Warning,
            Severity::Warning,
            Severity::Failure,
            Severity::Failure,
        ]
    );
    assert!(!report.all_passed());
    assert!(report.to_string().ends_with("Summary: 1 passed, 2 warnings, 2 failed"));
}

#[test]
fn extension_warning_lists_opaque_paths() {
    let result = check("extension.json", &DecodeOptions::default());
    assert_eq!(result.details, ["attachment[0]", "toot:sensitive"]);
}

#[test]
fn malformed_dates_name_the_property() {
    let result = check("malformed.json", &DecodeOptions::default());
    assert!(result.message.contains("`closed`"), "{}", result.message);
}

#[test]
fn strict_config_rejects_scalar_maps() {
    let config = Config::from_toml("[decode]\nstrict-scalar-maps = true\n").unwrap();
    let result = check("place.json", &config.decode);
    assert!(result.is_failure());
    assert!(result.message.contains("`altitude`"), "{}", result.message);
}

#[test]
fn roundtrip_drops_context_and_collapses_lists() {
    let out = roundtrip_file(
        &fixture("move.json"),
        &VocabularyRegistry::default(),
        &DecodeOptions::default(),
    )
    .unwrap();
    assert!(out.get("@context").is_none());
    assert!(out["object"].is_object());
    assert_eq!(out["target"], "https://b.example/inbox");
}
