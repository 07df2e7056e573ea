use clap::Parser;
use common::config::DriftConfig;
use drift_check::cli::Args;
use drift_check::{exit_codes, run};
use serde_json::Value;
use std::fs;
use std::path::Path;

const REFERENCE: &str = "../linematch/src/test_files/verify/reference.adoc";
const GENERATED: &str = "../linematch/src/test_files/verify/generated.adoc";
const GENERATED_DRIFT: &str = "../linematch/src/test_files/verify/generated_drift.adoc";

#[derive(Debug)]
struct Output {
    code: i32,
    stdout: String,
    stderr: String,
}

fn check(argv: &[&str]) -> anyhow::Result<Output> {
    check_with(argv, &DriftConfig::default())
}

fn check_with(argv: &[&str], config: &DriftConfig) -> anyhow::Result<Output> {
    let mut full = vec!["drift-check"];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full).unwrap();

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(&args, config, &mut stdout, &mut stderr)?;
    Ok(Output {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    })
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn up_to_date_documentation_exits_zero() {
    let out = check(&[REFERENCE, GENERATED]).unwrap();
    assert_eq!(out.code, exit_codes::SUCCESS);
    assert!(out.stdout.contains("7 literal, 2 pattern, 6 skipped"));
    assert!(out.stderr.is_empty());
}

#[test]
fn quiet_success_prints_nothing() {
    let out = check(&[REFERENCE, GENERATED, "--quiet"]).unwrap();
    assert_eq!(out.code, exit_codes::SUCCESS);
    assert!(out.stdout.is_empty());
}

#[test]
fn drift_exits_one_with_diagnostic_on_stderr() {
    let out = check(&[REFERENCE, GENERATED_DRIFT]).unwrap();
    assert_eq!(out.code, exit_codes::DRIFT);
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("fast-forward target never matched"));
    assert!(out.stderr.contains("expected line 6: | commafeed.http-client.timeout | 10s"));
    assert!(out.stderr.contains("actual line 5:   | commafeed.http-client.timeout | 30s"));
}

#[test]
fn json_drift_envelope() {
    let out = check(&[REFERENCE, GENERATED_DRIFT, "--format", "json"]).unwrap();
    assert_eq!(out.code, exit_codes::DRIFT);

    let value: Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["data"]["reason"], "fast_forward_target_never_matched");
    assert_eq!(value["data"]["expected_line_number"], 6);
    assert_eq!(value["data"]["actual_line_number"], 5);
}

#[test]
fn json_success_envelope() {
    let out = check(&[REFERENCE, GENERATED, "--format", "json", "--quiet"]).unwrap();
    let value: Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "Documentation is up to date.");
    assert_eq!(value["data"]["skipped_lines"], 6);
}

#[test]
fn missing_file_is_an_error_not_drift() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing.adoc").to_string_lossy().into_owned();
    let err = check(&[REFERENCE, missing.as_str()])
        .err()
        .expect("missing file must not produce a verdict");
    let message = format!("{:#}", err);
    assert!(message.contains("could not check"));
    assert!(message.contains("missing.adoc"));
}

#[test]
fn custom_marker_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let expected = write(tmp.path(), "expected.txt", "header\n~~\nfooter\n");
    let actual = write(tmp.path(), "actual.txt", "header\nbuilt 12:00\nfooter\n");

    let out = check(&[expected.as_str(), actual.as_str()]).unwrap();
    assert_eq!(out.code, exit_codes::DRIFT);

    let out = check(&[expected.as_str(), actual.as_str(), "--marker", "~~"]).unwrap();
    assert_eq!(out.code, exit_codes::SUCCESS);
}

#[test]
fn environment_marker_is_used_without_flags() {
    let tmp = tempfile::tempdir().unwrap();
    let expected = write(tmp.path(), "expected.txt", "header\n~~\nfooter\n");
    let actual = write(tmp.path(), "actual.txt", "header\nnoise\nfooter\n");
    let config = DriftConfig {
        fast_forward_marker: Some("~~".into()),
        ..DriftConfig::default()
    };

    let out = check_with(&[expected.as_str(), actual.as_str()], &config).unwrap();
    assert_eq!(out.code, exit_codes::SUCCESS);
}

#[test]
fn no_delimiter_turns_counted_marker_into_literal() {
    let tmp = tempfile::tempdir().unwrap();
    let expected = write(tmp.path(), "expected.txt", "a\n>> 1 >>\nc\n");
    let actual = write(tmp.path(), "actual.txt", "a\nb\nc\n");

    assert_eq!(check(&[expected.as_str(), actual.as_str()]).unwrap().code, exit_codes::SUCCESS);
    assert_eq!(
        check(&[expected.as_str(), actual.as_str(), "--no-delimiter"]).unwrap().code,
        exit_codes::DRIFT
    );
}

#[test]
fn invalid_options_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let options = write(tmp.path(), "options.json", "{ \"context_lines\": \"two\" }");
    let err = check(&[REFERENCE, GENERATED, "--options", options.as_str()]).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid match options"));
}
