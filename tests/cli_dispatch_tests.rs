mod common;

use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_docket")
}

#[test]
fn no_command_returns_usage() {
    let output = Command::new(bin()).output().expect("docket should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: docket"));
}

#[test]
fn stats_command_prints_derived_rates() {
    let root = common::fixture_root("cli-stats");

    let output = Command::new(bin())
        .args(["stats", root.to_string_lossy().as_ref()])
        .output()
        .expect("stats should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3,500,000"));
    assert!(stdout.contains("30.6%"));

    common::cleanup(&root);
}

#[test]
fn validate_command_passes_on_clean_fixture() {
    let root = common::fixture_root("cli-validate-ok");

    let output = Command::new(bin())
        .args(["validate", root.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed"));

    common::cleanup(&root);
}

#[test]
fn validate_command_fails_on_broken_data() {
    let root = common::fixture_root("cli-validate-bad");
    std::fs::write(root.join("stats.json"), "{broken").expect("fixture should be written");

    let output = Command::new(bin())
        .args(["validate", root.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));

    common::cleanup(&root);
}

#[test]
fn top_command_prints_ranked_table() {
    let root = common::fixture_root("cli-top");

    let output = Command::new(bin())
        .args(["top", "judges", "3", root.to_string_lossy().as_ref()])
        .output()
        .expect("top should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("rank\tname\tcourt\tdecisions\tgrant_rate"));
    let first = lines.next().expect("at least one ranked row");
    assert!(first.starts_with("1\tCarla Cruz"));

    common::cleanup(&root);
}

#[test]
fn top_command_rejects_unknown_category() {
    let root = common::fixture_root("cli-top-bad");

    let output = Command::new(bin())
        .args(["top", "planets", "3", root.to_string_lossy().as_ref()])
        .output()
        .expect("top should run");

    assert_eq!(output.status.code(), Some(2));

    common::cleanup(&root);
}

#[test]
fn export_command_writes_csv_to_stdout() {
    let root = common::fixture_root("cli-export");

    let output = Command::new(bin())
        .args(["export", "judges", root.to_string_lossy().as_ref()])
        .output()
        .expect("export should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("slug,name,courtCode,decisions,asylumGranted,asylumDenied,grantRate"));
    assert!(stdout.contains("carla-cruz,Carla Cruz,MIA,400,300,100,75.0"));

    common::cleanup(&root);
}

#[test]
fn export_command_fails_on_unknown_table() {
    let root = common::fixture_root("cli-export-bad");

    let output = Command::new(bin())
        .args(["export", "nope", root.to_string_lossy().as_ref()])
        .output()
        .expect("export should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown export table"));

    common::cleanup(&root);
}
