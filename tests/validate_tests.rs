mod common;

use docket::data::loader::DataRoot;
use docket::data::validate::{validate_data_root, ValidationSeverity};
use serde_json::json;

#[test]
fn clean_fixture_root_passes_with_warnings_only() {
    let root = common::fixture_root("validate-clean");

    let report = validate_data_root(&DataRoot::new(&root));
    assert!(!report.has_errors(), "diagnostics: {:?}", report.diagnostics);

    // The appeals row with code XX is flagged but not fatal.
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.severity == ValidationSeverity::Warning && d.message.contains("'XX'")));

    // Indexed entities without detail files are informational.
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.severity == ValidationSeverity::Info && d.context == "nationalities/mexico"));

    common::cleanup(&root);
}

#[test]
fn duplicate_index_codes_are_errors() {
    let root = common::fixture_root("validate-dup");
    common::write_json(
        root.join("nationality-index.json"),
        json!({
            "nationalities": [
                {
                    "code": "GT", "slug": "guatemala", "name": "Guatemala",
                    "totalCases": 10, "pendingCases": 1,
                    "asylumGranted": 2, "asylumDenied": 3
                },
                {
                    "code": "GT", "slug": "guatemala-2", "name": "Guatemala",
                    "totalCases": 10, "pendingCases": 1,
                    "asylumGranted": 2, "asylumDenied": 3
                }
            ]
        }),
    );

    let report = validate_data_root(&DataRoot::new(&root));
    assert!(report.has_errors());
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.severity == ValidationSeverity::Error && d.message.contains("duplicate code")));

    common::cleanup(&root);
}

#[test]
fn malformed_detail_file_is_an_error() {
    let root = common::fixture_root("validate-malformed");
    std::fs::write(root.join("nationalities/guatemala.json"), "{broken")
        .expect("fixture should be written");

    let report = validate_data_root(&DataRoot::new(&root));
    assert!(report.has_errors());
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.context == "nationalities/guatemala"
            && d.severity == ValidationSeverity::Error));

    common::cleanup(&root);
}

#[test]
fn detail_code_disagreeing_with_index_is_an_error() {
    let root = common::fixture_root("validate-mismatch");
    common::write_json(
        root.join("nationalities/guatemala.json"),
        json!({
            "code": "HN", "slug": "guatemala", "name": "Guatemala",
            "totalCases": 10, "pendingCases": 1,
            "asylumGranted": 2, "asylumDenied": 3
        }),
    );

    let report = validate_data_root(&DataRoot::new(&root));
    assert!(report.has_errors());
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.message.contains("disagrees with index code")));

    common::cleanup(&root);
}

#[test]
fn judge_with_unknown_court_code_is_a_warning() {
    let root = common::fixture_root("validate-judge-court");
    common::write_json(
        root.join("judge-index.json"),
        json!({
            "judges": [
                {
                    "slug": "amy-adams", "name": "Amy Adams", "courtCode": "ZZZ",
                    "decisions": 200, "asylumGranted": 100, "asylumDenied": 100
                }
            ]
        }),
    );

    let report = validate_data_root(&DataRoot::new(&root));
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.severity == ValidationSeverity::Warning
            && d.message.contains("unknown court code 'ZZZ'")));

    common::cleanup(&root);
}

#[test]
fn missing_required_files_are_errors() {
    let root = common::unique_temp_dir("validate-empty");

    let report = validate_data_root(&DataRoot::new(&root));
    assert!(report.has_errors());
    assert!(report.count(ValidationSeverity::Error) >= 4);

    common::cleanup(&root);
}
