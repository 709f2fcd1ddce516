use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the fieldcheck binary
#[allow(deprecated)]
fn fieldcheck() -> Command {
    Command::cargo_bin("fieldcheck").expect("Failed to find fieldcheck binary")
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_reports_errors_in_rule_order() {
    let assert = fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.yml"))
        .arg(fixture_path("sailor_input.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains(
            "name: name's length must be less than 10",
        ))
        .stdout(predicate::str::contains("age: 水手的年龄必须大于22"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let name_pos = stdout.find("1. name").expect("name error should be first");
    let age_pos = stdout.find("2. age").expect("age error should be second");
    assert!(name_pos < age_pos);
}

#[test]
fn test_validate_json_output() {
    let assert = fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.yml"))
        .arg(fixture_path("sailor_input.json"))
        .arg("--format")
        .arg("json")
        .assert()
        .code(1);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert_eq!(report["passed"], false);
    assert_eq!(report["summary"]["error_count"], 2);
    assert_eq!(report["errors"][0]["field"], "name");
    assert_eq!(
        report["errors"][1]["message"],
        "水手的年龄必须大于22"
    );
    assert!(report.get("input").is_none());
}

#[test]
fn test_validate_passes_after_conversion() {
    fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.toml"))
        .arg(fixture_path("valid_input.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"))
        .stdout(predicate::str::contains("Total errors:   0"));
}

#[test]
fn test_validate_no_convert() {
    fieldcheck()
        .arg("validate")
        .arg("--no-convert")
        .arg(fixture_path("sailor.toml"))
        .arg(fixture_path("valid_input.yml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("age must be an integer"));
}

#[test]
fn test_validate_print_input_shows_coerced_values() {
    let assert = fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.json"))
        .arg(fixture_path("code_input.toml"))
        .arg("--format")
        .arg("json")
        .arg("--print-input")
        .assert()
        .code(1);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["input"]["active"], true);
    assert_eq!(report["input"]["code"], "hello");
    assert_eq!(
        report["errors"][0]["message"],
        "code fails to match the /\\d+/ pattern"
    );
}

#[test]
fn test_validate_with_language() {
    fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.json"))
        .arg(fixture_path("code_input.toml"))
        .arg("--language")
        .arg("zh_CN")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("code必须匹配/\\d+/"));
}

#[test]
fn test_validate_unknown_language_falls_back() {
    let assert = fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.json"))
        .arg(fixture_path("code_input.toml"))
        .arg("--language")
        .arg("fr_FR")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("code fails to match"));

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(
        stderr.matches("Unknown locale 'fr_FR'").count(),
        1,
        "expected a single fallback warning, got: {stderr}"
    );
}

#[test]
fn test_validate_unsupported_type_is_fatal() {
    fieldcheck()
        .arg("validate")
        .arg(fixture_path("unsupported_type.yml"))
        .arg(fixture_path("valid_input.yml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("date"));
}

#[test]
fn test_validate_input_not_object() {
    fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.yml"))
        .arg(fixture_path("list_input.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input must be an object"));
}

#[test]
fn test_validate_missing_input_file() {
    fieldcheck()
        .arg("validate")
        .arg(fixture_path("sailor.yml"))
        .arg("nonexistent.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse input file"));
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_document() {
    fieldcheck()
        .arg("check")
        .arg(fixture_path("sailor.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule document is valid"))
        .stdout(predicate::str::contains("2 field(s)"))
        .stdout(predicate::str::contains("min 2, max 10"))
        .stdout(predicate::str::contains("optional"))
        .stdout(predicate::str::contains("Custom messages for 2 field(s)"));
}

#[test]
fn test_check_json_document_with_pattern() {
    fieldcheck()
        .arg("check")
        .arg(fixture_path("sailor.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("pattern /\\d+/"))
        .stdout(predicate::str::contains("boolean"));
}

#[test]
fn test_check_json_format() {
    let assert = fieldcheck()
        .arg("check")
        .arg(fixture_path("sailor.toml"))
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let document: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(document["rules"]["name"]["type"], "string");
    assert_eq!(document["rules"]["age"]["required"], false);
}

#[test]
fn test_check_invalid_document() {
    fieldcheck()
        .arg("check")
        .arg(fixture_path("invalid_rules.yml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.ini");
    fs::write(&path, "[rules]").unwrap();

    fieldcheck()
        .arg("check")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_check_empty_messages_are_not_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.yml");
    fs::write(&path, "rules:\n  name: { type: string }\nmessages: {}\n").unwrap();

    fieldcheck()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule document is valid"))
        .stdout(predicate::str::contains("Custom messages").not());
}

#[test]
fn test_check_document_from_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.yaml");
    fs::write(&path, "rules:\n  flag: { type: boolean, required: false }\n").unwrap();

    fieldcheck()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("flag"))
        .stdout(predicate::str::contains("1 field(s)"));
}

// ============================================================================
// misc
// ============================================================================

#[test]
fn test_locales() {
    fieldcheck()
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("en_US (default)"))
        .stdout(predicate::str::contains("zh_CN"));
}

#[test]
fn test_help() {
    fieldcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("locales"));
}

#[test]
fn test_verbose_flag() {
    fieldcheck()
        .arg("--verbose")
        .arg("locales")
        .assert()
        .success();
}
