mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_list_plain_formats_every_field() {
    let fixture = TestFixture::new();

    let assert = fixture
        .command()
        .arg("list")
        .arg("--input")
        .arg(fixture.sample_records())
        .assert()
        .success();

    assert
        .stdout(predicate::str::contains("Alice Smith"))
        .stdout(predicate::str::contains("(217) 555-0136"))
        .stdout(predicate::str::contains(
            "1208 Maple Avenue, Springfield, Illinois, 62704",
        ))
        .stdout(predicate::str::contains(
            "77 Victoria Road, Leeds, United Kingdom, LS1 4HT",
        ))
        .stdout(predicate::str::contains("Birthday: 05/14/1990"))
        .stdout(predicate::str::contains("3 profile(s)"));
}

#[test]
fn test_list_json_is_parseable() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .arg("--input")
        .arg(fixture.sample_records())
        .output()
        .expect("Failed to run list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("Parse failed");
    let rows = rows.as_array().expect("Expected a JSON array");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "Alice Smith");
    assert_eq!(rows[0]["index"], 0);
    assert_eq!(rows[1]["phone"], "(077) 009-0041");
    assert_eq!(rows[2]["birthday"], "02/29/1996");
}

#[test]
fn test_list_search_narrows_to_matching_names() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .arg("--search")
        .arg("smith")
        .arg("--input")
        .arg(fixture.sample_records())
        .output()
        .expect("Failed to run list with search");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("Parse failed");
    let rows = rows.as_array().expect("Expected a JSON array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Alice Smith");
    assert_eq!(rows[1]["name"], "Cara Smith");
}

#[test]
fn test_list_search_matches_across_the_name_boundary() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .arg("--search")
        .arg("carasmith")
        .arg("--input")
        .arg(fixture.sample_records())
        .output()
        .expect("Failed to run list with search");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("Parse failed");

    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"], "Cara Smith");
}

#[test]
fn test_list_search_without_match_prints_nothing() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .arg("--search")
        .arg("nobody")
        .arg("--input")
        .arg(fixture.sample_records())
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles to show."));
}

#[test]
fn test_list_missing_input_file_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .arg("--input")
        .arg(fixture.temp_path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load profiles"));
}

#[test]
fn test_fetch_failure_degrades_to_an_empty_directory() {
    let fixture = TestFixture::new();
    fixture.write_config("count = 5\napi_url = \"http://localhost:1/api/\"\n");

    // The config's unreachable api_url makes the fetch fail fast; the
    // command still succeeds with an empty directory and a notice.
    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles to show."))
        .stderr(predicate::str::contains("Network error."));
}
