//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn keycheck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("keycheck").unwrap()
}

const KEY_TEXT: &str = "\
1000000001 2000000001
1000000002 2100000002
1000000003 2200000003
";

const SHEET_TEXT: &str = "\
Question ID : 1000000001
Option 1 ID : 2000000001
Option 2 ID : 2000000002
Option 3 ID : 2000000003
Option 4 ID : 2000000004
Chosen Option : 1

Question ID : 1000000002
Option 1 ID : 2100000001
Option 2 ID : 2100000002
Option 3 ID : 2100000003
Option 4 ID : 2100000004
Chosen Option : 1

Question ID : 1000000003
Option 1 ID : 2200000001
Option 2 ID : 2200000002
Option 3 ID : 2200000003
Option 4 ID : 2200000004
Chosen Option : Not Attempted
";

fn write_fixtures(dir: &TempDir) -> (PathBuf, PathBuf) {
    let key = dir.path().join("key.txt");
    let sheet = dir.path().join("sheet.txt");
    std::fs::write(&key, KEY_TEXT).unwrap();
    std::fs::write(&sheet, SHEET_TEXT).unwrap();
    (sheet, key)
}

#[test]
fn score_prints_table_and_totals() {
    let dir = TempDir::new().unwrap();
    let (sheet, key) = write_fixtures(&dir);

    keycheck()
        .arg("score")
        .arg("--response-sheet")
        .arg(&sheet)
        .arg("--answer-key")
        .arg(&key)
        .assert()
        .success()
        .stdout(predicate::str::contains("1000000001"))
        .stdout(predicate::str::contains("Final Score: 3"))
        .stdout(predicate::str::contains("Correct: 1"))
        .stdout(predicate::str::contains("Incorrect: 1"))
        .stdout(predicate::str::contains("Unattempted: 1"));
}

#[test]
fn score_json_format() {
    let dir = TempDir::new().unwrap();
    let (sheet, key) = write_fixtures(&dir);

    keycheck()
        .arg("score")
        .arg("--response-sheet")
        .arg(&sheet)
        .arg("--answer-key")
        .arg(&key)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 3"))
        .stdout(predicate::str::contains("\"question_id\": \"1000000001\""));
}

#[test]
fn score_markdown_format() {
    let dir = TempDir::new().unwrap();
    let (sheet, key) = write_fixtures(&dir);

    keycheck()
        .arg("score")
        .arg("--response-sheet")
        .arg(&sheet)
        .arg("--answer-key")
        .arg(&key)
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Score: 3**"))
        .stdout(predicate::str::contains("| Question ID |"));
}

#[test]
fn score_writes_report_file() {
    let dir = TempDir::new().unwrap();
    let (sheet, key) = write_fixtures(&dir);
    let report = dir.path().join("report.json");

    keycheck()
        .arg("score")
        .arg("--response-sheet")
        .arg(&sheet)
        .arg("--answer-key")
        .arg(&key)
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to:"));

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("\"score\": 3"));
}

#[test]
fn score_show_blocks_dumps_records() {
    let dir = TempDir::new().unwrap();
    let (sheet, key) = write_fixtures(&dir);

    keycheck()
        .arg("score")
        .arg("--response-sheet")
        .arg(&sheet)
        .arg("--answer-key")
        .arg(&key)
        .arg("--show-blocks")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Block 1:"))
        .stdout(predicate::str::contains("Block 2:"))
        .stdout(predicate::str::contains("Block 3:").not());
}

#[test]
fn score_missing_sheet_fails_with_detail() {
    let dir = TempDir::new().unwrap();
    let (_, key) = write_fixtures(&dir);

    keycheck()
        .arg("score")
        .arg("--response-sheet")
        .arg(dir.path().join("nonexistent.txt"))
        .arg("--answer-key")
        .arg(&key)
        .assert()
        .failure()
        .stderr(predicate::str::contains("response sheet extraction failed"));
}

#[test]
fn quiet_hides_error_detail() {
    let dir = TempDir::new().unwrap();
    let (_, key) = write_fixtures(&dir);

    keycheck()
        .arg("score")
        .arg("--quiet")
        .arg("--response-sheet")
        .arg(dir.path().join("nonexistent.txt"))
        .arg("--answer-key")
        .arg(&key)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: processing failed"))
        .stderr(predicate::str::contains("extraction failed").not());
}

#[test]
fn config_can_quiet_errors() {
    let dir = TempDir::new().unwrap();
    let (_, key) = write_fixtures(&dir);
    let config = dir.path().join("keycheck.toml");
    std::fs::write(&config, "[presentation]\nquiet_errors = true\n").unwrap();

    keycheck()
        .arg("score")
        .arg("--config")
        .arg(&config)
        .arg("--response-sheet")
        .arg(dir.path().join("nonexistent.txt"))
        .arg("--answer-key")
        .arg(&key)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: processing failed"));
}

#[test]
fn config_can_relax_missing_option_policy() {
    let dir = TempDir::new().unwrap();
    let key = dir.path().join("key.txt");
    let sheet = dir.path().join("sheet.txt");
    std::fs::write(&key, "1000000001 2000000001\n").unwrap();
    // Option 3 is chosen but its identifier never appears in the sheet.
    std::fs::write(
        &sheet,
        "Question ID : 1000000001\nOption 1 ID : 2000000001\nChosen Option : 3\n",
    )
    .unwrap();
    let config = dir.path().join("keycheck.toml");
    std::fs::write(
        &config,
        "[scoring]\nmissing_option_policy = \"unattempted\"\n",
    )
    .unwrap();

    // Default policy: scored as wrong.
    keycheck()
        .arg("score")
        .arg("--response-sheet")
        .arg(&sheet)
        .arg("--answer-key")
        .arg(&key)
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Score: -1"));

    // Relaxed policy: scored as unattempted.
    keycheck()
        .arg("score")
        .arg("--config")
        .arg(&config)
        .arg("--response-sheet")
        .arg(&sheet)
        .arg("--answer-key")
        .arg(&key)
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Score: 0"));
}

#[test]
fn inspect_key_prints_sample() {
    let dir = TempDir::new().unwrap();
    let (_, key) = write_fixtures(&dir);

    keycheck()
        .arg("inspect")
        .arg("--document")
        .arg(&key)
        .arg("--kind")
        .arg("key")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer key: 3 entries"))
        .stdout(predicate::str::contains("1000000001 -> 2000000001"));
}

#[test]
fn inspect_sheet_prints_blocks() {
    let dir = TempDir::new().unwrap();
    let (sheet, _) = write_fixtures(&dir);

    keycheck()
        .arg("inspect")
        .arg("--document")
        .arg(&sheet)
        .arg("--kind")
        .arg("sheet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 question blocks."))
        .stdout(predicate::str::contains("\"question_id\": \"1000000001\""));
}

#[test]
fn inspect_unknown_kind_fails() {
    let dir = TempDir::new().unwrap();
    let (sheet, _) = write_fixtures(&dir);

    keycheck()
        .arg("inspect")
        .arg("--document")
        .arg(&sheet)
        .arg("--kind")
        .arg("pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown document kind"));
}
