//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CORPUS: &str = r#"{
  "kerberoi": ["holmes", "watson", "lestrade"],
  "quotes": [
    {"term": "Fall 2019", "quotes": [
      "HOLMES: Elementary, my dear Watson.",
      "Nothing to blank here."
    ]},
    {"term": "Spring 2020", "quotes": [
      "LESTRADE: We have him now, Holmes."
    ]}
  ]
}"#;

const GLOSSARY: &str = "Sherlock Holmes (holmes)\nJohn Watson (watson)\n";
const QUOTEBOARD: &str = "\
=== Fall 2016 ===
* HOLMES: Ancient history.
=== Fall 2019 ===
* HOLMES: Elementary, my dear Watson.
* WATSON: Remarkable.
";

/// Isolated working directory with a corpus in it.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("data.json"), CORPUS).unwrap();
    dir
}

fn kerbquiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("kerbquiz").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("KERBQUIZ_DATA")
        .env_remove("KERBQUIZ_DECOY_COUNT")
        .env_remove("KERBQUIZ_SEED");
    cmd
}

#[test]
fn validate_reports_counts() {
    let dir = workspace();
    kerbquiz(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 terms, 2 playable quotes"))
        .stdout(predicate::str::contains("Fall 2019: 1"))
        .stdout(predicate::str::contains("1 quote(s) without any term"));
}

#[test]
fn validate_missing_file() {
    let dir = TempDir::new().unwrap();
    kerbquiz(&dir)
        .arg("validate")
        .arg("--data")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("nonexistent.json"));
}

#[test]
fn validate_empty_vocabulary_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("data.json"),
        r#"{"kerberoi": [], "quotes": [{"term": "x", "quotes": ["hi"]}]}"#,
    )
    .unwrap();
    kerbquiz(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vocabulary is empty"));
}

#[test]
fn show_text() {
    let dir = workspace();
    kerbquiz(&dir)
        .args(["show", "--seed", "1", "--decoys", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote 1 of 2"))
        .stdout(predicate::str::contains("[0.0: ?]: Elementary, my dear [1.1: ?]."))
        .stdout(predicate::str::contains("Placed 0/2 blanks"));
}

#[test]
fn show_json() {
    let dir = workspace();
    let output = kerbquiz(&dir)
        .args(["show", "--index", "1", "--seed", "7", "--decoys", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["topic"], "Spring 2020");
    assert_eq!(value["tray"].as_array().unwrap().len(), 5);
    assert_eq!(value["blanks"][0]["id"], "0.0");
    assert_eq!(value["blanks"][0]["expected"], "LESTRADE");
    assert_eq!(value["blanks"][1]["expected"], "Holmes");
}

#[test]
fn show_out_of_range() {
    let dir = workspace();
    kerbquiz(&dir)
        .args(["show", "--index", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn play_reveal_and_quit() {
    let dir = workspace();
    kerbquiz(&dir)
        .args(["play", "--seed", "3", "--no-shuffle"])
        .write_stdin("reveal\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1.1: Watson]"))
        .stdout(predicate::str::contains("Complete!"))
        .stdout(predicate::str::contains("Bye."));
}

#[test]
fn play_ignores_bad_moves() {
    let dir = workspace();
    kerbquiz(&dir)
        .args(["play", "--seed", "3", "--no-shuffle"])
        .write_stdin("move tray 99 0.0\nplace 0 4.4\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing at tray 99."))
        .stdout(predicate::str::contains("There is no blank 4.4."))
        .stdout(predicate::str::contains("Quote 2 of 2"));
}

#[test]
fn import_then_validate() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("kerbs.txt"), GLOSSARY).unwrap();
    std::fs::write(dir.path().join("quoteboard.txt"), QUOTEBOARD).unwrap();

    kerbquiz(&dir)
        .args([
            "import",
            "--kerbs",
            "kerbs.txt",
            "--quoteboard",
            "quoteboard.txt",
            "--output",
            "out/data.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 2 terms and 2 quotes in 1 sections",
        ));

    kerbquiz(&dir)
        .args(["validate", "--data", "out/data.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 playable quotes"))
        .stdout(predicate::str::contains("Corpus valid."));
}

#[test]
fn import_respects_min_year() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("kerbs.txt"), GLOSSARY).unwrap();
    std::fs::write(dir.path().join("quoteboard.txt"), QUOTEBOARD).unwrap();

    kerbquiz(&dir)
        .args([
            "import",
            "--kerbs",
            "kerbs.txt",
            "--quoteboard",
            "quoteboard.txt",
            "--min-year",
            "2015",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 quotes in 2 sections"));
    assert!(dir.path().join("data.json").exists());
}

#[test]
fn config_file_supplies_defaults() {
    let dir = workspace();
    std::fs::rename(dir.path().join("data.json"), dir.path().join("corpus.json")).unwrap();
    std::fs::write(
        dir.path().join("kerbquiz.toml"),
        "data_path = \"corpus.json\"\ndecoy_count = 0\n",
    )
    .unwrap();

    kerbquiz(&dir)
        .args(["show", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tray: [0]"))
        .stdout(predicate::str::contains("[2]").not());
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    kerbquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created kerbquiz.toml"));
    assert!(dir.path().join("kerbquiz.toml").exists());

    kerbquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
