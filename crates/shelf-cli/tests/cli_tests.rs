//! End-to-end tests for the `shelf` binary.

use std::path::PathBuf;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// `shelf` with an isolated config location and no inherited log/env noise.
fn shelf(home: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("shelf");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SHELF_LIBRARY__MAX_BOOKS");
    cmd
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("suggest"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_run_prints_report() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .arg("run")
        .arg(fixture("walkthrough.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("book 'atlas' rejected: Catalog is full"))
        .stdout(predicate::str::contains("suggested tintin to ada"))
        .stdout(predicate::str::contains("ada borrowed tintin"))
        .stdout(predicate::str::contains("tintin is unavailable"))
        .stdout(predicate::str::contains("alan could not borrow dune"))
        .stdout(predicate::str::contains("on loan to ada"));
}

#[test]
fn test_run_json_report() {
    let home = TempDir::new().unwrap();
    let out = shelf(&home)
        .args(["run", "--format", "json"])
        .arg(fixture("walkthrough.toml"))
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["limits"]["max_books"], 2);
    assert_eq!(json["steps"][1]["outcome"], "borrowed");
    assert_eq!(json["steps"][3]["outcome"], "refused");
    assert_eq!(json["inventory"][0]["borrower"], "ada");
    assert!(json.get("journal").is_none());
}

#[test]
fn test_run_with_journal() {
    let home = TempDir::new().unwrap();
    let out = shelf(&home)
        .args(["run", "--format", "json", "--journal"])
        .arg(fixture("walkthrough.toml"))
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let events: Vec<_> = json["journal"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(events.iter().filter(|e| *e == "book_added").count(), 2);
    assert!(events.contains(&"book_rejected".to_string()));
    assert!(events.contains(&"borrow_refused".to_string()));
}

#[test]
fn test_suggest_for_patron() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["--quiet", "suggest", "--patron", "alan"])
        .arg(fixture("walkthrough.toml"))
        .assert()
        .success()
        .stdout("dune\n");
}

#[test]
fn test_suggest_nothing_when_scores_are_zero() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["--quiet", "suggest", "--patron", "ada"])
        .arg(fixture("walkthrough.toml"))
        .assert()
        .success()
        .stdout("-\n");
}

#[test]
fn test_suggest_unknown_patron_is_not_found() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["suggest", "--patron", "nobody"])
        .arg(fixture("walkthrough.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown patron key 'nobody'"));
}

#[test]
fn test_missing_scenario_file() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["run", "/absolutely/does/not/exist.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load scenario"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_invalid_scenario_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(
        &path,
        "[[books]]\nkey = \"a\"\ntitle = \"A\"\nauthor = \"B\"\n\n\
         [[books]]\nkey = \"a\"\ntitle = \"C\"\nauthor = \"D\"\n",
    )
    .unwrap();

    shelf(&home)
        .arg("run")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Duplicate book key 'a'"));
}

#[test]
fn test_config_limits_apply_to_scenarios_without_library() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("shelf.toml");
    std::fs::write(&config, "[library]\nmax_books = 1\n").unwrap();

    let scenario = home.path().join("two_books.toml");
    std::fs::write(
        &scenario,
        "[[books]]\nkey = \"a\"\ntitle = \"A\"\nauthor = \"X\"\n\n\
         [[books]]\nkey = \"b\"\ntitle = \"B\"\nauthor = \"Y\"\n",
    )
    .unwrap();

    shelf(&home)
        .arg("--config")
        .arg(&config)
        .arg("run")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("book 'b' rejected"));
}

#[test]
fn test_env_overrides_config() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .env("SHELF_LIBRARY__MAX_BOOKS", "42")
        .args(["config", "get", "library.max_books"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_invalid_config_exits_4() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("shelf.toml");
    std::fs::write(&config, "[library]\nmax_patrons = 0\n").unwrap();

    shelf(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_init_writes_config_once() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("nested/shelf.toml");

    shelf(&home)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    let written = std::fs::read_to_string(&config).unwrap();
    assert!(written.contains("max_books = 10"));

    shelf(&home)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    shelf(&home)
        .arg("--config")
        .arg(&config)
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shelf"));
}

#[test]
fn test_unknown_subcommand_exits_2() {
    let home = TempDir::new().unwrap();
    shelf(&home).arg("shelve").assert().code(2);
}
