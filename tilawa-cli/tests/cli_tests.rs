//! Integration tests for the Tilawa CLI
//!
//! Every test runs with `--offline` and a temporary `--data-dir`, so nothing
//! touches the network or the user's real bookmarks.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Command preconfigured for offline use against `data_dir`
fn tilawa(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tilawa-cli").unwrap();
    cmd.arg("--offline")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("tilawa-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("bookmark"))
        .stdout(predicate::str::contains("theme"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("tilawa-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tilawa"));
}

#[test]
fn test_read_help() {
    let mut cmd = Command::cargo_bin("tilawa-cli").unwrap();
    cmd.args(["read", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read a chapter"))
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--search"));
}

#[test]
fn test_read_missing_chapter() {
    let mut cmd = Command::cargo_bin("tilawa-cli").unwrap();
    cmd.arg("read")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_list_popular() {
    let dir = TempDir::new().unwrap();
    tilawa(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Al-Fatihah"))
        .stdout(predicate::str::contains("Al-Kahf"))
        .stdout(predicate::str::contains("An-Nas"));
}

#[test]
fn test_list_all_offline_json() {
    let dir = TempDir::new().unwrap();
    let body = json_output(tilawa(&dir).args(["list", "--all", "--json"]));

    assert_eq!(body["chapters"].as_array().unwrap().len(), 114);
    assert_eq!(body["origin"]["kind"], "dataset");
    assert!(body["fallback_reason"].is_string());
}

#[test]
fn test_read_offline_chapter() {
    let dir = TempDir::new().unwrap();
    tilawa(&dir)
        .args(["read", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1:1]"))
        .stdout(predicate::str::contains("[1:7]"))
        .stdout(predicate::str::contains("7 verses · Makki"))
        .stdout(predicate::str::contains("Showing offline content"));
}

#[test]
fn test_read_search() {
    let dir = TempDir::new().unwrap();
    tilawa(&dir)
        .args(["read", "1", "--search", "merciful"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 verses matching"))
        .stdout(predicate::str::contains("[1:3]"))
        .stdout(predicate::str::contains("[1:2]").not());
}

#[test]
fn test_read_both_languages() {
    let dir = TempDir::new().unwrap();
    tilawa(&dir)
        .args(["read", "112", "--lang", "both"])
        .assert()
        .success()
        .stdout(predicate::str::contains("English:"))
        .stdout(predicate::str::contains("اردو:"));
}

#[test]
fn test_read_placeholder_json() {
    let dir = TempDir::new().unwrap();
    let body = json_output(tilawa(&dir).args(["read", "50", "--json"]));

    let verses = body["verses"].as_array().unwrap();
    assert_eq!(verses.len(), 6);
    assert_eq!(verses[5]["kind"], "notice");
}

#[test]
fn test_read_invalid_chapter() {
    let dir = TempDir::new().unwrap();
    for bad in ["0", "115", "abc"] {
        tilawa(&dir)
            .args(["read", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid Surah ID"));
    }
}

#[test]
fn test_bookmark_toggle_persists() {
    let dir = TempDir::new().unwrap();

    tilawa(&dir)
        .args(["bookmark", "2:255"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmark added: 2:255"));

    let stored = fs::read_to_string(dir.path().join("quranBookmarks.json")).unwrap();
    assert!(stored.contains("2:255"));

    let body = json_output(tilawa(&dir).args(["bookmarks", "--json"]));
    assert_eq!(body["bookmarks"], serde_json::json!(["2:255"]));
    assert_eq!(body["totalCount"], 1);

    tilawa(&dir)
        .args(["bookmark", "2:255"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmark removed: 2:255"));

    tilawa(&dir)
        .arg("bookmarks")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks yet"));
}

#[test]
fn test_bookmark_rejects_bad_keys() {
    let dir = TempDir::new().unwrap();
    for bad in ["1:8", "115:1", "surah-0", "nonsense"] {
        tilawa(&dir).args(["bookmark", bad]).assert().failure();
    }
}

#[test]
fn test_bookmarks_export_to_directory() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    tilawa(&dir).args(["bookmark", "surah-18"]).assert().success();
    tilawa(&dir)
        .args(["bookmarks", "--export"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 bookmarks"));

    let exported: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].starts_with("quran-bookmarks-"));
    assert!(exported[0].ends_with(".json"));
}

#[test]
fn test_theme_persists() {
    let dir = TempDir::new().unwrap();

    tilawa(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    tilawa(&dir)
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    tilawa(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    tilawa(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn test_audio_links() {
    let dir = TempDir::new().unwrap();
    tilawa(&dir)
        .args(["audio", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://server8.mp3quran.net/afs/001.mp3"))
        .stdout(predicate::str::contains("https://quran.com/1"));

    tilawa(&dir).args(["audio", "115"]).assert().failure();
}

#[test]
fn test_check_fails_offline() {
    let dir = TempDir::new().unwrap();
    tilawa(&dir)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("API connectivity:   FAILED"));
}

#[test]
fn test_verify_offline_reports_every_fallback() {
    let dir = TempDir::new().unwrap();
    let body = json_output(tilawa(&dir).args(["verify", "--json"]));

    assert_eq!(body["total"], 114);
    assert_eq!(body["fallback"].as_array().unwrap().len(), 114);
    assert!(body["successful"].as_array().unwrap().is_empty());
}
