//! Integration tests for the webbs binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixture_path, temp_fixture};

/// A `webbs` command isolated from the user's config file.
fn webbs(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("webbs").expect("binary is built");
    cmd.env("WEBBS_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("WEBBS_LOG");
    cmd
}

// ============================================================================
// Help and completions
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sauce"))
        .stdout(predicate::str::contains("html"))
        .stdout(predicate::str::contains("grid"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    webbs(&dir).assert().code(2);
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("webbs"));
}

// ============================================================================
// sauce
// ============================================================================

#[test]
fn sauce_prints_record() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .arg("sauce")
        .arg(fixture_path("menu.ans"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:   Main Menu"))
        .stdout(predicate::str::contains("Group:   WEBBS"))
        .stdout(predicate::str::contains("Date:    1996-03-14"))
        .stdout(predicate::str::contains("Size:    53 B"))
        .stdout(predicate::str::contains("Grid:    20x4"))
        .stdout(predicate::str::contains("Font:    IBM VGA"))
        .stdout(predicate::str::contains("ice colors on"))
        .stdout(predicate::str::contains("Comment: Drawn for the integration tests"));
}

#[test]
fn sauce_reports_absent_record() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .arg("sauce")
        .arg(fixture_path("plain.txt"))
        .assert()
        .success()
        .stdout(predicate::str::ends_with("plain.txt: no SAUCE record\n"));
}

#[test]
fn sauce_json_output() {
    let dir = TempDir::new().unwrap();
    let output = webbs(&dir)
        .args(["sauce", "--json"])
        .arg(fixture_path("menu.ans"))
        .arg(fixture_path("plain.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["sauce"]["title"], "Main Menu");
    assert_eq!(reports[0]["sauce"]["date"], "1996-03-14");
    assert_eq!(reports[0]["sauce"]["width"], 20);
    assert_eq!(reports[0]["sauce"]["data_type"], "character");
    assert_eq!(reports[0]["comments"][0], "Drawn for the integration tests");
    assert!(reports[1]["sauce"].is_null());
}

#[test]
fn sauce_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .args(["sauce", "nonexistent.ans"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("nonexistent.ans"));
}

// ============================================================================
// html and view
// ============================================================================

#[test]
fn html_writes_into_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("preview");
    webbs(&dir)
        .arg("html")
        .arg(fixture_path("menu.ans"))
        .arg(fixture_path("plain.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out.join("menu.html")).unwrap();
    assert!(html.contains("<span style=\"color:#00aaaa\">MAIN</span>"));
    assert!(!html.contains("SAUCE"));
    assert!(out.join("plain.html").exists());
}

#[test]
fn html_defaults_to_input_directory_and_custom_font() {
    let (dir, path) = temp_fixture("menu.ans");
    webbs(&dir)
        .arg("html")
        .arg(&path)
        .args(["--font", "Topaz"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("menu.html")).unwrap();
    assert!(html.contains("font-family:Topaz;"));
}

#[test]
fn view_writes_plain_text_when_piped() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .arg("view")
        .arg(fixture_path("menu.ans"))
        .assert()
        .success()
        .stdout("╔════╗\n║MAIN║\n╚════╝\n");
}

// ============================================================================
// grid
// ============================================================================

#[test]
fn grid_encode_utf8() {
    let dir = TempDir::new().unwrap();
    let output = webbs(&dir)
        .args(["grid", "encode", "--utf8"])
        .arg(fixture_path("grid.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap().replace('\x1b', "^");
    insta::assert_snapshot!(text, @"^[2J^[H^[1;1H^[93;40m###^[2;1H^[37;40mA^[31;40mB^[37;40m ^[0m");
}

#[test]
fn grid_encode_with_prompt() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .args(["grid", "encode", "--prompt"])
        .arg(fixture_path("grid.json"))
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "\x1b[?25l\x1b[2;1H\x1b[37;40mSelect option: \x1b[?25h",
        ));
}

#[test]
fn grid_decode_uses_sauce_dimensions() {
    let dir = TempDir::new().unwrap();
    let output = webbs(&dir)
        .args(["grid", "decode"])
        .arg(fixture_path("menu.ans"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["width"], 20);
    assert_eq!(doc["height"], 4);
    assert_eq!(doc["cells"][0][0]["char"], "╔");
    assert_eq!(doc["cells"][0][0]["fg"], 14);
    assert_eq!(doc["cells"][1][1]["char"], "M");
    assert_eq!(doc["cells"][1][1]["fg"], 6);
}

#[test]
fn grid_decode_then_encode_round_trips() {
    let dir = TempDir::new().unwrap();
    let decoded = webbs(&dir)
        .args(["grid", "decode", "--width", "3", "--height", "2"])
        .arg(fixture_path("plain.txt"))
        .output()
        .unwrap();
    assert!(decoded.status.success());

    let grid_path = dir.path().join("plain.json");
    fs::write(&grid_path, &decoded.stdout).unwrap();
    webbs(&dir)
        .args(["grid", "encode", "--utf8"])
        .arg(&grid_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hel\x1b[2;1Hlo "));
}

#[test]
fn grid_encode_rejects_invalid_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"width":0,"height":2,"cells":[]}"#).unwrap();
    webbs(&dir)
        .args(["grid", "encode"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid grid document"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    webbs(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created"));
    assert!(dir.path().join("config.toml").exists());

    webbs(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    webbs(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[grid]"))
        .stdout(predicate::str::contains("width = 80"))
        .stdout(predicate::str::contains("prompt = \"Select option: \""));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[render]\nwrap_width = 0\n").unwrap();
    webbs(&dir)
        .arg("view")
        .arg(fixture_path("plain.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wrap_width"));
}
