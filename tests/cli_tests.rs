//! Integration tests for the arktos CLI
//!
//! These tests run the arktos binary against temporary site directories.

use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for arktos
fn arktos() -> Command {
    let mut cmd = cargo_bin_cmd!("arktos");
    cmd.env_remove("ARKTOS_ROOT").env_remove("ARKTOS_LOG").env_remove("RUST_LOG");
    cmd
}

/// A site with the sample blog layout under `content/`
fn sample_site() -> TempDir {
    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    fs::create_dir_all(content.join("blog")).unwrap();
    fs::write(content.join("about.md"), "# About\n\nWho we are.\n").unwrap();
    fs::write(content.join("blog/index.md"), "# 0. Blog\n").unwrap();
    fs::write(
        content.join("blog/01012024.md"),
        "# 1012024. First Post\n\nHappy new year.\n",
    )
    .unwrap();
    fs::write(content.join("blog/post-two.md"), "# Post Two\n").unwrap();
    dir
}

fn root_arg(dir: &Path) -> [String; 2] {
    ["--root".to_string(), dir.display().to_string()]
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and banner
// ============================================================================

#[test]
fn test_help_flag() {
    arktos()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: arktos"))
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("translate"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("arktos "));
}

#[test]
fn test_unknown_format_is_usage_error() {
    arktos()
        .args(["--format", "records", "socials"])
        .assert()
        .code(2);
}

// ============================================================================
// Menu command
// ============================================================================

#[test]
fn test_menu_human_tree() {
    let site = sample_site();
    arktos()
        .args(root_arg(site.path()))
        .arg("menu")
        .assert()
        .success()
        .stdout(
            "Blog (blog)\n  Post Two (blog/post-two)\n  First Post (blog/01012024) [2024-01-01]\nAbout (about)\n",
        );
}

#[test]
fn test_menu_json_tree() {
    let site = sample_site();
    let output = arktos()
        .args(root_arg(site.path()))
        .args(["--format", "json", "menu"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let forest = stdout_json(&output);
    assert_eq!(forest.as_array().unwrap().len(), 2);
    assert_eq!(forest[0]["slug"], "blog");
    assert_eq!(forest[0]["sortOrder"], 0);
    assert_eq!(forest[0]["children"][0]["slug"], "blog/post-two");
    assert_eq!(forest[0]["children"][1]["publicationDate"], "2024-01-01");
    assert_eq!(forest[1]["slug"], "about");
    assert!(forest[1].get("children").is_none());
}

#[test]
fn test_menu_uses_configured_content_dir() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();
    fs::write(dir.path().join("pages/hello.md"), "# Hello").unwrap();
    fs::write(dir.path().join("arktos.toml"), "content_dir = \"pages\"\n").unwrap();

    arktos()
        .args(root_arg(dir.path()))
        .arg("menu")
        .assert()
        .success()
        .stdout("Hello (hello)\n");
}

#[test]
fn test_menu_empty_content() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("content")).unwrap();

    arktos()
        .args(root_arg(dir.path()))
        .arg("menu")
        .assert()
        .success()
        .stdout("No menu entries found\n");

    arktos()
        .args(root_arg(dir.path()))
        .args(["menu", "--quiet"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_menu_missing_content_dir() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .arg("menu")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("content directory not found"));
}

#[test]
fn test_menu_missing_content_dir_json_error() {
    let dir = tempdir().unwrap();
    let output = arktos()
        .args(root_arg(dir.path()))
        .args(["--format", "json", "menu"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], 3);
    assert_eq!(error["error"]["type"], "content_not_found");
}

#[test]
fn test_invalid_config_is_data_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("arktos.toml"), "content_dir = [").unwrap();

    arktos()
        .args(root_arg(dir.path()))
        .arg("menu")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

// ============================================================================
// Entry command
// ============================================================================

#[test]
fn test_entry_human() {
    let site = sample_site();
    arktos()
        .args(root_arg(site.path()))
        .args(["entry", "blog/01012024.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: First Post"))
        .stdout(predicate::str::contains("Slug: blog/01012024"))
        .stdout(predicate::str::contains("Published: 2024-01-01"))
        .stdout(predicate::str::contains("Happy new year."));
}

#[test]
fn test_entry_json_index_file() {
    let site = sample_site();
    let output = arktos()
        .args(root_arg(site.path()))
        .args(["--format", "json", "entry", "./blog/index.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entry = stdout_json(&output);
    assert_eq!(entry["id"], "blog");
    assert_eq!(entry["title"], "Blog");
    assert_eq!(entry["sortOrder"], 0);
    assert!(entry.get("publicationDate").is_none());
}

#[test]
fn test_entry_missing_file() {
    let site = sample_site();
    arktos()
        .args(root_arg(site.path()))
        .args(["entry", "nope.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("content file not found: nope.md"));
}

// ============================================================================
// Translate and locale commands
// ============================================================================

#[test]
fn test_translate_default_locale() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .args(["translate", "site.title"])
        .assert()
        .success()
        .stdout("Arktos\n");
}

#[test]
fn test_translate_explicit_locale() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .args(["translate", "menu.title", "--locale", "ca"])
        .assert()
        .success()
        .stdout("Menú\n");
}

#[test]
fn test_translate_missing_and_invalid_keys() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .args(["translate", "nope.key"])
        .assert()
        .success()
        .stdout("[MISSING: nope.key]\n");

    arktos()
        .args(root_arg(dir.path()))
        .args(["translate", "site"])
        .assert()
        .success()
        .stdout("[INVALID: site]\n");
}

#[test]
fn test_translate_unknown_locale() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .args(["translate", "site.title", "--locale", "fr"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown locale: fr"));
}

#[test]
fn test_locale_defaults_to_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("arktos.toml"), "default_locale = \"es\"\n").unwrap();

    arktos()
        .args(root_arg(dir.path()))
        .args(["locale", "-q"])
        .assert()
        .success()
        .stdout("es (Spanish)\n");
}

#[test]
fn test_locale_is_persisted() {
    let dir = tempdir().unwrap();

    arktos()
        .args(root_arg(dir.path()))
        .args(["locale", "ca"])
        .assert()
        .success()
        .stdout("ca (Catalan)\n");

    let stored = fs::read_to_string(dir.path().join(".arktos/6c6f63616c65.json")).unwrap();
    assert_eq!(stored, "\"ca\"");

    arktos()
        .args(root_arg(dir.path()))
        .arg("locale")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ca (Catalan)\n"))
        .stdout(predicate::str::contains("* ca (Catalan)"));

    arktos()
        .args(root_arg(dir.path()))
        .args(["translate", "blog.published"])
        .assert()
        .success()
        .stdout("Publicat\n");
}

#[test]
fn test_locale_json() {
    let dir = tempdir().unwrap();
    let output = arktos()
        .args(root_arg(dir.path()))
        .args(["--format", "json", "locale", "qq"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["locale"], "qq");
    assert_eq!(json["name"], "QQQQQ (Debug)");
    assert_eq!(json["supported"].as_array().unwrap().len(), 4);
}

#[test]
fn test_unknown_locale_not_persisted() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .args(["locale", "fr"])
        .assert()
        .code(2);

    arktos()
        .args(root_arg(dir.path()))
        .args(["locale", "-q"])
        .assert()
        .success()
        .stdout("en (English)\n");
}

#[test]
fn test_corrupted_locale_state() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".arktos")).unwrap();
    fs::write(dir.path().join(".arktos/6c6f63616c65.json"), "invalid-json{").unwrap();

    arktos()
        .args(root_arg(dir.path()))
        .arg("locale")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("corrupted stored value"));
}

// ============================================================================
// Socials command
// ============================================================================

#[test]
fn test_socials_human() {
    let dir = tempdir().unwrap();
    arktos()
        .args(root_arg(dir.path()))
        .arg("socials")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "github GitHub <https://github.com/project-arktosmos>\n",
        ))
        .stdout(predicate::str::contains("instagram Instagram"));
}

#[test]
fn test_socials_json() {
    let dir = tempdir().unwrap();
    let output = arktos()
        .args(root_arg(dir.path()))
        .args(["--format", "json", "socials"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let socials = stdout_json(&output);
    let ids: Vec<&str> = socials
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["github", "bluesky", "instagram"]);
}
