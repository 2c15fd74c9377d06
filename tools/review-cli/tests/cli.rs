//! End-to-end runs of the `review` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const REVIEW: &str = include_str!("fixtures/review.json");
const SETTINGS: &str = include_str!("fixtures/settings.json");

/// Fresh working directory with the fixtures and an empty config.
fn workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("review-cli-e2e-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("reviews")).unwrap();
    fs::write(dir.join("reviews").join("rox.json"), REVIEW).unwrap();
    fs::write(dir.join("settings.json"), SETTINGS).unwrap();
    fs::write(dir.join("review.toml"), "[build]\nsettings = \"settings.json\"\n").unwrap();
    dir
}

fn review(cwd: &Path, args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_review"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute review");

    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn test_render_to_stdout() {
    let dir = workspace("render");

    let output = review(&dir, &["render", "reviews/rox.json"]);
    let html = String::from_utf8_lossy(&output.stdout);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Rox Casino Review 2021</title>"));
    assert!(html.contains(r#"<img src="icon-vg.png" alt="">"#));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_render_json_format() {
    let dir = workspace("render-json");

    let output = review(&dir, &["render", "reviews/rox.json", "--format", "json"]);
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(page["uri"], "/reviews/rox-casino/");
    assert_eq!(page["sections"][0]["kind"], "main");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_build_writes_page_per_record() {
    let dir = workspace("build");

    review(&dir, &["build", "--yes"]);

    let page = dir.join("dist").join("rox-casino").join("index.html");
    let html = fs::read_to_string(&page).unwrap();
    assert!(html.contains(r#"id="bonuses""#));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_inspect_json() {
    let dir = workspace("inspect");

    let output = review(&dir, &["--json", "inspect", "reviews/rox.json"]);
    let inspection: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(inspection["reputation"]["label"], "Very Good");
    assert_eq!(inspection["facets"][0]["rows"], 2);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_set_and_get() {
    let dir = workspace("config");

    review(&dir, &["config", "set", "site.name", "Rox Reviews"]);
    let output = review(&dir, &["config", "get", "site.name"]);

    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "\"Rox Reviews\"");

    fs::remove_dir_all(&dir).unwrap();
}
