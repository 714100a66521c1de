//! Integration tests for the factlens CLI
//!
//! Each test points the binary at a throwaway config with zero latency and
//! webhooks on a closed local port, then drives it end to end.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEST_CONFIG: &str = r#"
[webhooks]
workflow = "http://127.0.0.1:9/workflow"
contact = "http://127.0.0.1:9/contact"
timeout_secs = 2

[analysis]
text_delay_ms = 0
video_delay_ms = 0
"#;

/// Temp dir holding the test config
fn setup() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, TEST_CONFIG).unwrap();
    (temp, config)
}

/// Helper function to create a factlens command
fn factlens(config: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("factlens"));
    cmd.env("FACTLENS_CONFIG", config);
    cmd
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let (_temp, config) = setup();
    factlens(&config)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("factlens v"));
}

#[test]
fn test_version_json() {
    let (_temp, config) = setup();
    factlens(&config)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help_lists_commands() {
    let (_temp, config) = setup();
    factlens(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("video"))
        .stdout(predicate::str::contains("contact"));
}

#[test]
fn test_config_shows_effective_values() {
    let (_temp, config) = setup();
    factlens(&config)
        .args(["--json", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:9/workflow"))
        .stdout(predicate::str::contains("\"video_delay_ms\": 0"));
}

#[test]
fn test_config_init_writes_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fresh").join("config.toml");

    factlens(&path).args(["config", "--init"]).assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("[webhooks]"));
}

// =============================================================================
// TEXT ANALYSIS
// =============================================================================

#[test]
fn test_text_json_report() {
    let (_temp, config) = setup();
    factlens(&config)
        .args(["--json", "text", "BREAKING!!! They don't want you to know", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"Likely Fake\""))
        .stdout(predicate::str::contains("High emotional language detected"));
}

#[test]
fn test_text_same_seed_same_output() {
    let (_temp, config) = setup();
    let run = || {
        factlens(&config)
            .args(["--json", "text", "is this real?", "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_text_html_fragment() {
    let (_temp, config) = setup();
    factlens(&config)
        .args(["text", "--url", "https://news.example.com/a", "--html", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div class=\"analysis-result\">"));
}

#[test]
fn test_text_without_input_fails() {
    let (_temp, config) = setup();
    factlens(&config)
        .arg("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter text or URL for analysis"));
}

// =============================================================================
// VIDEO
// =============================================================================

#[test]
fn test_video_url_report() {
    let (_temp, config) = setup();
    factlens(&config)
        .args(["video", "--url", "https://cdn.example.com/clip.mp4", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Frames:"))
        .stdout(predicate::str::contains("Detailed Analysis:"));
}

#[test]
fn test_video_rejects_unsupported_file() {
    let (temp, config) = setup();
    let clip = temp.path().join("clip.webm");
    fs::write(&clip, b"not really a video").unwrap();

    factlens(&config)
        .args(["video", "--file"])
        .arg(&clip)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unsupported file format. Please use MP4, AVI, or MOV files.",
        ));
}

#[test]
fn test_video_without_input_fails() {
    let (_temp, config) = setup();
    factlens(&config)
        .arg("video")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select a video file or enter a URL"));
}

#[test]
fn test_select_shows_preview() {
    let (temp, config) = setup();
    let clip = temp.path().join("clip.mp4");
    fs::write(&clip, vec![0_u8; 1024 * 1024]).unwrap();

    factlens(&config)
        .arg("select")
        .arg(&clip)
        .assert()
        .success()
        .stdout(predicate::str::contains("clip.mp4"))
        .stdout(predicate::str::contains("Size: 1.00 MB"));
}

#[test]
fn test_select_rejects_image() {
    let (temp, config) = setup();
    let photo = temp.path().join("photo.png");
    fs::write(&photo, b"png").unwrap();

    factlens(&config)
        .arg("select")
        .arg(&photo)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please select a valid video file"));
}

// =============================================================================
// WEBHOOKS
// =============================================================================

#[test]
fn test_contact_reports_network_error() {
    let (_temp, config) = setup();
    factlens(&config)
        .args(["contact", "-n", "Ada", "-e", "ada@example.com", "-m", "Hello"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Sending..."))
        .stdout(predicate::str::contains("❌ Network error. Check your connection."));
}

#[test]
fn test_forward_rejects_invalid_json() {
    let (_temp, config) = setup();
    factlens(&config)
        .args(["forward", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("payload is not valid JSON"));
}
