//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use factlens::config::Config;
use factlens::core::models::{UploadPreview, VideoFile};
use factlens::core::services::{score_text, score_video};
use factlens::output::{
    ConfigReport, ContactResult, OperationResult, OutputMode, SelectResult, TextReport,
    VideoReport,
};

use crate::common::mocks::ScriptedRandom;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Report Serialization Tests
// =============================================================================

#[test]
fn text_report_flattens_verdict() {
    let report = TextReport {
        verdict: score_text("URGENT!!!", &mut ScriptedRandom::constant(0.0)),
        forwarded: None,
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["verdict"], "Likely Fake");
    assert_eq!(json["confidence"], 85.0);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 2);
    assert!(json.get("forwarded").is_none());
}

#[test]
fn video_report_includes_source_and_forward_answer() {
    let report = VideoReport {
        source: "clip.mp4".to_string(),
        verdict: score_video(&mut ScriptedRandom::constant(0.5)),
        forwarded: Some(serde_json::json!({"ok": true})),
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"source\":\"clip.mp4\""));
    assert!(json.contains("\"frameAnalysis\""));
    assert!(json.contains("\"forwarded\":{\"ok\":true}"));
}

#[test]
fn select_result_rejected_has_no_preview() {
    let result = SelectResult {
        accepted: false,
        preview: None,
        message: Some("Please select a valid video file".to_string()),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"accepted\":false"));
    assert!(!json.contains("preview"));
}

#[test]
fn select_result_accepted_shows_preview() {
    let result = SelectResult {
        accepted: true,
        preview: Some(UploadPreview::for_file(&VideoFile::new("a.mp4", 1_048_576, "video/mp4"))),
        message: None,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["preview"]["file_name"], "a.mp4");
    assert_eq!(json["preview"]["size_label"], "Size: 1.00 MB");
}

#[test]
fn contact_result_serialization() {
    let result = ContactResult {
        delivered: true,
        status: "✅ Message sent successfully!".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"delivered\":true"));
}

#[test]
fn config_report_serialization() {
    let report = ConfigReport {
        path: "/tmp/config.toml".to_string(),
        config: Config::default(),
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["config"]["analysis"]["text_delay_ms"], 2000);
    assert_eq!(json["config"]["server"]["port"], 8787);
}

#[test]
fn operation_result_constructors() {
    assert!(OperationResult::success("done").success);
    let failure = OperationResult::failure("nope");
    assert!(!failure.success);
    assert_eq!(failure.message, "nope");
}
