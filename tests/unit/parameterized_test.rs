//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use factlens::core::models::{ScoreTier, TextLabel, TextVerdict, VideoLabel};
use factlens::core::services::{TextSignals, warnings_for};
use test_case::test_case;

// =============================================================================
// Threshold Tables
// =============================================================================

#[test_case(70.1, TextLabel::LikelyFake ; "just above 70 is likely fake")]
#[test_case(70.0, TextLabel::Suspicious ; "exactly 70 is suspicious")]
#[test_case(40.1, TextLabel::Suspicious ; "just above 40 is suspicious")]
#[test_case(40.0, TextLabel::LikelyAuthentic ; "exactly 40 is likely authentic")]
#[test_case(0.0, TextLabel::LikelyAuthentic ; "zero is likely authentic")]
fn test_text_label(confidence: f64, expected: TextLabel) {
    assert_eq!(TextLabel::from_confidence(confidence), expected);
}

#[test_case(39.9, VideoLabel::LikelyDeepfake ; "below 40 is deepfake")]
#[test_case(40.0, VideoLabel::Inconclusive ; "exactly 40 is inconclusive")]
#[test_case(80.0, VideoLabel::Inconclusive ; "exactly 80 is inconclusive")]
#[test_case(80.1, VideoLabel::Authentic ; "above 80 is authentic")]
fn test_video_label(authenticity: f64, expected: VideoLabel) {
    assert_eq!(VideoLabel::from_authenticity(authenticity), expected);
}

#[test_case(71.0, 2 ; "high risk has two warnings")]
#[test_case(55.0, 1 ; "medium risk has one warning")]
#[test_case(40.0, 0 ; "low risk has none")]
fn test_warning_count(confidence: f64, expected: usize) {
    assert_eq!(warnings_for(confidence).len(), expected);
}

#[test_case(85.0, ScoreTier::Low ; "high risk renders low tier")]
#[test_case(50.0, ScoreTier::Medium ; "medium risk renders medium tier")]
#[test_case(10.0, ScoreTier::High ; "low risk renders high tier")]
fn test_text_tier(confidence: f64, expected: ScoreTier) {
    let verdict = TextVerdict {
        confidence,
        verdict: TextLabel::from_confidence(confidence),
        details: Default::default(),
        warnings: Vec::new(),
    };
    assert_eq!(verdict.tier(), expected);
}

// =============================================================================
// Heuristic Base Scores
// =============================================================================

#[test_case("BREAKING!!! huge news", 85.0 ; "everything fires and is capped")]
#[test_case("This is amazing", 45.0 ; "emotional short text")]
#[test_case("NASA says hi", 35.0 ; "shouting short text")]
#[test_case("wow!!!", 40.0 ; "exclamations short text")]
#[test_case("quiet", 15.0 ; "short text only")]
fn test_base_score(content: &str, expected: f64) {
    let base = TextSignals::detect(content).base_score();
    assert!((base - expected).abs() < f64::EPSILON, "{content}: {base}");
}
