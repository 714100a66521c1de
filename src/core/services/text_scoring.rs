//! Text scoring - the mock misinformation heuristic
//!
//! A handful of surface features feed a capped base score, and a random
//! addend of up to 15 points turns it into the final confidence.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{Details, TextLabel, TextVerdict};
use crate::core::ports::RandomSource;

/// Emotionally charged words, matched case-insensitively as whole words
pub const EMOTIONAL_WORDS: [&str; 9] = [
    "amazing",
    "terrible",
    "shocking",
    "unbelievable",
    "breaking",
    "urgent",
    "must",
    "never",
    "always",
];

/// Upper bound of the heuristic score before randomness
pub const BASE_SCORE_CAP: f64 = 85.0;

/// Width of the random addend, drawn from `[0, RANDOM_SPREAD)`
pub const RANDOM_SPREAD: f64 = 15.0;

/// Largest `f64` below 100; fused rounding at the very top of the range would
/// otherwise land exactly on 100.
const SCORE_CEILING: f64 = f64::from_bits(0x4058_FFFF_FFFF_FFFF);

static EMOTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i-u)\b(?:{})\b", EMOTIONAL_WORDS.join("|")))
        .expect("emotional word pattern is valid")
});

static SHOUTING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]{3,}").expect("shouting pattern is valid"));

/// Heuristic flags extracted from content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSignals {
    /// Contains a word from [`EMOTIONAL_WORDS`]
    pub emotional: bool,
    /// Contains three or more consecutive uppercase letters
    pub shouting: bool,
    /// Number of `!` characters
    pub exclamations: usize,
    /// Length in UTF-16 code units
    pub length: usize,
}

impl TextSignals {
    /// Extract the flags from content
    #[must_use]
    pub fn detect(content: &str) -> Self {
        Self {
            emotional: EMOTIONAL.is_match(content),
            shouting: SHOUTING.is_match(content),
            exclamations: content.chars().filter(|&c| c == '!').count(),
            length: content.encode_utf16().count(),
        }
    }

    /// Score before the random addend, capped at [`BASE_SCORE_CAP`]
    #[must_use]
    pub fn base_score(&self) -> f64 {
        let mut score = 0.0;
        if self.emotional {
            score += 30.0;
        }
        if self.shouting {
            score += 20.0;
        }
        if self.exclamations > 2 {
            score += 25.0;
        }
        if self.length < 100 {
            score += 15.0;
        }
        f64::min(score, BASE_SCORE_CAP)
    }
}

/// Score text or URL content
///
/// Draw order: the confidence addend, then one draw each for source
/// credibility, fact verification and bias detection.
pub fn score_text<R: RandomSource + ?Sized>(content: &str, rng: &mut R) -> TextVerdict {
    let signals = TextSignals::detect(content);
    let confidence = rng.unit().mul_add(RANDOM_SPREAD, signals.base_score()).min(SCORE_CEILING);

    let mut details = Details::new();
    details.push("Emotional Language", if signals.emotional { "High" } else { "Low" });
    details.push("Source Credibility", if rng.unit() > 0.5 { "Moderate" } else { "Low" });
    details.push("Fact Verification", if rng.unit() > 0.6 { "Partial" } else { "Failed" });
    details.push("Bias Detection", if rng.unit() > 0.4 { "Detected" } else { "Minimal" });

    log::debug!(
        "text signals: emotional={} shouting={} exclamations={} length={} -> {confidence:.1}",
        signals.emotional,
        signals.shouting,
        signals.exclamations,
        signals.length
    );

    TextVerdict {
        confidence,
        verdict: TextLabel::from_confidence(confidence),
        details,
        warnings: warnings_for(confidence),
    }
}

/// Warning lines for a confidence score
#[must_use]
pub fn warnings_for(confidence: f64) -> Vec<String> {
    if confidence > 70.0 {
        vec![
            "High emotional language detected".to_string(),
            "Unverified claims found".to_string(),
        ]
    } else if confidence > 40.0 {
        vec!["Some suspicious patterns detected".to_string()]
    } else {
        Vec::new()
    }
}
