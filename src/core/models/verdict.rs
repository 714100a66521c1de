//! Analyzer verdicts
//!
//! A verdict pairs a synthetic percentage with a categorical label. Labels
//! are monotonic in the score; detail signals keep their insertion order so
//! every renderer lists them the same way.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One named sub-result shown next to a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSignal {
    /// Signal name, e.g. "Facial Consistency"
    pub label: &'static str,
    /// Signal value, e.g. "Consistent"
    pub value: &'static str,
}

/// Ordered label/value signals, serialized as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(Vec<DetailSignal>);

impl Details {
    /// Create an empty set of signals
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a signal
    pub fn push(&mut self, label: &'static str, value: &'static str) {
        self.0.push(DetailSignal { label, value });
    }

    /// Look up a signal value by label
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&'static str> {
        self.0.iter().find(|s| s.label == label).map(|s| s.value)
    }

    /// Iterate signals in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, DetailSignal> {
        self.0.iter()
    }

    /// Number of signals
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no signals
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Details {
    type Item = &'a DetailSignal;
    type IntoIter = std::slice::Iter<'a, DetailSignal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for signal in &self.0 {
            map.serialize_entry(signal.label, signal.value)?;
        }
        map.end()
    }
}

/// Three-tier badge classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// Low trust (high risk or low authenticity)
    Low,
    /// Middle band
    Medium,
    /// High trust
    High,
}

impl ScoreTier {
    /// CSS class used by the result badge
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Low => "score-low",
            Self::Medium => "score-medium",
            Self::High => "score-high",
        }
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// Verdict label of the misinformation checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextLabel {
    /// Confidence above 70
    #[serde(rename = "Likely Fake")]
    LikelyFake,
    /// Confidence above 40
    #[serde(rename = "Suspicious")]
    Suspicious,
    /// Everything else
    #[serde(rename = "Likely Authentic")]
    LikelyAuthentic,
}

impl TextLabel {
    /// Classify a confidence score
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 70.0 {
            Self::LikelyFake
        } else if confidence > 40.0 {
            Self::Suspicious
        } else {
            Self::LikelyAuthentic
        }
    }

    /// Display text of the label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LikelyFake => "Likely Fake",
            Self::Suspicious => "Suspicious",
            Self::LikelyAuthentic => "Likely Authentic",
        }
    }
}

impl std::fmt::Display for TextLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the text/URL misinformation check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextVerdict {
    /// Fake-news risk in [0, 100)
    pub confidence: f64,
    /// Label derived from `confidence`
    pub verdict: TextLabel,
    /// Named signals in display order
    pub details: Details,
    /// Warning lines, most severe first
    pub warnings: Vec<String>,
}

impl TextVerdict {
    /// Badge tier: high risk renders as the low tier
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        if self.confidence > 70.0 {
            ScoreTier::Low
        } else if self.confidence > 40.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::High
        }
    }
}

// =============================================================================
// VIDEO
// =============================================================================

/// Verdict label of the deepfake checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VideoLabel {
    /// Authenticity below 40
    #[serde(rename = "Likely Deepfake")]
    LikelyDeepfake,
    /// Between the two thresholds
    #[serde(rename = "Inconclusive")]
    Inconclusive,
    /// Authenticity above 80
    #[serde(rename = "Authentic")]
    Authentic,
}

impl VideoLabel {
    /// Classify an authenticity score
    #[must_use]
    pub fn from_authenticity(authenticity: f64) -> Self {
        if authenticity < 40.0 {
            Self::LikelyDeepfake
        } else if authenticity > 80.0 {
            Self::Authentic
        } else {
            Self::Inconclusive
        }
    }

    /// Display text of the label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LikelyDeepfake => "Likely Deepfake",
            Self::Inconclusive => "Inconclusive",
            Self::Authentic => "Authentic",
        }
    }
}

impl std::fmt::Display for VideoLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fabricated per-frame statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAnalysis {
    /// Frames "inspected", in [500, 1500)
    pub total_frames: u32,
    /// Frames flagged, in [0, 100)
    pub suspicious_frames: u32,
    /// Duration text such as "23.4s"
    pub processing_time: String,
}

/// Result of the video deepfake check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoVerdict {
    /// Authenticity in [0, 100)
    pub authenticity: f64,
    /// Label derived from `authenticity`
    pub verdict: VideoLabel,
    /// Named signals in display order
    pub details: Details,
    /// Frame statistics block
    pub frame_analysis: FrameAnalysis,
}

impl VideoVerdict {
    /// Whether the verdict flags the video as a deepfake
    #[must_use]
    pub fn is_deepfake(&self) -> bool {
        self.verdict == VideoLabel::LikelyDeepfake
    }

    /// Badge tier for the authenticity score
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        if self.authenticity < 40.0 {
            ScoreTier::Low
        } else if self.authenticity < 80.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::High
        }
    }
}
