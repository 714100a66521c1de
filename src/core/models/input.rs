//! Analysis inputs
//!
//! Everything a user can hand to one of the two analyzers. Inputs are
//! transient: they live for one analysis request and are never stored.

use serde::{Deserialize, Serialize};

/// Which analyzer a request is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    /// Text or URL misinformation checker
    Text,
    /// Video deepfake checker
    Video,
}

impl AnalysisKind {
    /// Message shown when neither input field is filled in
    #[must_use]
    pub const fn missing_input_message(self) -> &'static str {
        match self {
            Self::Text => "Please enter text or URL for analysis",
            Self::Video => "Please select a video file or enter a URL",
        }
    }

    /// Generic message shown when an analysis fails midway
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Text => "Analysis failed. Please try again.",
            Self::Video => "Video analysis failed. Please try again.",
        }
    }

    /// Trigger label while the analysis runs
    #[must_use]
    pub const fn busy_label(self) -> &'static str {
        match self {
            Self::Text => "Analyzing...",
            Self::Video => "Analyzing Video...",
        }
    }

    /// Trigger label when idle
    #[must_use]
    pub const fn idle_label(self) -> &'static str {
        match self {
            Self::Text => "Analyze Content",
            Self::Video => "Analyze Video",
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Text and URL fields of the misinformation checker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    /// Free text pasted by the user
    #[serde(default)]
    pub text: String,
    /// Article URL
    #[serde(default)]
    pub url: String,
}

impl TextInput {
    /// Create an input from both fields
    #[must_use]
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Content to score: the trimmed text, falling back to the trimmed URL
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        let text = self.text.trim();
        if !text.is_empty() {
            return Some(text);
        }
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// Metadata of a video file picked or dropped by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFile {
    /// File name as shown to the user
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type reported for the file
    pub mime: String,
}

impl VideoFile {
    /// Create file metadata
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Size in mebibytes
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

/// Video handed to the deepfake checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// A selected local file
    File(VideoFile),
    /// A remote video URL
    Url(String),
}

impl VideoSource {
    /// Pick the selected file when there is one, else a non-empty trimmed URL
    #[must_use]
    pub fn from_parts(file: Option<VideoFile>, url: &str) -> Option<Self> {
        if let Some(file) = file {
            return Some(Self::File(file));
        }
        let url = url.trim();
        (!url.is_empty()).then(|| Self::Url(url.to_string()))
    }

    /// Short description for logs
    #[must_use]
    pub fn describe(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Url(url) => url,
        }
    }
}

/// What the upload area shows once a file has been accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPreview {
    /// Selected file name
    pub file_name: String,
    /// Size line, e.g. "Size: 12.34 MB"
    pub size_label: String,
}

impl UploadPreview {
    /// Build the preview for an accepted file
    #[must_use]
    pub fn for_file(file: &VideoFile) -> Self {
        Self {
            file_name: file.name.clone(),
            size_label: format!("Size: {:.2} MB", file.size_mb()),
        }
    }
}
