//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::core::models::{TextVerdict, VideoFile, VideoVerdict};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for a text/URL analysis
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Pasted text
    #[serde(default)]
    pub text: String,
    /// Article URL, used when `text` is blank
    #[serde(default)]
    pub url: String,
    /// Seed for a reproducible verdict
    #[serde(default)]
    pub seed: Option<u64>,
    /// Also post the verdict to the workflow webhook
    #[serde(default)]
    pub forward: bool,
}

/// Request body for a video analysis
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeVideoRequest {
    /// Uploaded file metadata
    #[serde(default)]
    pub file: Option<VideoFile>,
    /// Video URL, used when no file is given
    #[serde(default)]
    pub url: String,
    /// Seed for a reproducible verdict
    #[serde(default)]
    pub seed: Option<u64>,
    /// Also post the verdict to the workflow webhook
    #[serde(default)]
    pub forward: bool,
}

/// Request body for the contact form
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    /// Sender name
    #[serde(default)]
    pub name: String,
    /// Sender email
    #[serde(default)]
    pub email: String,
    /// Message body
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// Status response data
#[derive(Debug, Serialize)]
pub struct StatusData {
    /// Crate version
    pub version: String,
    /// Whether a text analysis is running
    pub text_busy: bool,
    /// Whether a video analysis is running
    pub video_busy: bool,
    /// Configured webhooks
    pub webhooks: WebhookUrls,
}

/// Configured webhook endpoints
#[derive(Debug, Serialize)]
pub struct WebhookUrls {
    /// Workflow endpoint
    pub workflow: String,
    /// Contact endpoint
    pub contact: String,
}

/// Text analysis response data
#[derive(Debug, Serialize)]
pub struct TextAnalysisData {
    /// Verdict fields
    #[serde(flatten)]
    pub verdict: TextVerdict,
    /// Rendered result fragment
    pub html: String,
    /// Workflow webhook answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarded: Option<serde_json::Value>,
}

/// Video analysis response data
#[derive(Debug, Serialize)]
pub struct VideoAnalysisData {
    /// File name or URL that was analyzed
    pub source: String,
    /// Verdict fields
    #[serde(flatten)]
    pub verdict: VideoVerdict,
    /// Rendered result fragment
    pub html: String,
    /// Workflow webhook answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarded: Option<serde_json::Value>,
}

/// Contact response data
#[derive(Debug, Serialize)]
pub struct ContactData {
    /// Whether the webhook accepted the message
    pub delivered: bool,
    /// Status line the form would show
    pub status: String,
}

/// Workflow forward response data
#[derive(Debug, Serialize)]
pub struct WorkflowData {
    /// Parsed webhook answer
    pub response: serde_json::Value,
}
