//! Failure taxonomy for analyses and webhook calls
//!
//! Every error here is recovered at the boundary of the operation that
//! raised it. The `Display` text of [`AnalysisError`] is the user-facing
//! message.

use thiserror::Error;

use super::input::AnalysisKind;

/// Which file-type rule rejected a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCheck {
    /// Any `video/*` MIME type (file picker and drag-and-drop)
    MimePrefix,
    /// Only the supported container formats
    AllowList,
}

impl FileCheck {
    /// User-facing rejection message for this rule
    #[must_use]
    pub const fn rejection_message(self) -> &'static str {
        match self {
            Self::MimePrefix => "Please select a valid video file",
            Self::AllowList => "Unsupported file format. Please use MP4, AVI, or MOV files.",
        }
    }
}

/// Errors raised while capturing input or running an analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Neither input field was filled in
    #[error("{}", .kind.missing_input_message())]
    InputMissing {
        /// Analyzer that was triggered
        kind: AnalysisKind,
    },

    /// File type is not an accepted video type
    #[error("{}", .check.rejection_message())]
    UnsupportedFile {
        /// MIME type that was rejected
        mime: String,
        /// Rule that rejected it
        check: FileCheck,
    },

    /// File exceeds the upload size cap
    #[error("File size must be less than {}MB", .limit / (1024 * 1024))]
    FileTooLarge {
        /// Actual size in bytes
        size: u64,
        /// Cap in bytes
        limit: u64,
    },

    /// Something broke between entering the busy state and presenting the result
    #[error("{}", .kind.failure_message())]
    AnalysisFailure {
        /// Analyzer that failed
        kind: AnalysisKind,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Another analysis of the same kind is still running
    #[error("A {kind} analysis is already in progress")]
    Busy {
        /// Analyzer that is busy
        kind: AnalysisKind,
    },
}

/// Errors raised by webhook calls
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("workflow execution failed with HTTP status {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// The response body was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl WebhookError {
    /// Whether a bounded retry policy may try again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { status: 500..=599 })
    }
}
