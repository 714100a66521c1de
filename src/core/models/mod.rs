//! Domain models for factlens
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TextInput`] / [`VideoSource`] - What the user hands to an analyzer
//! - [`TextVerdict`] / [`VideoVerdict`] - What an analyzer hands back
//! - [`ContactMessage`] - Contact form submission
//! - [`AnalysisError`] / [`WebhookError`] - Failure taxonomy

mod contact;
mod error;
mod input;
mod verdict;

pub use contact::{ContactMessage, StatusLine};
pub use error::{AnalysisError, FileCheck, WebhookError};
pub use input::{AnalysisKind, TextInput, UploadPreview, VideoFile, VideoSource};
pub use verdict::{
    DetailSignal, Details, FrameAnalysis, ScoreTier, TextLabel, TextVerdict, VideoLabel,
    VideoVerdict,
};
