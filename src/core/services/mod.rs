//! Business logic services
//!
//! Scoring and validation are pure: they operate on data passed in and
//! return results. The orchestrator and forwarder are the only async
//! pieces, and they reach the outside world through port traits.
//!
//! - [`text_scoring`] - Mock misinformation heuristic
//! - [`video_scoring`] - Mock deepfake heuristic
//! - [`validation`] - File type and size checks, URL parsing
//! - [`orchestrator`] - Busy state, simulated latency, result hand-off
//! - [`forwarder`] - Workflow and contact webhook calls

pub mod forwarder;
pub mod orchestrator;
pub mod text_scoring;
pub mod validation;
pub mod video_scoring;

pub use forwarder::{
    CONTACT_NETWORK_ERROR, CONTACT_REJECTED, CONTACT_SENDING, CONTACT_SENT, RetryPolicy,
    WorkflowPayload, forward_result, forward_workflow, submit_contact,
};
pub use orchestrator::{Analyzer, AnalyzerSettings, InFlight, InFlightGuard};
pub use text_scoring::{TextSignals, score_text, warnings_for};
pub use validation::{
    ALLOWED_VIDEO_TYPES, MAX_UPLOAD_BYTES, check_selected_file, is_valid_url, mime_for_path,
    select_video_file, validate_video_file,
};
pub use video_scoring::score_video;
