//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    ApiContext, analyze_text, analyze_video, forward_workflow, get_status, submit_contact,
};
pub use types::{
    AnalyzeTextRequest, AnalyzeVideoRequest, ApiResponse, ContactData, ContactRequest,
    StatusData, TextAnalysisData, VideoAnalysisData, WebhookUrls, WorkflowData,
};
