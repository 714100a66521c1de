//! Webhook transport port
//!
//! Defines the one HTTP operation the forwarder needs.

use std::future::Future;

use crate::core::models::WebhookError;

/// Raw answer of a webhook endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl WebhookResponse {
    /// Whether the status is in the 2xx range
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport that POSTs JSON to a URL
///
/// Implementations report transport-level failures as
/// [`WebhookError::Network`] and otherwise hand back the status and body
/// untouched; classifying the status is the forwarder's job.
pub trait WebhookTransport: Send + Sync {
    /// POST `body` as `application/json` to `url`
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<WebhookResponse, WebhookError>> + Send;
}
