//! HTTP webhook adapter
//!
//! Implements `WebhookTransport` with a shared `reqwest::Client`.

use std::time::Duration;

use crate::core::models::WebhookError;
use crate::core::ports::{WebhookResponse, WebhookTransport};

/// Webhook transport over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport
    ///
    /// With `timeout` unset the client keeps reqwest's defaults, which put no
    /// overall limit on a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Option<Duration>) -> Result<Self, WebhookError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("factlens/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| WebhookError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

/// Body text, or empty when it could not be read
///
/// The status has already arrived, so a 2xx still counts as delivered.
fn settle_body<E: std::fmt::Display>(
    url: &str,
    status: u16,
    body: Result<String, E>,
) -> String {
    body.unwrap_or_else(|e| {
        log::warn!("POST {url} -> {status}, body unreadable: {e}");
        String::new()
    })
}

impl WebhookTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<WebhookResponse, WebhookError> {
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = settle_body(url, status, response.text().await);
        log::debug!("POST {url} -> {status}");

        Ok(WebhookResponse { status, body })
    }
}
