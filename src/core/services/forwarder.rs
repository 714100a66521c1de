//! Webhook forwarder
//!
//! Posts JSON to a fixed webhook URL. The workflow path returns the parsed
//! response or the error; the contact path folds every outcome into a
//! status line and only clears the form on success.
//!
//! One attempt is the default. A [`RetryPolicy`] with `max_retries > 0`
//! adds bounded exponential backoff for network errors and 5xx answers.

use std::time::Duration;

use serde::Serialize;

use crate::core::models::{AnalysisKind, ContactMessage, StatusLine, WebhookError};
use crate::core::ports::WebhookTransport;

/// Status text while a contact submission is in flight
pub const CONTACT_SENDING: &str = "Sending...";
/// Status text after a successful contact submission
pub const CONTACT_SENT: &str = "✅ Message sent successfully!";
/// Status text after the endpoint rejected a contact submission
pub const CONTACT_REJECTED: &str = "❌ Failed to send. Try again later.";
/// Status text after a transport failure
pub const CONTACT_NETWORK_ERROR: &str = "❌ Network error. Check your connection.";

/// Bounded retry with exponential backoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay_ms: u64,
    /// Upper bound for any single delay
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::single_attempt()
    }
}

impl RetryPolicy {
    /// Exactly one attempt
    #[must_use]
    pub const fn single_attempt() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Backoff before retry number `retry` (1-based)
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1_u64.checked_shl(retry.saturating_sub(1)).unwrap_or(u64::MAX);
        let delay = self.base_delay_ms.saturating_mul(factor).min(self.max_delay_ms);
        Duration::from_millis(delay)
    }
}

/// Envelope used when an analysis result is forwarded to the workflow webhook
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowPayload<T: Serialize> {
    /// Which analyzer produced the result
    pub workflow: AnalysisKind,
    /// RFC 3339 submission time
    pub submitted_at: String,
    /// The verdict itself
    pub result: T,
}

impl<T: Serialize> WorkflowPayload<T> {
    /// Wrap a result, stamped with the current time
    #[must_use]
    pub fn new(workflow: AnalysisKind, result: T) -> Self {
        Self {
            workflow,
            submitted_at: chrono::Utc::now().to_rfc3339(),
            result,
        }
    }
}

/// Send one payload, classifying the answer
async fn post_once<T: WebhookTransport + ?Sized>(
    transport: &T,
    url: &str,
    data: &serde_json::Value,
) -> Result<String, WebhookError> {
    let response = transport.post_json(url, data).await?;
    if !response.is_success() {
        return Err(WebhookError::Http {
            status: response.status,
        });
    }
    Ok(response.body)
}

async fn post_with_policy<T: WebhookTransport + ?Sized>(
    transport: &T,
    url: &str,
    data: &serde_json::Value,
    policy: RetryPolicy,
) -> Result<String, WebhookError> {
    let mut retry = 0;
    loop {
        match post_once(transport, url, data).await {
            Err(err) if err.is_retryable() && retry < policy.max_retries => {
                retry += 1;
                let delay = policy.delay_for(retry);
                log::warn!("Webhook attempt failed ({err}); retry {retry} in {delay:?}");
                tokio::time::sleep(delay).await;
            },
            outcome => return outcome,
        }
    }
}

/// Forward a payload to the workflow webhook and return its JSON answer
///
/// Non-2xx answers become [`WebhookError::Http`], transport failures
/// [`WebhookError::Network`], unparsable bodies [`WebhookError::Decode`].
/// Errors are logged before being returned.
pub async fn forward_workflow<T: WebhookTransport + ?Sized>(
    transport: &T,
    url: &str,
    data: &serde_json::Value,
    policy: RetryPolicy,
) -> Result<serde_json::Value, WebhookError> {
    let outcome = post_with_policy(transport, url, data, policy).await.and_then(|body| {
        serde_json::from_str(&body).map_err(|e| WebhookError::Decode(e.to_string()))
    });

    if let Err(err) = &outcome {
        log::error!("Workflow error: {err}");
    }
    outcome
}

/// Wrap an analysis result in a [`WorkflowPayload`] and forward it
pub async fn forward_result<T, V>(
    transport: &T,
    url: &str,
    kind: AnalysisKind,
    result: &V,
    policy: RetryPolicy,
) -> Result<serde_json::Value, WebhookError>
where
    T: WebhookTransport + ?Sized,
    V: Serialize + Sync,
{
    let payload = serde_json::to_value(WorkflowPayload::new(kind, result))
        .map_err(|e| WebhookError::Decode(e.to_string()))?;
    log::info!("Forwarding {kind} result to workflow");
    forward_workflow(transport, url, &payload, policy).await
}

/// Submit the contact form
///
/// Sets `status` to [`CONTACT_SENDING`] first, then to the outcome text.
/// The form is cleared only on success. Never fails; the outcome is also
/// returned as a flag for callers that need it.
pub async fn submit_contact<T: WebhookTransport + ?Sized>(
    transport: &T,
    url: &str,
    form: &mut ContactMessage,
    status: &mut StatusLine,
    policy: RetryPolicy,
) -> bool {
    status.set(CONTACT_SENDING);

    let body = match serde_json::to_value(&*form) {
        Ok(body) => body,
        Err(e) => {
            log::error!("Contact form could not be serialized: {e}");
            status.set(CONTACT_REJECTED);
            return false;
        },
    };

    match post_with_policy(transport, url, &body, policy).await {
        Ok(_) => {
            log::info!("Contact message from {} delivered", form.email);
            status.set(CONTACT_SENT);
            form.clear();
            true
        },
        Err(WebhookError::Network(reason)) => {
            log::error!("Contact submission network failure: {reason}");
            status.set(CONTACT_NETWORK_ERROR);
            false
        },
        Err(err) => {
            log::error!("Contact submission rejected: {err}");
            status.set(CONTACT_REJECTED);
            false
        },
    }
}
