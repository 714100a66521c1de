//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.
//!
//! The server loop is synchronous, so each handler drives its async work to
//! completion on the runtime owned by [`ApiContext`].

use tokio::runtime::Runtime;

use crate::adapters::{CollectingSurface, HttpTransport};
use crate::config::Config;
use crate::core::models::{AnalysisKind, ContactMessage, StatusLine, TextInput, VideoSource};
use crate::core::ports::{Draws, WebhookTransport};
use crate::core::services::{self, Analyzer};
use crate::render;

use super::error::ApiError;
use super::types::{
    AnalyzeTextRequest, AnalyzeVideoRequest, ContactData, ContactRequest, StatusData,
    TextAnalysisData, VideoAnalysisData, WebhookUrls, WorkflowData,
};

/// Everything the handlers share across requests
#[derive(Debug)]
pub struct ApiContext<T: WebhookTransport = HttpTransport> {
    runtime: Runtime,
    analyzer: Analyzer,
    transport: T,
    config: Config,
}

impl ApiContext<HttpTransport> {
    /// Build a context that reaches the configured webhooks over HTTP
    pub fn from_config(config: Config) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config.webhooks.timeout())?;
        Self::new(config, transport)
    }
}

impl<T: WebhookTransport> ApiContext<T> {
    /// Build a context around an explicit transport
    pub fn new(config: Config, transport: T) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::internal(format!("Failed to start runtime: {e}")))?;
        Ok(Self {
            runtime,
            analyzer: Analyzer::new(config.analysis.analyzer_settings()),
            transport,
            config,
        })
    }

    /// Config in effect
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    async fn maybe_forward<V: serde::Serialize + Sync>(
        &self,
        forward: bool,
        kind: AnalysisKind,
        verdict: &V,
    ) -> Result<Option<serde_json::Value>, ApiError> {
        if !forward {
            return Ok(None);
        }
        let webhooks = &self.config.webhooks;
        let answer = services::forward_result(
            &self.transport,
            &webhooks.workflow,
            kind,
            verdict,
            webhooks.retry_policy(),
        )
        .await?;
        Ok(Some(answer))
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Get overall status
pub fn get_status<T: WebhookTransport>(ctx: &ApiContext<T>) -> Result<StatusData, ApiError> {
    Ok(StatusData {
        version: crate::VERSION.to_string(),
        text_busy: ctx.analyzer.is_busy(AnalysisKind::Text),
        video_busy: ctx.analyzer.is_busy(AnalysisKind::Video),
        webhooks: WebhookUrls {
            workflow: ctx.config.webhooks.workflow.clone(),
            contact: ctx.config.webhooks.contact.clone(),
        },
    })
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Run the text/URL misinformation check
pub fn analyze_text<T: WebhookTransport>(
    ctx: &ApiContext<T>,
    req: &AnalyzeTextRequest,
) -> Result<TextAnalysisData, ApiError> {
    let input = TextInput::new(req.text.as_str(), req.url.as_str());
    let mut surface = CollectingSurface::default();
    let mut rng = Draws::from_seed(req.seed);

    ctx.runtime.block_on(async {
        let verdict = ctx.analyzer.analyze_text(&input, &mut surface, &mut rng).await?;
        let forwarded = ctx.maybe_forward(req.forward, AnalysisKind::Text, &verdict).await?;
        let html = surface.fragment.take().unwrap_or_else(|| render::text_fragment(&verdict));
        Ok::<_, ApiError>(TextAnalysisData {
            verdict,
            html,
            forwarded,
        })
    })
}

/// Run the video deepfake check
///
/// An uploaded file must pass the strict type allow-list and the size cap
/// before the analysis starts.
pub fn analyze_video<T: WebhookTransport>(
    ctx: &ApiContext<T>,
    req: &AnalyzeVideoRequest,
) -> Result<VideoAnalysisData, ApiError> {
    if let Some(file) = &req.file {
        services::validate_video_file(file, ctx.config.analysis.max_upload_bytes)?;
    }

    let source = VideoSource::from_parts(req.file.clone(), &req.url);
    let mut surface = CollectingSurface::default();
    let mut rng = Draws::from_seed(req.seed);

    ctx.runtime.block_on(async {
        let verdict = ctx.analyzer.analyze_video(source.as_ref(), &mut surface, &mut rng).await?;
        let forwarded = ctx.maybe_forward(req.forward, AnalysisKind::Video, &verdict).await?;
        let html = surface.fragment.take().unwrap_or_else(|| render::video_fragment(&verdict));
        Ok::<_, ApiError>(VideoAnalysisData {
            source: source.as_ref().map(|s| s.describe().to_string()).unwrap_or_default(),
            verdict,
            html,
            forwarded,
        })
    })
}

// =============================================================================
// WEBHOOKS
// =============================================================================

/// Forward a contact message
///
/// Delivery failures are reported in the data, not as an error.
pub fn submit_contact<T: WebhookTransport>(
    ctx: &ApiContext<T>,
    req: &ContactRequest,
) -> Result<ContactData, ApiError> {
    let mut form = ContactMessage::new(req.name.as_str(), req.email.as_str(), req.message.as_str());
    let mut status = StatusLine::default();
    let webhooks = &ctx.config.webhooks;

    let delivered = ctx.runtime.block_on(services::submit_contact(
        &ctx.transport,
        &webhooks.contact,
        &mut form,
        &mut status,
        webhooks.retry_policy(),
    ));

    Ok(ContactData {
        delivered,
        status: status.as_str().to_string(),
    })
}

/// Forward an arbitrary JSON payload to the workflow webhook
pub fn forward_workflow<T: WebhookTransport>(
    ctx: &ApiContext<T>,
    payload: &serde_json::Value,
) -> Result<WorkflowData, ApiError> {
    let webhooks = &ctx.config.webhooks;
    let response = ctx.runtime.block_on(services::forward_workflow(
        &ctx.transport,
        &webhooks.workflow,
        payload,
        webhooks.retry_policy(),
    ))?;
    Ok(WorkflowData { response })
}
