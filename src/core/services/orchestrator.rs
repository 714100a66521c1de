//! Analysis orchestrator
//!
//! Drives one analysis trigger end to end: validate input, claim the
//! in-flight slot, show the busy state, wait the simulated latency, score,
//! render, present. Failures collapse into one generic message and the
//! trigger is always handed back in its idle state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::core::models::{
    AnalysisError, AnalysisKind, TextInput, TextVerdict, VideoSource, VideoVerdict,
};
use crate::core::ports::{AnalysisSurface, RandomSource};
use crate::render;

use super::text_scoring::score_text;
use super::validation::is_valid_url;
use super::video_scoring::score_video;

/// Simulated backend latency per analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerSettings {
    /// Wait before scoring text
    pub text_delay: Duration,
    /// Wait before scoring video
    pub video_delay: Duration,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            text_delay: Duration::from_millis(2000),
            video_delay: Duration::from_millis(4000),
        }
    }
}

impl AnalyzerSettings {
    /// No simulated latency at all
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            text_delay: Duration::ZERO,
            video_delay: Duration::ZERO,
        }
    }
}

/// In-flight flag for one kind of analysis
#[derive(Debug, Default)]
pub struct InFlight(AtomicBool);

impl InFlight {
    /// Claim the slot, or `None` when an analysis is already running
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.0))
    }

    /// Whether the slot is currently claimed
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Releases its [`InFlight`] slot when dropped
#[derive(Debug)]
pub struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs analyses against a caller-provided surface and random source
#[derive(Debug, Default)]
pub struct Analyzer {
    settings: AnalyzerSettings,
    text: InFlight,
    video: InFlight,
}

impl Analyzer {
    /// Create an analyzer
    #[must_use]
    pub fn new(settings: AnalyzerSettings) -> Self {
        Self {
            settings,
            text: InFlight::default(),
            video: InFlight::default(),
        }
    }

    /// Latency settings in use
    #[must_use]
    pub const fn settings(&self) -> AnalyzerSettings {
        self.settings
    }

    /// Whether an analysis of `kind` is running
    #[must_use]
    pub fn is_busy(&self, kind: AnalysisKind) -> bool {
        self.slot(kind).is_active()
    }

    const fn slot(&self, kind: AnalysisKind) -> &InFlight {
        match kind {
            AnalysisKind::Text => &self.text,
            AnalysisKind::Video => &self.video,
        }
    }

    /// Analyze text or URL content
    pub async fn analyze_text<S, R>(
        &self,
        input: &TextInput,
        surface: &mut S,
        rng: &mut R,
    ) -> Result<TextVerdict, AnalysisError>
    where
        S: AnalysisSurface + ?Sized,
        R: RandomSource + ?Sized,
    {
        let kind = AnalysisKind::Text;
        let Some(content) = input.content() else {
            return Err(reject(AnalysisError::InputMissing { kind }, surface));
        };

        if input.text.trim().is_empty() && !is_valid_url(content) {
            log::warn!("Analyzing URL field that does not parse as a URL: {content}");
        }

        let delay = self.settings.text_delay;
        self.run(kind, delay, surface, || score_text(content, rng), render::text_fragment).await
    }

    /// Analyze a video file or URL
    pub async fn analyze_video<S, R>(
        &self,
        source: Option<&VideoSource>,
        surface: &mut S,
        rng: &mut R,
    ) -> Result<VideoVerdict, AnalysisError>
    where
        S: AnalysisSurface + ?Sized,
        R: RandomSource + ?Sized,
    {
        let kind = AnalysisKind::Video;
        let Some(source) = source else {
            return Err(reject(AnalysisError::InputMissing { kind }, surface));
        };
        log::info!("Analyzing video: {}", source.describe());

        let delay = self.settings.video_delay;
        self.run(kind, delay, surface, || score_video(rng), render::video_fragment).await
    }

    async fn run<S, V>(
        &self,
        kind: AnalysisKind,
        delay: Duration,
        surface: &mut S,
        score: impl FnOnce() -> V,
        render: fn(&V) -> String,
    ) -> Result<V, AnalysisError>
    where
        S: AnalysisSurface + ?Sized,
    {
        let Some(_slot) = self.slot(kind).try_acquire() else {
            log::warn!("Rejected overlapping {kind} analysis");
            return Err(reject(AnalysisError::Busy { kind }, surface));
        };

        surface.set_busy(kind.busy_label());
        let outcome = execute(kind, delay, surface, score, render).await;
        if let Err(err) = &outcome {
            log::error!("{kind} analysis failed: {err:?}");
            surface.show_error(&err.to_string());
        }
        surface.set_idle(kind.idle_label());
        outcome
    }
}

async fn execute<S, V>(
    kind: AnalysisKind,
    delay: Duration,
    surface: &mut S,
    score: impl FnOnce() -> V,
    render: fn(&V) -> String,
) -> Result<V, AnalysisError>
where
    S: AnalysisSurface + ?Sized,
{
    log::debug!("Analysis progress: 0%");
    tokio::time::sleep(delay).await;
    log::debug!("Analysis progress: 50%");

    let verdict = score();
    let fragment = render(&verdict);
    surface
        .present(&fragment)
        .map_err(|source| AnalysisError::AnalysisFailure { kind, source })?;
    log::debug!("Analysis progress: 100%");

    Ok(verdict)
}

fn reject<S: AnalysisSurface + ?Sized>(err: AnalysisError, surface: &mut S) -> AnalysisError {
    surface.show_error(&err.to_string());
    err
}
