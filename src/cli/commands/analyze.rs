//! Analysis commands - text/URL and video checks

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::cli::app::AnalysisOptions;
use factlens::adapters::TerminalSurface;
use factlens::config::Config;
use factlens::core::models::{AnalysisError, AnalysisKind, TextInput, VideoFile, VideoSource};
use factlens::core::ports::Draws;
use factlens::core::services::{self, Analyzer};
use factlens::output::{OperationResult, OutputMode, TextReport, VideoReport};

use super::{runtime, transport};

/// Run the text/URL misinformation check
pub fn analyze_text(
    text: Option<&str>,
    url: Option<&str>,
    options: AnalysisOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let analyzer = Analyzer::new(config.analysis.analyzer_settings());
    let input = TextInput::new(text.unwrap_or_default(), url.unwrap_or_default());
    let mut surface = TerminalSurface::new(options.html);
    let mut rng = Draws::from_seed(options.seed);

    let rt = runtime()?;
    let verdict = match rt.block_on(analyzer.analyze_text(&input, &mut surface, &mut rng)) {
        Ok(verdict) => verdict,
        Err(err) => fail(&err, mode),
    };

    let forwarded = forward_if_requested(&rt, &config, options, AnalysisKind::Text, &verdict)?;
    if !options.html {
        TextReport { verdict, forwarded }.render(mode);
    }
    Ok(())
}

/// Run the video deepfake check
///
/// A file must pass the strict type allow-list and the size cap first.
pub fn analyze_video(
    file: Option<&Path>,
    url: Option<&str>,
    mime: Option<&str>,
    options: AnalysisOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load()?;

    let file = file.map(|path| describe_file(path, mime)).transpose()?;
    let limit = config.analysis.max_upload_bytes;
    if let Some(Err(err)) = file.as_ref().map(|f| services::validate_video_file(f, limit)) {
        if mode == OutputMode::Human {
            eprintln!("Error: {err}");
        }
        fail(&err, mode);
    }

    let source = VideoSource::from_parts(file, url.unwrap_or_default());
    let analyzer = Analyzer::new(config.analysis.analyzer_settings());
    let mut surface = TerminalSurface::new(options.html);
    let mut rng = Draws::from_seed(options.seed);

    let rt = runtime()?;
    let verdict =
        match rt.block_on(analyzer.analyze_video(source.as_ref(), &mut surface, &mut rng)) {
            Ok(verdict) => verdict,
            Err(err) => fail(&err, mode),
        };

    let forwarded = forward_if_requested(&rt, &config, options, AnalysisKind::Video, &verdict)?;
    if !options.html {
        let source = source.as_ref().map(|s| s.describe().to_string()).unwrap_or_default();
        VideoReport {
            source,
            verdict,
            forwarded,
        }
        .render(mode);
    }
    Ok(())
}

/// Build file metadata from a path on disk
pub(super) fn describe_file(path: &Path, mime: Option<&str>) -> anyhow::Result<VideoFile> {
    let size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?
        .len();
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mime = mime.unwrap_or_else(|| services::mime_for_path(path));
    Ok(VideoFile::new(name, size, mime))
}

fn forward_if_requested<V: Serialize + Sync>(
    rt: &tokio::runtime::Runtime,
    config: &Config,
    options: AnalysisOptions,
    kind: AnalysisKind,
    verdict: &V,
) -> anyhow::Result<Option<serde_json::Value>> {
    if !options.forward {
        return Ok(None);
    }
    let transport = transport(config)?;
    let webhooks = &config.webhooks;
    let answer = rt.block_on(services::forward_result(
        &transport,
        &webhooks.workflow,
        kind,
        verdict,
        webhooks.retry_policy(),
    ))?;
    Ok(Some(answer))
}

/// Report a failed analysis and exit
///
/// In human mode the surface has already printed the message.
fn fail(err: &AnalysisError, mode: OutputMode) -> ! {
    if mode == OutputMode::Json {
        OperationResult::failure(err.to_string()).render(mode);
    }
    std::process::exit(1);
}
