//! Select command - accept a video file and show its preview

use std::path::Path;

use factlens::config::Config;
use factlens::core::services;
use factlens::output::{OutputMode, SelectResult};

use super::analyze::describe_file;

/// Select a video file the way the upload area does
pub fn select(path: &Path, mime: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load()?;
    let file = describe_file(path, mime)?;

    let limit = config.analysis.max_upload_bytes;
    let mut preview = None;
    let result = match services::select_video_file(&file, limit, &mut preview) {
        Ok(()) => SelectResult {
            accepted: true,
            preview,
            message: None,
        },
        Err(err) => SelectResult {
            accepted: false,
            preview: None,
            message: Some(err.to_string()),
        },
    };

    result.render(mode);
    if !result.accepted {
        std::process::exit(1);
    }
    Ok(())
}
