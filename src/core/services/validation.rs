//! Input validation for the video checker
//!
//! Two file-type rules exist. Picking or dropping a file only requires a
//! `video/*` MIME type; the stricter allow-list applies when a file is
//! submitted for analysis. Both share the same size cap.

use std::path::Path;

use url::Url;

use crate::core::models::{AnalysisError, FileCheck, UploadPreview, VideoFile};

/// Upload size cap: 100 MiB
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// MIME types accepted by the strict check
pub const ALLOWED_VIDEO_TYPES: [&str; 4] =
    ["video/mp4", "video/avi", "video/quicktime", "video/x-msvideo"];

/// Check a picked or dropped file: any `video/*` type within the size cap
pub fn check_selected_file(file: &VideoFile, limit: u64) -> Result<(), AnalysisError> {
    if !file.mime.starts_with("video/") {
        return Err(AnalysisError::UnsupportedFile {
            mime: file.mime.clone(),
            check: FileCheck::MimePrefix,
        });
    }
    check_size(file, limit)
}

/// Check a file against the allow-list and the size cap
pub fn validate_video_file(file: &VideoFile, limit: u64) -> Result<(), AnalysisError> {
    if !ALLOWED_VIDEO_TYPES.contains(&file.mime.as_str()) {
        return Err(AnalysisError::UnsupportedFile {
            mime: file.mime.clone(),
            check: FileCheck::AllowList,
        });
    }
    check_size(file, limit)
}

const fn check_size(file: &VideoFile, limit: u64) -> Result<(), AnalysisError> {
    if file.size > limit {
        return Err(AnalysisError::FileTooLarge {
            size: file.size,
            limit,
        });
    }
    Ok(())
}

/// Accept a picked file and update the upload preview
///
/// The preview is only touched when the file passes [`check_selected_file`].
pub fn select_video_file(
    file: &VideoFile,
    limit: u64,
    preview: &mut Option<UploadPreview>,
) -> Result<(), AnalysisError> {
    check_selected_file(file, limit)?;
    *preview = Some(UploadPreview::for_file(file));
    log::info!("Video selected: {} ({} bytes)", file.name, file.size);
    Ok(())
}

/// Whether a string parses as an absolute URL
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

/// Best-effort MIME type from a file extension
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "avi" => "video/x-msvideo",
        "mov" | "qt" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
