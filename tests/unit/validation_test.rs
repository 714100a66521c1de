//! Tests for file and URL validation

use std::path::Path;

use factlens::core::models::{AnalysisError, FileCheck, UploadPreview, VideoFile};
use factlens::core::services::{
    MAX_UPLOAD_BYTES, check_selected_file, is_valid_url, mime_for_path, select_video_file,
    validate_video_file,
};

const MIB: u64 = 1024 * 1024;

#[test]
fn test_png_selection_leaves_preview_untouched() {
    let file = VideoFile::new("photo.png", 2 * MIB, "image/png");
    let mut preview = None;

    let err = select_video_file(&file, MAX_UPLOAD_BYTES, &mut preview).unwrap_err();

    assert_eq!(err.to_string(), "Please select a valid video file");
    assert!(preview.is_none());
}

#[test]
fn test_oversized_selection_is_rejected() {
    let file = VideoFile::new("movie.mp4", 150 * MIB, "video/mp4");
    let previous = UploadPreview::for_file(&VideoFile::new("old.mp4", MIB, "video/mp4"));
    let mut preview = Some(previous.clone());

    let err = select_video_file(&file, MAX_UPLOAD_BYTES, &mut preview).unwrap_err();

    assert!(matches!(err, AnalysisError::FileTooLarge { size, limit }
        if size == 150 * MIB && limit == MAX_UPLOAD_BYTES));
    assert_eq!(err.to_string(), "File size must be less than 100MB");
    assert_eq!(preview, Some(previous));
}

#[test]
fn test_accepted_selection_shows_size_in_mb() {
    let file = VideoFile::new("clip.webm", 12_939_428, "video/webm");
    let mut preview = None;

    select_video_file(&file, MAX_UPLOAD_BYTES, &mut preview).unwrap();

    let preview = preview.unwrap();
    assert_eq!(preview.file_name, "clip.webm");
    assert_eq!(preview.size_label, "Size: 12.34 MB");
}

#[test]
fn test_size_exactly_at_cap_is_accepted() {
    let file = VideoFile::new("edge.mp4", MAX_UPLOAD_BYTES, "video/mp4");
    assert!(validate_video_file(&file, MAX_UPLOAD_BYTES).is_ok());
    assert!(check_selected_file(&file, MAX_UPLOAD_BYTES).is_ok());

    let over = VideoFile::new("edge.mp4", MAX_UPLOAD_BYTES + 1, "video/mp4");
    assert!(validate_video_file(&over, MAX_UPLOAD_BYTES).is_err());
}

#[test]
fn test_allow_list_is_stricter_than_prefix() {
    let webm = VideoFile::new("clip.webm", MIB, "video/webm");
    assert!(check_selected_file(&webm, MAX_UPLOAD_BYTES).is_ok());

    let err = validate_video_file(&webm, MAX_UPLOAD_BYTES).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFile { check: FileCheck::AllowList, .. }));
    assert_eq!(err.to_string(), "Unsupported file format. Please use MP4, AVI, or MOV files.");
}

#[test]
fn test_type_is_checked_before_size() {
    let file = VideoFile::new("huge.png", 500 * MIB, "image/png");
    let err = check_selected_file(&file, MAX_UPLOAD_BYTES).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFile { .. }));
}

#[test]
fn test_url_validation() {
    assert!(is_valid_url("https://example.com/article?id=1"));
    assert!(!is_valid_url("example.com/article"));
    assert!(!is_valid_url("not a url"));
}

#[test]
fn test_mime_guess_from_extension() {
    assert_eq!(mime_for_path(Path::new("a/b/clip.MP4")), "video/mp4");
    assert_eq!(mime_for_path(Path::new("clip.avi")), "video/x-msvideo");
    assert_eq!(mime_for_path(Path::new("clip.mov")), "video/quicktime");
    assert_eq!(mime_for_path(Path::new("photo.png")), "image/png");
    assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
}
