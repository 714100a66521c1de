//! Tests for API module
//!
//! Tests error types, request/response types, and handler functions.

use factlens::api::{
    AnalyzeTextRequest, AnalyzeVideoRequest, ApiContext, ApiResponse, ContactRequest,
    analyze_text, analyze_video, forward_workflow, get_status, submit_contact,
};
use factlens::config::Config;
use factlens::core::models::VideoFile;

use crate::common::mocks::MockTransport;

fn context(transport: MockTransport) -> ApiContext<MockTransport> {
    let mut config = Config::default();
    config.analysis.text_delay_ms = 0;
    config.analysis.video_delay_ms = 0;
    config.webhooks.workflow = "https://hooks.example.com/workflow".to_string();
    config.webhooks.contact = "https://hooks.example.com/contact".to_string();
    ApiContext::new(config, transport).unwrap()
}

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use factlens::api::ApiError;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::not_found("x").status_code(), 404);
        assert_eq!(ApiError::bad_request("x").status_code(), 400);
        assert_eq!(ApiError::conflict("x").status_code(), 409);
        assert_eq!(ApiError::bad_gateway("x").status_code(), 502);
        assert_eq!(ApiError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::conflict("A text analysis is already in progress");
        let display = format!("{err}");
        assert!(display.contains("CONFLICT"));
        assert!(display.contains("already in progress"));
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[test]
fn test_api_response_envelope() {
    let ok = serde_json::to_value(ApiResponse::success(1)).unwrap();
    assert_eq!(ok, serde_json::json!({"success": true, "data": 1}));

    let err = serde_json::to_value(ApiResponse::<()>::error("BAD_REQUEST", "nope")).unwrap();
    assert_eq!(
        err,
        serde_json::json!({"success": false, "error": {"code": "BAD_REQUEST", "message": "nope"}})
    );
}

// =============================================================================
// HANDLERS
// =============================================================================

#[test]
fn test_status_reports_idle_analyzers() {
    let ctx = context(MockTransport::new());
    let status = get_status(&ctx).unwrap();
    assert!(!status.text_busy);
    assert!(!status.video_busy);
    assert_eq!(status.webhooks.contact, "https://hooks.example.com/contact");
}

#[test]
fn test_analyze_text_returns_verdict_and_html() {
    let ctx = context(MockTransport::new());
    let req = AnalyzeTextRequest {
        text: "BREAKING!!! Scientists HATE this".to_string(),
        seed: Some(7),
        ..Default::default()
    };

    let data = analyze_text(&ctx, &req).unwrap();
    assert!(data.verdict.confidence >= 85.0);
    assert!(data.html.starts_with("<div class=\"analysis-result\">"));
    assert!(data.forwarded.is_none());

    let again = analyze_text(&ctx, &req).unwrap();
    assert_eq!(again.html, data.html);
}

#[test]
fn test_analyze_text_without_input_is_bad_request() {
    let ctx = context(MockTransport::new());
    let err = analyze_text(&ctx, &AnalyzeTextRequest::default()).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message, "Please enter text or URL for analysis");
}

#[test]
fn test_analyze_text_forwards_when_asked() {
    let transport = MockTransport::new().respond(200, r#"{"queued": true}"#);
    let ctx = context(transport);
    let req = AnalyzeTextRequest {
        url: "https://news.example.com/story".to_string(),
        forward: true,
        ..Default::default()
    };

    let data = analyze_text(&ctx, &req).unwrap();
    assert_eq!(data.forwarded, Some(serde_json::json!({"queued": true})));
}

#[test]
fn test_analyze_video_rejects_unsupported_file() {
    let ctx = context(MockTransport::new());
    let req = AnalyzeVideoRequest {
        file: Some(VideoFile::new("clip.webm", 1024, "video/webm")),
        ..Default::default()
    };

    let err = analyze_video(&ctx, &req).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message, "Unsupported file format. Please use MP4, AVI, or MOV files.");
}

#[test]
fn test_analyze_video_by_url() {
    let ctx = context(MockTransport::new());
    let req = AnalyzeVideoRequest {
        url: "https://cdn.example.com/clip.mp4".to_string(),
        seed: Some(3),
        ..Default::default()
    };

    let data = analyze_video(&ctx, &req).unwrap();
    assert_eq!(data.source, "https://cdn.example.com/clip.mp4");
    assert!(data.html.contains("Detailed Analysis"));

    let json = serde_json::to_value(&data).unwrap();
    assert!(json["frameAnalysis"]["totalFrames"].as_u64().unwrap() >= 500);
}

#[test]
fn test_analyze_video_without_input_is_bad_request() {
    let ctx = context(MockTransport::new());
    let err = analyze_video(&ctx, &AnalyzeVideoRequest::default()).unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_contact_failure_is_reported_in_data() {
    let ctx = context(MockTransport::new().respond(500, ""));
    let req = ContactRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hi".to_string(),
    };

    let data = submit_contact(&ctx, &req).unwrap();
    assert!(!data.delivered);
    assert_eq!(data.status, "❌ Failed to send. Try again later.");
}

#[test]
fn test_workflow_error_is_bad_gateway() {
    let ctx = context(MockTransport::new().respond(500, ""));
    let err = forward_workflow(&ctx, &serde_json::json!({"a": 1})).unwrap_err();
    assert_eq!(err.status_code(), 502);
}

#[test]
fn test_workflow_success() {
    let ctx = context(MockTransport::new().respond(200, "[1,2]"));
    let data = forward_workflow(&ctx, &serde_json::json!({"a": 1})).unwrap();
    assert_eq!(data.response, serde_json::json!([1, 2]));
}

// =============================================================================
// ROUTING
// =============================================================================

#[cfg(feature = "ui")]
mod route_tests {
    use std::io::{Cursor, Read};

    use factlens::server::route;
    use tiny_http::Method;

    use super::{MockTransport, context};

    fn call(method: &Method, path: &str, body: &str) -> (u16, serde_json::Value) {
        let ctx = context(MockTransport::new().respond(200, r#"{"ok":true}"#));
        let mut reader = Cursor::new(body.as_bytes().to_vec());
        let response = route(&ctx, method, path, &mut reader);
        let status = response.status_code().0;
        let mut text = String::new();
        response.into_reader().read_to_string(&mut text).unwrap();
        (status, serde_json::from_str(&text).unwrap())
    }

    #[test]
    fn test_status_under_both_prefixes() {
        for path in ["/api/status", "/api/v1/status"] {
            let (status, json) = call(&Method::Get, path, "");
            assert_eq!(status, 200, "{path}");
            assert_eq!(json["success"], true);
            assert_eq!(json["data"]["text_busy"], false);
        }
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let (status, json) = call(&Method::Get, "/api/v1/nope", "");
        assert_eq!(status, 404);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_wrong_method_is_not_found() {
        let (status, _) = call(&Method::Get, "/api/contact", "");
        assert_eq!(status, 404);
    }

    #[test]
    fn test_invalid_json_body_is_bad_request() {
        let (status, json) = call(&Method::Post, "/api/analyze/text", "{not json");
        assert_eq!(status, 400);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[test]
    fn test_workflow_route_returns_webhook_answer() {
        let (status, json) = call(&Method::Post, "/api/v1/workflow", r#"{"a":1}"#);
        assert_eq!(status, 200);
        assert_eq!(json["data"]["response"], serde_json::json!({"ok": true}));
    }
}
