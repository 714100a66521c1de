//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::Cursor;
#[allow(unused_imports)]
use std::io::Read as _;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, AnalyzeTextRequest, AnalyzeVideoRequest, ApiContext, ApiError, ApiResponse,
    ContactRequest,
};
use crate::core::ports::WebhookTransport;

/// Accept requests on `0.0.0.0:{port}` until the process is stopped
///
/// Requests are served one at a time.
pub fn serve<T: WebhookTransport>(ctx: &ApiContext<T>, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("Listening on http://localhost:{port}/api");

    for mut request in server.incoming_requests() {
        log::debug!("{} {}", request.method(), request.url());
        let response = handle_api_request(ctx, &mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_api_request<T: WebhookTransport>(
    ctx: &ApiContext<T>,
    request: &mut Request,
) -> Response<Cursor<Vec<u8>>> {
    let path = request.url().to_string();
    let method = request.method().clone();
    route(ctx, &method, &path, request.as_reader())
}

/// Route a request by method and path, reading the body from `body`
///
/// Both `/api/v1/...` and `/api/...` are accepted.
pub fn route<T: WebhookTransport>(
    ctx: &ApiContext<T>,
    method: &Method,
    path: &str,
    body: &mut dyn std::io::Read,
) -> Response<Cursor<Vec<u8>>> {
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    match (method, api_path) {
        (&Method::Get, "/status") => handle_result(api::get_status(ctx)),

        (&Method::Post, "/analyze/text") => match read_json_body::<AnalyzeTextRequest>(body) {
            Ok(req) => handle_result(api::analyze_text(ctx, &req)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/analyze/video") => match read_json_body::<AnalyzeVideoRequest>(body) {
            Ok(req) => handle_result(api::analyze_video(ctx, &req)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/contact") => match read_json_body::<ContactRequest>(body) {
            Ok(req) => handle_result(api::submit_contact(ctx, &req)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/workflow") => match read_json_body::<serde_json::Value>(body) {
            Ok(payload) => handle_result(api::forward_workflow(ctx, &payload)),
            Err(e) => error_response(&e),
        },

        // 404 for unknown API routes
        _ => error_response(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        ))),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(reader: &mut dyn std::io::Read) -> Result<T, ApiError> {
    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let mut response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    response
}
