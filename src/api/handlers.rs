// /bfhl endpoint handlers

use crate::api::response::json_response;
use crate::api::types::{BfhlRequest, BfhlResponse, ErrorResponse};
use crate::classify;
use crate::config::{AppState, IdentityConfig};
use crate::file_inspect;
use crate::logger;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

/// Static capability marker returned for `GET /bfhl`.
pub fn handle_get(state: &Arc<AppState>) -> Result<Response<Full<Bytes>>, Infallible> {
    let marker = serde_json::json!({ "operation_code": 1 });
    Ok(json_response(StatusCode::OK, &marker, &state.config.http))
}

/// Classify the request body and inspect the optional file payload.
///
/// Malformed input never produces a bare protocol error: it degrades to a
/// structured failure record with `is_success: false`.
pub async fn handle_post(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let whole_body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            let error = ErrorResponse::new("Failed to read request body");
            return Ok(json_response(StatusCode::OK, &error, &state.config.http));
        }
    };

    let request: BfhlRequest = match serde_json::from_slice(&whole_body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_warning(&format!("Invalid request body: {e}"));
            let error = ErrorResponse::new(format!("Invalid JSON: {e}"));
            return Ok(json_response(StatusCode::OK, &error, &state.config.http));
        }
    };

    let response = process(&request, &state.config.identity);
    Ok(json_response(StatusCode::OK, &response, &state.config.http))
}

/// Pure request-to-response mapping, independent of the HTTP layer.
fn process(request: &BfhlRequest, identity: &IdentityConfig) -> BfhlResponse {
    let classification = classify::classify(&request.data);

    let mut response = BfhlResponse {
        is_success: true,
        user_id: identity.user_id(),
        email: identity.email.clone(),
        roll_number: identity.roll_number.clone(),
        numbers: classification.numbers,
        alphabets: classification.alphabets,
        highest_lowercase_alphabet: classification
            .highest_lowercase
            .into_iter()
            .collect(),
        file_valid: false,
        file_mime_type: None,
        file_size_kb: None,
    };

    // An empty file_b64 string means no file was supplied
    if let Some(file_b64) = request.file_b64.as_deref().filter(|s| !s.is_empty()) {
        let report = file_inspect::inspect(file_b64);
        response.file_valid = report.valid;
        response.file_mime_type = report.mime_type.map(ToString::to_string);
        response.file_size_kb = report.size_kb;
    }

    response
}
