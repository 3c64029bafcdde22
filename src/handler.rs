use crate::api::{handlers, response};
use crate::config::AppState;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

const BFHL_PATH: &str = "/bfhl";

/// Validate Content-Length header against max body size
/// Returns Some(413 response) if too large, None otherwise
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
        logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);
    }

    if req.uri().path() != BFHL_PATH {
        return Ok(response::not_found());
    }

    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    let resp = match *req.method() {
        Method::GET => handlers::handle_get(&state)?,
        Method::POST => handlers::handle_post(req, Arc::clone(&state)).await?,
        Method::OPTIONS => response::build_options_response(state.config.http.enable_cors),
        _ => {
            logger::log_warning(&format!("Method not allowed: {}", req.method()));
            response::method_not_allowed()
        }
    };

    if access_log {
        let size = resp.body().size_hint().exact().unwrap_or(0);
        logger::log_response(resp.status().as_u16(), size);
    }

    Ok(resp)
}
