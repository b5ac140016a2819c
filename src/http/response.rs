//! HTTP response building module
//!
//! Provides builders for the few response shapes the server emits.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build a response with an optional content type
pub fn build_bytes_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: Bytes,
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    builder.body(Full::new(body.clone())).unwrap_or_else(|e| {
        log_build_error(status, &e);
        Response::new(Full::new(body))
    })
}

/// Build plain-text error response, e.g. "405 Method Not Allowed: ..."
pub fn build_error_response(
    status: StatusCode,
    detail: &str,
    allow: Option<&str>,
) -> Response<Full<Bytes>> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let text = format!("{} {reason}: {detail}", status.as_u16());

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "text/plain");
    if let Some(allow) = allow {
        builder = builder.header("Allow", allow);
    }

    builder
        .body(Full::new(Bytes::from(text.clone())))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            let mut resp = Response::new(Full::new(Bytes::from(text)));
            *resp.status_mut() = status;
            resp
        })
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
