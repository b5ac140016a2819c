//! Request routing dispatch module
//!
//! Looks the path up in the route table, runs the selected reflection and
//! converts reflection errors into responses on the spot.

use crate::config::AppState;
use crate::logger::{self, AccessLogEntry};
use crate::reflect::{self, Behavior};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{REFERER, USER_AGENT};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let behavior = state.routes.dispatch(req.uri().path());

    // Capture log fields before the request body is consumed
    let entry = state
        .access_log_enabled()
        .then(|| new_access_entry(&req, peer_addr, behavior));

    let response = reflect_request(req, behavior, &state).await;

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response_len(&response);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Run one reflection behavior
async fn reflect_request<B>(
    req: Request<B>,
    behavior: Behavior,
    state: &AppState,
) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match behavior {
        Behavior::HeaderEcho => reflect::echo_headers(req.headers()).into_response(),
        Behavior::CookieEcho => reflect::echo_cookies(req.headers()).into_response(),
        Behavior::Default => match reflect::echo_body(req, &state.config.reflect).await {
            Ok(reflection) => reflection.into_response(),
            Err(e) => {
                logger::log_warning(&format!("Default route rejected request: {e}"));
                e.into_response()
            }
        },
    }
}

fn new_access_entry<B>(req: &Request<B>, peer_addr: SocketAddr, behavior: Behavior) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.behavior = behavior_label(behavior).to_string();
    entry.referer = header_string(req, REFERER.as_str());
    entry.user_agent = header_string(req, USER_AGENT.as_str());
    entry
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn response_len(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

const fn behavior_label(behavior: Behavior) -> &'static str {
    match behavior {
        Behavior::HeaderEcho => "header_echo",
        Behavior::CookieEcho => "cookie_echo",
        Behavior::Default => "default",
    }
}

fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
