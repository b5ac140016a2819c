//! Request reflection module
//!
//! The core of the server: every request is answered with data read back
//! from the request itself.
//!
//! - `/echo`   - header echo ([`echo_headers`])
//! - `/cookie` - cookie echo ([`echo_cookies`])
//! - any other path - body echo or a literal `OK` ([`echo_body`])
//!
//! Nothing here holds state between requests and the request is never
//! modified, only read.

mod body;
mod cookie;
mod error;
mod headers;
mod routes;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub use body::echo_body;
pub use cookie::echo_cookies;
pub use error::ReflectError;
pub use headers::echo_headers;
pub use routes::{Behavior, RouteTable};

/// Content type used for every reflected text body
pub const TEXT_PLAIN: &str = "text/plain";

/// Outcome of a reflection, before it is turned into a hyper response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub body: Bytes,
}

impl Reflection {
    /// 200 with a `text/plain` body
    pub fn text(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some(TEXT_PLAIN),
            body: body.into(),
        }
    }

    /// 200 with no content type
    pub fn raw(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        crate::http::build_bytes_response(self.status, self.content_type, self.body)
    }
}
