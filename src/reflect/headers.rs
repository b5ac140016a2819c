//! Header echo

use hyper::HeaderMap;

use super::Reflection;

/// Render every request header as a `name: value` line.
///
/// Repeated headers produce one line per value. Names come out the way
/// hyper stores them (lower-case); values are copied byte for byte, so
/// non-UTF-8 values survive untouched.
pub fn echo_headers(headers: &HeaderMap) -> Reflection {
    let mut body = Vec::new();
    for (name, value) in headers {
        body.extend_from_slice(name.as_str().as_bytes());
        body.extend_from_slice(b": ");
        body.extend_from_slice(value.as_bytes());
        body.push(b'\n');
    }
    Reflection::text(body)
}
