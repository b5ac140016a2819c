//! Cookie echo

use hyper::header::COOKIE;
use hyper::HeaderMap;

use super::Reflection;

/// Split a raw `Cookie` header value into `(name, value)` pairs.
///
/// Candidates are separated by `;` and only leading spaces are stripped.
/// The first `=` splits name from value. A candidate without `=` or with an
/// empty name (`=x`) is skipped, so `" token"` yields nothing. Works on raw
/// bytes so obs-text in a value is passed through unchanged.
pub fn cookie_pairs(raw: &[u8]) -> impl Iterator<Item = (&[u8], &[u8])> {
    raw.split(|&b| b == b';').filter_map(|candidate| {
        let start = candidate
            .iter()
            .position(|&b| b != b' ')
            .unwrap_or(candidate.len());
        let trimmed = &candidate[start..];
        match trimmed.iter().position(|&b| b == b'=') {
            Some(eq) if eq > 0 => Some((&trimmed[..eq], &trimmed[eq + 1..])),
            _ => None,
        }
    })
}

/// Render the request's `Cookie` header as `name=value` lines.
///
/// Only the first `Cookie` header is read; a missing header is treated as
/// an empty one.
pub fn echo_cookies(headers: &HeaderMap) -> Reflection {
    let raw = headers.get(COOKIE).map_or(&[][..], |v| v.as_bytes());

    let mut body = Vec::new();
    for (name, value) in cookie_pairs(raw) {
        body.extend_from_slice(name);
        body.push(b'=');
        body.extend_from_slice(value);
        body.push(b'\n');
    }
    Reflection::text(body)
}
