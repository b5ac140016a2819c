//! Errors raised while reflecting a request

use hyper::{Method, StatusCode};
use thiserror::Error;

/// Failure on the default route. Each variant maps straight to a response.
#[derive(Debug, Error)]
pub enum ReflectError {
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: u64 },

    #[error("method {0} not allowed, only POST is accepted")]
    MethodNotAllowed(Method),
}

impl ReflectError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Convert into the plain-text error response sent to the client
    pub fn into_response(self) -> hyper::Response<http_body_util::Full<hyper::body::Bytes>> {
        let status = self.status();
        let allow = matches!(self, Self::MethodNotAllowed(_)).then_some("POST");
        crate::http::build_error_response(status, &self.to_string(), allow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ReflectError::BodyRead("reset".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReflectError::BodyTooLarge { limit: 1 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ReflectError::MethodNotAllowed(Method::GET).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_405_carries_allow() {
        let resp = ReflectError::MethodNotAllowed(Method::PUT).into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], "POST");
        assert_eq!(resp.headers()["content-type"], "text/plain");
    }
}
