//! Default route: body echo or a literal `OK`

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request};

use super::{Reflection, ReflectError};
use crate::config::ReflectConfig;
use crate::logger;

const OK_BODY: &str = "OK";

/// Answer a request that matched no fixed path.
///
/// POST bodies are read to completion and returned verbatim; every other
/// method gets `OK`. `method_gating` turns the non-POST case into a 405 and
/// `body_echo = false` answers `OK` to POST as well.
pub async fn echo_body<B>(req: Request<B>, config: &ReflectConfig) -> Result<Reflection, ReflectError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    if *req.method() != Method::POST {
        if config.method_gating {
            return Err(ReflectError::MethodNotAllowed(req.method().clone()));
        }
        return Ok(Reflection::text(OK_BODY));
    }

    if !config.body_echo {
        return Ok(Reflection::text(OK_BODY));
    }

    let body = match read_body(req.into_body(), config.max_body_size).await {
        Ok(body) => body,
        Err((ReflectError::BodyRead(reason), partial)) if !config.strict_body_errors => {
            logger::log_warning(&format!(
                "Body read failed, echoing the {} bytes received: {reason}",
                partial.len()
            ));
            partial
        }
        Err((e, _)) => return Err(e),
    };

    Ok(if config.label_body_echo {
        Reflection::text(body)
    } else {
        Reflection::raw(body)
    })
}

/// Collect the whole body, bounded by `limit` bytes (`0` means unbounded).
///
/// On failure the bytes received before the error are handed back with it.
async fn read_body<B>(body: B, limit: u64) -> Result<Bytes, (ReflectError, Bytes)>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let max = match limit {
        0 => usize::MAX,
        n => usize::try_from(n).unwrap_or(usize::MAX),
    };

    let mut body = std::pin::pin!(body);
    let mut buf = Vec::new();
    while let Some(frame) = body.frame().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                let e: Box<dyn std::error::Error + Send + Sync> = e.into();
                return Err((ReflectError::BodyRead(e.to_string()), Bytes::from(buf)));
            }
        };
        // Trailers carry no payload
        if let Ok(data) = frame.into_data() {
            if data.len() > max - buf.len() {
                return Err((ReflectError::BodyTooLarge { limit }, Bytes::from(buf)));
            }
            buf.extend_from_slice(&data);
        }
    }
    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Frame;
    use hyper::StatusCode;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Body that yields one chunk and then fails, like a dropped connection
    struct BrokenBody {
        sent: bool,
    }

    impl Body for BrokenBody {
        type Data = Bytes;
        type Error = std::io::Error;

        fn poll_frame(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
            if self.sent {
                return Poll::Ready(Some(Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset",
                ))));
            }
            self.sent = true;
            Poll::Ready(Some(Ok(Frame::data(Bytes::from_static(b"partial")))))
        }
    }

    fn request(method: Method, body: &'static [u8]) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri("/anything")
            .body(Full::new(Bytes::from_static(body)))
            .unwrap()
    }

    fn broken_post() -> Request<BrokenBody> {
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(BrokenBody { sent: false })
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_echoes_bytes() {
        let body: &'static [u8] = b"\x00binary\xffpayload\r\n";
        let out = echo_body(request(Method::POST, body), &ReflectConfig::default())
            .await
            .unwrap();
        assert_eq!(out.status, StatusCode::OK);
        assert_eq!(out.content_type, Some("text/plain"));
        assert_eq!(&out.body[..], body);
    }

    #[tokio::test]
    async fn test_post_empty_body() {
        let out = echo_body(request(Method::POST, b""), &ReflectConfig::default())
            .await
            .unwrap();
        assert!(out.body.is_empty());
    }

    #[tokio::test]
    async fn test_non_post_answers_ok() {
        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
            let out = echo_body(request(method, b"ignored"), &ReflectConfig::default())
                .await
                .unwrap();
            assert_eq!(out.status, StatusCode::OK);
            assert_eq!(out.body, "OK");
        }
    }

    #[tokio::test]
    async fn test_unlabelled_echo() {
        let config = ReflectConfig {
            label_body_echo: false,
            ..ReflectConfig::default()
        };
        let out = echo_body(request(Method::POST, b"hi"), &config).await.unwrap();
        assert_eq!(out.content_type, None);
        assert_eq!(out.body, "hi");
    }

    #[tokio::test]
    async fn test_body_echo_disabled() {
        let config = ReflectConfig {
            body_echo: false,
            ..ReflectConfig::default()
        };
        let out = echo_body(request(Method::POST, b"hi"), &config).await.unwrap();
        assert_eq!(out.body, "OK");
    }

    #[tokio::test]
    async fn test_method_gating() {
        let config = ReflectConfig {
            method_gating: true,
            ..ReflectConfig::default()
        };
        let err = echo_body(request(Method::GET, b""), &config).await.unwrap_err();
        assert!(matches!(err, ReflectError::MethodNotAllowed(m) if m == Method::GET));

        let out = echo_body(request(Method::POST, b"ok"), &config).await.unwrap();
        assert_eq!(out.body, "ok");
    }

    #[tokio::test]
    async fn test_body_limit() {
        let config = ReflectConfig {
            max_body_size: 4,
            ..ReflectConfig::default()
        };
        let err = echo_body(request(Method::POST, b"too long"), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ReflectError::BodyTooLarge { limit: 4 }));

        let out = echo_body(request(Method::POST, b"fits"), &config).await.unwrap();
        assert_eq!(out.body, "fits");
    }

    #[tokio::test]
    async fn test_zero_limit_is_unbounded() {
        let config = ReflectConfig {
            max_body_size: 0,
            ..ReflectConfig::default()
        };
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Full::new(Bytes::from(vec![b'x'; 64 * 1024])))
            .unwrap();
        let out = echo_body(req, &config).await.unwrap();
        assert_eq!(out.body.len(), 64 * 1024);
    }

    #[tokio::test]
    async fn test_limit_is_checked_across_frames() {
        let config = ReflectConfig {
            max_body_size: 5,
            strict_body_errors: false,
            ..ReflectConfig::default()
        };
        // "partial" alone is 7 bytes, over the limit even in lenient mode
        let err = echo_body(broken_post(), &config).await.unwrap_err();
        assert!(matches!(err, ReflectError::BodyTooLarge { limit: 5 }));
    }

    #[tokio::test]
    async fn test_read_failure_strict() {
        let err = echo_body(broken_post(), &ReflectConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_read_failure_lenient() {
        let config = ReflectConfig {
            strict_body_errors: false,
            ..ReflectConfig::default()
        };
        let out = echo_body(broken_post(), &config).await.unwrap();
        assert_eq!(out.status, StatusCode::OK);
        assert_eq!(out.body, "partial");
    }
}
