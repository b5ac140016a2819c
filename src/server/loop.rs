// Server loop module
// Accepts connections until the process is terminated

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Accept connections forever, serving each one in its own task.
///
/// Accept errors (e.g. file descriptor exhaustion) are logged and the loop
/// keeps going; there is no shutdown path.
pub async fn serve(listener: TcpListener, state: Arc<config::AppState>) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, &state, &active_connections);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ReflectConfig};
    use crate::reflect::RouteTable;
    use crate::server::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    /// Start a server on an ephemeral port and return its address
    async fn start(reflect: ReflectConfig) -> std::net::SocketAddr {
        let mut config = Config::load_from("does-not-exist/reflect").unwrap();
        config.reflect = reflect;
        let routes = RouteTable::from_config(&config.reflect);
        let state = Arc::new(config::AppState::new(config, routes));

        let listener = create_listener("127.0.0.1:0".parse().unwrap(), 64).unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener, state));
        addr
    }

    /// Send a raw HTTP/1.1 request and return (status line, headers, body)
    async fn exchange(addr: std::net::SocketAddr, raw: &[u8]) -> (String, String, Vec<u8>) {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(raw).await.unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();

        let split = response
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response has a header block");
        let head = String::from_utf8(response[..split].to_vec()).unwrap();
        let body = response[split + 4..].to_vec();
        let (status, headers) = head.split_once("\r\n").unwrap_or((head.as_str(), ""));
        (status.to_string(), headers.to_ascii_lowercase(), body)
    }

    #[tokio::test]
    async fn test_header_echo_over_wire() {
        let addr = start(ReflectConfig::default()).await;
        let (status, headers, body) = exchange(
            addr,
            b"POST /echo HTTP/1.1\r\nHost: probe\r\nX-Multi: 1\r\nX-Multi: 2\r\nContent-Length: 4\r\nConnection: close\r\n\r\nbody",
        )
        .await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert!(headers.contains("content-type: text/plain"));
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "host: probe\nx-multi: 1\nx-multi: 2\ncontent-length: 4\nconnection: close\n"
        );
    }

    #[tokio::test]
    async fn test_cookie_echo_over_wire() {
        let addr = start(ReflectConfig::default()).await;
        let (status, _, body) = exchange(
            addr,
            b"GET /cookie HTTP/1.1\r\nHost: probe\r\nCookie: =x; y; a=1 ; b=2\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert_eq!(String::from_utf8(body).unwrap(), "a=1 \nb=2\n");
    }

    #[tokio::test]
    async fn test_body_echo_over_wire() {
        let addr = start(ReflectConfig::default()).await;
        let (status, _, body) = exchange(
            addr,
            b"POST /any/path HTTP/1.1\r\nHost: probe\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhe\x00lo",
        )
        .await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert_eq!(body, b"he\x00lo");

        let (status, _, body) = exchange(
            addr,
            b"POST / HTTP/1.1\r\nHost: probe\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n3\r\nabc\r\n2\r\nde\r\n0\r\n\r\n",
        )
        .await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert_eq!(body, b"abcde");
    }

    #[tokio::test]
    async fn test_get_default_over_wire() {
        let addr = start(ReflectConfig::default()).await;
        let (status, _, body) = exchange(
            addr,
            b"GET /nothing/here HTTP/1.1\r\nHost: probe\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn test_method_gating_over_wire() {
        let addr = start(ReflectConfig {
            method_gating: true,
            ..ReflectConfig::default()
        })
        .await;
        let (status, headers, _) = exchange(
            addr,
            b"PUT / HTTP/1.1\r\nHost: probe\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert_eq!(status, "HTTP/1.1 405 Method Not Allowed");
        assert!(headers.contains("allow: post"));
    }
}
