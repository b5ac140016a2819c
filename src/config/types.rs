// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub reflect: ReflectConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Minimum severity written by the logger
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound on a connection's lifetime in seconds, 0 disables it
    pub connection_timeout: u64,
    pub max_connections: Option<u64>,
    pub backlog: i32,
}

/// Reflection capabilities.
///
/// Each flag switches one behavior of the reflector on or off, so the
/// stricter and more degenerate echo-server variants are all expressible
/// as a single configuration of the same dispatcher.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReflectConfig {
    /// Route `/echo` to the header echo
    pub header_echo: bool,
    /// Route `/cookie` to the cookie echo
    pub cookie_echo: bool,
    /// Echo POST bodies on the default route instead of answering "OK"
    pub body_echo: bool,
    /// Reject non-POST methods on the default route with 405
    pub method_gating: bool,
    /// Answer 400 when the request body cannot be read
    pub strict_body_errors: bool,
    /// Label echoed bodies as `text/plain`
    pub label_body_echo: bool,
    /// Largest POST body that will be echoed, in bytes; larger ones get 413.
    /// `0` disables the limit.
    pub max_body_size: u64,
}

impl Default for ReflectConfig {
    fn default() -> Self {
        Self {
            header_echo: true,
            cookie_echo: true,
            body_echo: true,
            method_gating: false,
            strict_body_errors: true,
            label_body_echo: true,
            max_body_size: 10_485_760,
        }
    }
}
