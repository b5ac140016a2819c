// Configuration module entry point
// Loads layered configuration and holds the per-process runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LogLevel, ReflectConfig};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "reflect";

impl Config {
    /// Load configuration from the given file path (without extension).
    ///
    /// The file is optional; environment variables prefixed with `REFLECT`
    /// (`REFLECT_SERVER__PORT=9090`) override it, and built-in defaults
    /// fill whatever neither provides.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let reflect = ReflectConfig::default();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("REFLECT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .set_default("performance.backlog", 1024)?
            .set_default("reflect.header_echo", reflect.header_echo)?
            .set_default("reflect.cookie_echo", reflect.cookie_echo)?
            .set_default("reflect.body_echo", reflect.body_echo)?
            .set_default("reflect.method_gating", reflect.method_gating)?
            .set_default("reflect.strict_body_errors", reflect.strict_body_errors)?
            .set_default("reflect.label_body_echo", reflect.label_body_echo)?
            .set_default("reflect.max_body_size", reflect.max_body_size)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
