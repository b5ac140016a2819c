// Application state module
// Immutable per-process state shared by every connection

use super::types::Config;
use crate::reflect::RouteTable;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Routing table built once at startup
    pub routes: RouteTable,
}

impl AppState {
    pub const fn new(config: Config, routes: RouteTable) -> Self {
        Self { config, routes }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
