//! Path dispatch for the reflector

use crate::config::ReflectConfig;

pub const ECHO_PATH: &str = "/echo";
pub const COOKIE_PATH: &str = "/cookie";

/// Reflection behavior selected for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    HeaderEcho,
    CookieEcho,
    Default,
}

/// Exact-match routing table with a catch-all `Default`.
///
/// The table is built once from the reflect configuration and handed to the
/// server at startup; lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(String, Behavior)>,
}

impl RouteTable {
    pub fn from_config(config: &ReflectConfig) -> Self {
        let mut entries = Vec::with_capacity(2);
        if config.header_echo {
            entries.push((ECHO_PATH.to_string(), Behavior::HeaderEcho));
        }
        if config.cookie_echo {
            entries.push((COOKIE_PATH.to_string(), Behavior::CookieEcho));
        }
        Self { entries }
    }

    /// Select the behavior for a path. The method plays no part here.
    pub fn dispatch(&self, path: &str) -> Behavior {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map_or(Behavior::Default, |(_, behavior)| *behavior)
    }

    /// Exactly-matched paths, in lookup order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_config(&ReflectConfig::default())
    }
}
