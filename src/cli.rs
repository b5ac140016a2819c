//! Command-line arguments

use clap::Parser;

use crate::config::{Config, DEFAULT_CONFIG_PATH};

/// HTTP request-reflection server for exercising clients and proxies
#[derive(Debug, Parser)]
#[command(name = "reflect-server", version, about)]
pub struct Cli {
    /// Port to listen on (overrides the config file)
    pub port: Option<u16>,

    /// Address to bind (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Config file path, extension optional
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
    }
}
