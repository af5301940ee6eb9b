use clap::Parser;
use pingd_core::{PingdError, ServiceConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pingd",
    version,
    about = "pingd: liveness/health endpoints and on-demand URL probes",
    after_help = "Endpoints:\n  /ping                        basic liveness check\n  /health                      health status check\n  /ping-url?url=<target_url>   probe the given URL"
)]
pub struct Cli {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level [default: info]
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load file/env configuration, then let explicit flags win.
    pub fn resolve_config(&self) -> Result<ServiceConfig, PingdError> {
        let mut config = ServiceConfig::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}

/// Fail fast when `host:port` cannot be bound.
///
/// The throwaway listener is dropped before returning. Another process may
/// still take the port before the real bind.
pub fn check_port(host: &str, port: u16) -> Result<(), PingdError> {
    std::net::TcpListener::bind((host, port))
        .map(drop)
        .map_err(|source| PingdError::PortUnavailable { port, source })
}
