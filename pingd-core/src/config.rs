use crate::error::PingdError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// The address the listener actually bound to.
///
/// Built once after bind and handed to the router; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8080 }
fn default_log_level() -> String { "info".into() }

// ── Impls ─────────────────────────────────────────────────────

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration: defaults, then an optional YAML file, then
    /// `PINGD_`-prefixed env vars (`__` separates nested keys).
    pub fn load(path: Option<&Path>) -> Result<Self, PingdError> {
        let mut figment = Figment::from(Serialized::defaults(ServiceConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("PINGD_").split("__"))
            .extract()
            .map_err(|e| PingdError::Config(e.to_string()))
    }

    /// `host:port` as given in configuration.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerInfo {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }
}

impl From<SocketAddr> for ServerInfo {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── Default values ────────────────────────────────────────────

    #[test]
    fn default_server_config_has_expected_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn default_service_config_logs_at_info() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn server_info_from_socket_addr() {
        let info = ServerInfo::from("127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(info.host, "127.0.0.1");
        assert_eq!(info.port, 9000);
    }

    // ── ServiceConfig::load() ─────────────────────────────────────

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = ServiceConfig::load(None).unwrap();
        assert_eq!(cfg.server, ServerConfig::default());
    }

    #[test]
    fn load_from_valid_yaml_overrides_defaults() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "server:\n  port: 9001\nlog_level: debug\n").unwrap();
        let cfg = ServiceConfig::load(Some(tmpfile.path())).unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.log_level, "debug");
        // Defaults still apply for unspecified fields
        assert_eq!(cfg.server.host, "0.0.0.0");
    }

    #[test]
    fn load_rejects_port_out_of_range() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "server:\n  port: 70000\n").unwrap();
        let err = ServiceConfig::load(Some(tmpfile.path())).unwrap_err();
        assert!(matches!(err, PingdError::Config(_)));
    }
}
