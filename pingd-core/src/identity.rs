use http::HeaderMap;
use http::header::{HOST, USER_AGENT};
use std::net::SocketAddr;

pub const X_REAL_IP: &str = "x-real-ip";
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Placeholder reported for absent `Host` / `User-Agent` headers.
pub const UNKNOWN: &str = "Unknown";

/// Who sent a request, as far as the connection and proxy headers tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// `X-Real-IP`, else `X-Forwarded-For`, else the socket IP.
    pub client_ip: String,
    pub client_port: u16,
    pub socket_addr: SocketAddr,
    pub real_ip: Option<String>,
    pub forwarded_for: Option<String>,
    pub host: Option<String>,
    pub user_agent: Option<String>,
}

impl ClientIdentity {
    /// Resolve the originating client from the raw peer address and headers.
    ///
    /// Pure: no I/O, never fails. Empty or non-UTF-8 header values count as
    /// absent. `X-Forwarded-For` is taken verbatim, without splitting hops.
    pub fn resolve(socket_addr: SocketAddr, headers: &HeaderMap) -> Self {
        let real_ip = header_value(headers, X_REAL_IP);
        let forwarded_for = header_value(headers, X_FORWARDED_FOR);

        let client_ip = real_ip
            .clone()
            .or_else(|| forwarded_for.clone())
            .unwrap_or_else(|| socket_addr.ip().to_string());

        Self {
            client_ip,
            client_port: socket_addr.port(),
            socket_addr,
            real_ip,
            forwarded_for,
            host: header_value(headers, HOST.as_str()),
            user_agent: header_value(headers, USER_AGENT.as_str()),
        }
    }

    /// Raw connection rendered as `ip:port` (no IPv6 brackets).
    pub fn original_client(&self) -> String {
        format!("{}:{}", self.socket_addr.ip(), self.socket_addr.port())
    }

    pub fn user_agent_or_unknown(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn host_or_unknown(&self) -> &str {
        self.host.as_deref().unwrap_or(UNKNOWN)
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
