/// The fixed endpoint table.
///
/// Matching is exact: no wildcards, and a trailing slash makes a path
/// unknown (`/ping/` is not `/ping`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ping,
    Health,
    PingUrl,
    NotFound,
}

pub mod paths {
    pub const PING: &str = "/ping";
    pub const HEALTH: &str = "/health";
    pub const PING_URL: &str = "/ping-url";
}

impl Endpoint {
    /// Endpoints that are actually served, in listing order.
    pub const KNOWN: [Endpoint; 3] = [Endpoint::Ping, Endpoint::Health, Endpoint::PingUrl];

    pub fn from_path(path: &str) -> Self {
        match path {
            paths::PING => Endpoint::Ping,
            paths::HEALTH => Endpoint::Health,
            paths::PING_URL => Endpoint::PingUrl,
            _ => Endpoint::NotFound,
        }
    }

    /// Category label used in request log lines.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Ping => "PING",
            Endpoint::Health => "HEALTH",
            Endpoint::PingUrl => "PING-URL",
            Endpoint::NotFound => "NOT-FOUND",
        }
    }

    /// One-line usage entry for the 404 body.
    pub fn usage(self) -> Option<&'static str> {
        match self {
            Endpoint::Ping => Some("/ping - basic liveness check"),
            Endpoint::Health => Some("/health - health status check"),
            Endpoint::PingUrl => Some("/ping-url?url=<target_url> - probe the given URL"),
            Endpoint::NotFound => None,
        }
    }

    pub fn available() -> Vec<&'static str> {
        Self::KNOWN.iter().filter_map(|e| e.usage()).collect()
    }
}
