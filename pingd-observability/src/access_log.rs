use chrono::Local;
use pingd_core::{ClientIdentity, Endpoint};
use serde::Serialize;
use tracing::info;

/// User agents longer than this are cut and suffixed with `...`.
pub const USER_AGENT_LOG_LIMIT: usize = 50;

/// Structured access log entry, one per dispatched request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccessLogEntry {
    pub timestamp: String,
    pub category: &'static str,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub latency_ms: f64,
    pub client: String,
    pub host: String,
    pub user_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarded_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_ip: Option<String>,
}

impl AccessLogEntry {
    pub fn new(
        endpoint: Endpoint,
        identity: &ClientIdentity,
        method: &str,
        path: &str,
        status: u16,
        latency_ms: f64,
    ) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            category: endpoint.label(),
            method: method.to_string(),
            path: path.to_string(),
            status,
            latency_ms,
            client: format!("{}:{}", identity.client_ip, identity.client_port),
            host: identity.host_or_unknown().to_string(),
            user_agent: truncate_user_agent(identity.user_agent_or_unknown()),
            forwarded_for: identity.forwarded_for.clone(),
            real_ip: identity.real_ip.clone(),
        }
    }

    /// Human-readable line. The subscriber stamps the time itself, so the
    /// entry's timestamp only travels as a structured field.
    pub fn message(&self) -> String {
        format!("[{}] {} {} {}", self.category, self.method, self.path, self.status)
    }

    /// Write the entry to the operator log. Never fails.
    pub fn emit(&self) {
        info!(
            category = self.category,
            timestamp = %self.timestamp,
            client = %self.client,
            host = %self.host,
            user_agent = %self.user_agent,
            status = self.status,
            latency_ms = self.latency_ms,
            "{}",
            self.message(),
        );

        // Proxy headers matter most when diagnosing health checks behind a balancer.
        if self.category == Endpoint::Health.label() {
            if let Some(xff) = &self.forwarded_for {
                info!(category = self.category, forwarded_for = %xff, "X-Forwarded-For: {xff}");
            }
            if let Some(real_ip) = &self.real_ip {
                info!(category = self.category, real_ip = %real_ip, "X-Real-IP: {real_ip}");
            }
        }
    }
}

/// Cut to [`USER_AGENT_LOG_LIMIT`] characters, appending `...` when cut.
pub fn truncate_user_agent(user_agent: &str) -> String {
    match user_agent.char_indices().nth(USER_AGENT_LOG_LIMIT) {
        Some((idx, _)) => format!("{}...", &user_agent[..idx]),
        None => user_agent.to_string(),
    }
}
