//! Outbound reachability probes.
//!
//! One probe is exactly one GET attempt, bounded by a fixed timeout. The
//! target's failures are reported as data in a [`ProbeResult`]; nothing here
//! returns an error for a failed probe.

use pingd_core::PingdError;
use pingd_core::probe::{ProbeOutcome, ProbeResult, elapsed_ms};
use reqwest::StatusCode;
use std::error::Error as _;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Hard ceiling for a single probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues timed GET requests to caller-supplied URLs.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Prober {
    client: reqwest::Client,
    timeout: Duration,
}

impl Prober {
    pub fn new() -> Result<Self, PingdError> {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, PingdError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pingd/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PingdError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe `url` once. Elapsed time covers the request up to received
    /// response headers; the body is never read.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        let started = Instant::now();
        let outcome = match self.client.get(url).send().await {
            Ok(resp) => classify_status(resp.status(), started.elapsed()),
            Err(e) => classify_error(&e),
        };

        match &outcome {
            ProbeOutcome::Success { status_code, response_time_ms } => {
                info!(url, status_code, response_time_ms, "Probe succeeded");
            }
            ProbeOutcome::HttpError { status_code, .. } => {
                info!(url, status_code, "Probe target returned HTTP error");
            }
            ProbeOutcome::TransportError { message } => {
                warn!(url, error = %message, "Probe target unreachable");
            }
            ProbeOutcome::InternalError { message } => {
                error!(url, error = %message, "Probe failed unexpectedly");
            }
        }

        ProbeResult::new(url, outcome)
    }
}

/// Statuses from 400 up are the target's error, reported as data.
pub fn classify_status(status: StatusCode, elapsed: Duration) -> ProbeOutcome {
    if status.is_client_error() || status.is_server_error() {
        ProbeOutcome::HttpError {
            status_code: status.as_u16(),
            message: format!(
                "HTTP Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        }
    } else {
        ProbeOutcome::Success {
            status_code: status.as_u16(),
            response_time_ms: elapsed_ms(elapsed),
        }
    }
}

fn classify_error(e: &reqwest::Error) -> ProbeOutcome {
    let message = error_chain(e);
    if e.is_builder() || e.is_connect() || e.is_timeout() || e.is_request() || e.is_redirect() {
        ProbeOutcome::TransportError { message }
    } else {
        ProbeOutcome::InternalError { message }
    }
}

/// `Display` of the error followed by each source, `: `-separated.
fn error_chain(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
