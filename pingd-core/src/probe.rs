use chrono::Utc;
use serde::Serialize;
use std::time::Duration;

/// Current time as fractional epoch seconds.
pub fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Elapsed time in milliseconds, rounded to two decimals.
pub fn elapsed_ms(elapsed: Duration) -> f64 {
    round2(elapsed.as_secs_f64() * 1000.0)
}

/// How a single probe ended.
///
/// Serialized inline into [`ProbeResult`] with the `status` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum ProbeOutcome {
    /// The target answered with a status below 400.
    #[serde(rename = "success")]
    Success {
        status_code: u16,
        response_time_ms: f64,
    },
    /// The target answered with a 4xx/5xx status.
    #[serde(rename = "http_error")]
    HttpError {
        #[serde(rename = "error_code")]
        status_code: u16,
        #[serde(rename = "error_message")]
        message: String,
    },
    /// DNS failure, refused connection, malformed URL, timeout.
    #[serde(rename = "url_error")]
    TransportError {
        #[serde(rename = "error_message")]
        message: String,
    },
    #[serde(rename = "error")]
    InternalError {
        #[serde(rename = "error_message")]
        message: String,
    },
}

impl ProbeOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeOutcome::Success { .. } => "success",
            ProbeOutcome::HttpError { .. } => "http_error",
            ProbeOutcome::TransportError { .. } => "url_error",
            ProbeOutcome::InternalError { .. } => "error",
        }
    }

    /// The target's own status code, when it answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Success { status_code, .. }
            | ProbeOutcome::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Status code of the probe service's own reply. Only internal errors
    /// surface as a failure of the service itself.
    pub fn http_status(&self) -> u16 {
        match self {
            ProbeOutcome::InternalError { .. } => 500,
            _ => 200,
        }
    }
}

/// Result of one probe, ready to be encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub url: String,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
    pub timestamp: f64,
}

impl ProbeResult {
    pub fn new(url: impl Into<String>, outcome: ProbeOutcome) -> Self {
        Self {
            url: url.into(),
            outcome,
            timestamp: epoch_seconds(),
        }
    }

    pub fn http_status(&self) -> u16 {
        self.outcome.http_status()
    }
}
