use thiserror::Error;

/// Unified error type for pingd.
#[derive(Error, Debug)]
pub enum PingdError {
    #[error("port {port} is unavailable: {source}")]
    PortUnavailable {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal: {0}")]
    Internal(String),
}

impl PingdError {
    /// Map to HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            PingdError::MissingParameter(_) => 400,
            _ => 500,
        }
    }

    /// Suggest the next port to try when the configured one is taken.
    pub fn suggested_port(&self) -> Option<u16> {
        match self {
            PingdError::PortUnavailable { port, .. } => port.checked_add(1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_parameter_maps_to_400() {
        let err = PingdError::MissingParameter("url");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "missing required query parameter: url");
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(PingdError::Internal("boom".into()).status_code(), 500);
        assert_eq!(PingdError::Config("bad".into()).status_code(), 500);
    }

    #[test]
    fn port_unavailable_suggests_next_port() {
        let err = PingdError::PortUnavailable {
            port: 8080,
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.suggested_port(), Some(8081));
        assert!(err.to_string().starts_with("port 8080 is unavailable"));
    }

    #[test]
    fn port_unavailable_at_max_port_has_no_suggestion() {
        let err = PingdError::PortUnavailable {
            port: u16::MAX,
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.suggested_port(), None);
    }
}
