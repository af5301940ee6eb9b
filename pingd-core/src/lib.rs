pub mod config;
pub mod endpoint;
pub mod error;
pub mod identity;
pub mod probe;

pub use config::{ServerInfo, ServiceConfig};
pub use endpoint::Endpoint;
pub use error::PingdError;
pub use identity::ClientIdentity;
pub use probe::{ProbeOutcome, ProbeResult};
