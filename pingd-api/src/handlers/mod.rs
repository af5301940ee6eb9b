pub mod health;
pub mod not_found;
pub mod ping;
pub mod probe;

use pingd_core::{ClientIdentity, ServerInfo};
use serde::Serialize;

/// `server_info` block shared by ping and health replies.
#[derive(Debug, Serialize)]
pub struct ServerInfoBody {
    pub port: u16,
    pub host: String,
}

/// `request_info` block shared by ping and health replies.
#[derive(Debug, Serialize)]
pub struct RequestInfoBody {
    pub client_ip: String,
    pub original_client: String,
    pub user_agent: String,
    pub host_header: String,
}

impl From<&ServerInfo> for ServerInfoBody {
    fn from(info: &ServerInfo) -> Self {
        Self {
            port: info.port,
            host: info.host.clone(),
        }
    }
}

impl From<&ClientIdentity> for RequestInfoBody {
    fn from(id: &ClientIdentity) -> Self {
        Self {
            client_ip: id.client_ip.clone(),
            original_client: id.original_client(),
            user_agent: id.user_agent_or_unknown().to_string(),
            host_header: id.host_or_unknown().to_string(),
        }
    }
}
