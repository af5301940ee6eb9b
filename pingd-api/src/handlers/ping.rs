use super::{RequestInfoBody, ServerInfoBody};
use crate::response::JsonResponse;
use crate::server::ApiState;
use axum::Extension;
use axum::extract::State;
use pingd_core::ClientIdentity;
use pingd_core::probe::epoch_seconds;
use serde::Serialize;
use std::sync::Arc;

/// Product tag paired with the bound port in the `server` field.
pub const SERVER_TAG: &str = "pingd";

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: f64,
    pub server: String,
    pub server_info: ServerInfoBody,
    pub request_info: RequestInfoBody,
}

/// Liveness: always 200, no I/O beyond the already-read headers.
pub async fn ping(
    State(state): State<Arc<ApiState>>,
    Extension(identity): Extension<ClientIdentity>,
) -> JsonResponse {
    JsonResponse::ok(&PingResponse {
        status: "ok",
        message: "pong",
        timestamp: epoch_seconds(),
        server: format!("{SERVER_TAG}:{}", state.server.port),
        server_info: ServerInfoBody::from(&state.server),
        request_info: RequestInfoBody::from(&identity),
    })
}
