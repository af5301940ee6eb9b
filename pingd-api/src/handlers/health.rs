use super::{RequestInfoBody, ServerInfoBody};
use crate::response::JsonResponse;
use crate::server::ApiState;
use axum::Extension;
use axum::extract::State;
use pingd_core::ClientIdentity;
use pingd_core::probe::{epoch_seconds, round2};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: f64,
    /// Seconds since the service state was built at startup.
    pub uptime: f64,
    pub version: &'static str,
    pub server_info: ServerInfoBody,
    pub request_info: RequestInfoBody,
}

pub async fn health_check(
    State(state): State<Arc<ApiState>>,
    Extension(identity): Extension<ClientIdentity>,
) -> JsonResponse {
    JsonResponse::ok(&HealthResponse {
        status: "healthy",
        timestamp: epoch_seconds(),
        uptime: round2(state.started_at.elapsed().as_secs_f64()),
        version: env!("CARGO_PKG_VERSION"),
        server_info: ServerInfoBody::from(&state.server),
        request_info: RequestInfoBody::from(&identity),
    })
}
