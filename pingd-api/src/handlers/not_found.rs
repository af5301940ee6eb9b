use crate::response::JsonResponse;
use axum::http::StatusCode;
use pingd_core::Endpoint;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub available_endpoints: Vec<&'static str>,
}

/// Fallback for every path outside the endpoint table.
pub async fn not_found() -> JsonResponse {
    JsonResponse::new(
        StatusCode::NOT_FOUND,
        &NotFoundResponse {
            error: "Not Found",
            available_endpoints: Endpoint::available(),
        },
    )
}
