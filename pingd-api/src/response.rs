use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const ENCODE_FAILURE_BODY: &[u8] = b"{\n  \"error\": \"Internal Server Error\"\n}";

/// A JSON reply in canonical form: 2-space indentation, non-ASCII kept
/// literal, UTF-8 content type and an open CORS origin.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl JsonResponse {
    pub fn new<T: Serialize>(status: StatusCode, data: &T) -> Self {
        match serde_json::to_vec_pretty(data) {
            Ok(body) => Self { status, body },
            Err(e) => {
                error!(error = %e, "Failed to encode JSON response");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ENCODE_FAILURE_BODY.to_vec(),
                }
            }
        }
    }

    pub fn ok<T: Serialize>(data: &T) -> Self {
        Self::new(StatusCode::OK, data)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [
                (CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
                (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
            ],
            self.body,
        )
            .into_response()
    }
}
