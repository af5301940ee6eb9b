use crate::response::JsonResponse;
use crate::server::ApiState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use pingd_core::probe::{ProbeOutcome, ProbeResult};
use pingd_core::PingdError;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

pub const URL_PARAM: &str = "url";
pub const USAGE_EXAMPLE: &str = "/ping-url?url=http://example.com";

#[derive(Debug, Serialize)]
pub struct MissingUrlResponse {
    pub error: String,
    pub example: &'static str,
}

/// First non-blank value of `name`; repeated keys keep their order.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, v)| k == name && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

fn status_for(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn missing_url_response() -> JsonResponse {
    let err = PingdError::MissingParameter(URL_PARAM);
    JsonResponse::new(
        status_for(err.status_code()),
        &MissingUrlResponse {
            error: err.to_string(),
            example: USAGE_EXAMPLE,
        },
    )
}

/// Encode a finished probe; only internal errors become a 500.
pub fn result_response(result: &ProbeResult) -> JsonResponse {
    JsonResponse::new(status_for(result.http_status()), result)
}

/// Probe the URL in `?url=`. The target's failure is reported as data with a
/// 200; only an unexpected failure of the probe itself yields a 500.
pub async fn ping_url(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> JsonResponse {
    let Some(target) = first_param(&params, URL_PARAM).map(str::to_string) else {
        return missing_url_response();
    };

    // A panic inside the probe must not take the connection down with it.
    let prober = state.prober.clone();
    let url = target.clone();
    let result = match tokio::spawn(async move { prober.probe(&url).await }).await {
        Ok(result) => result,
        Err(e) => {
            error!(url = %target, error = %e, "Probe task failed");
            ProbeResult::new(
                target,
                ProbeOutcome::InternalError { message: e.to_string() },
            )
        }
    };

    result_response(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_param_takes_first_of_repeated() {
        let p = params(&[("url", "http://a"), ("url", "http://b")]);
        assert_eq!(first_param(&p, "url"), Some("http://a"));
    }

    #[test]
    fn first_param_skips_blank_values() {
        let p = params(&[("url", ""), ("url", "http://b")]);
        assert_eq!(first_param(&p, "url"), Some("http://b"));
        let p = params(&[("url", "")]);
        assert_eq!(first_param(&p, "url"), None);
    }

    #[test]
    fn missing_url_is_bad_request() {
        let resp = missing_url_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(v["example"], USAGE_EXAMPLE);
    }

    #[test]
    fn internal_error_outcome_is_500() {
        let result = ProbeResult::new(
            "http://example.com",
            ProbeOutcome::InternalError { message: "task panicked".into() },
        );
        let resp = result_response(&result);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let v: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(v["status"], "error");
        assert_eq!(v["error_message"], "task panicked");
    }

    #[test]
    fn target_failures_stay_200() {
        let result = ProbeResult::new(
            "http://127.0.0.1:1",
            ProbeOutcome::TransportError { message: "connection refused".into() },
        );
        assert_eq!(result_response(&result).status(), StatusCode::OK);
        let result = ProbeResult::new(
            "http://example.com/missing",
            ProbeOutcome::HttpError { status_code: 404, message: "HTTP Error 404: Not Found".into() },
        );
        assert_eq!(result_response(&result).status(), StatusCode::OK);
    }

    #[test]
    fn first_param_missing_is_none() {
        let p = params(&[("target", "http://a")]);
        assert_eq!(first_param(&p, "url"), None);
    }
}
