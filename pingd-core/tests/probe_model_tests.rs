use pingd_core::probe::{ProbeOutcome, ProbeResult, elapsed_ms, round2};
use serde_json::Value;
use std::time::Duration;

fn to_value(result: &ProbeResult) -> Value {
    serde_json::to_value(result).unwrap()
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn success_carries_status_code_and_timing() {
    let result = ProbeResult::new(
        "http://example.com",
        ProbeOutcome::Success { status_code: 200, response_time_ms: 12.34 },
    );
    let v = to_value(&result);
    assert_eq!(v["url"], "http://example.com");
    assert_eq!(v["status"], "success");
    assert_eq!(v["status_code"], 200);
    assert_eq!(v["response_time_ms"], 12.34);
    assert!(v["timestamp"].as_f64().unwrap() > 0.0);
    assert!(v.get("error_message").is_none());
}

#[test]
fn http_error_reports_code_and_message() {
    let result = ProbeResult::new(
        "http://example.com/missing",
        ProbeOutcome::HttpError { status_code: 404, message: "HTTP Error 404: Not Found".into() },
    );
    let v = to_value(&result);
    assert_eq!(v["status"], "http_error");
    assert_eq!(v["error_code"], 404);
    assert_eq!(v["error_message"], "HTTP Error 404: Not Found");
    assert!(v.get("response_time_ms").is_none());
}

#[test]
fn transport_error_has_no_status_code() {
    let result = ProbeResult::new(
        "http://unreachable.invalid:1",
        ProbeOutcome::TransportError { message: "connection refused".into() },
    );
    let v = to_value(&result);
    assert_eq!(v["status"], "url_error");
    assert!(v.get("status_code").is_none());
    assert!(v.get("error_code").is_none());
    assert_eq!(result.http_status(), 200);
}

#[test]
fn internal_error_is_a_service_failure() {
    let result = ProbeResult::new(
        "http://example.com",
        ProbeOutcome::InternalError { message: "unexpected".into() },
    );
    let v = to_value(&result);
    assert_eq!(v["status"], "error");
    assert_eq!(result.http_status(), 500);
}

#[test]
fn field_order_is_url_status_then_timestamp() {
    let result = ProbeResult::new(
        "http://example.com",
        ProbeOutcome::Success { status_code: 204, response_time_ms: 1.0 },
    );
    let json = serde_json::to_string(&result).unwrap();
    let url = json.find("\"url\"").unwrap();
    let status = json.find("\"status\"").unwrap();
    let ts = json.find("\"timestamp\"").unwrap();
    assert!(url < status && status < ts, "unexpected order: {json}");
}

// =============================================================================
// Outcome helpers
// =============================================================================

#[test]
fn outcome_kinds_match_wire_tags() {
    assert_eq!(ProbeOutcome::Success { status_code: 200, response_time_ms: 0.0 }.kind(), "success");
    assert_eq!(ProbeOutcome::HttpError { status_code: 500, message: String::new() }.kind(), "http_error");
    assert_eq!(ProbeOutcome::TransportError { message: String::new() }.kind(), "url_error");
    assert_eq!(ProbeOutcome::InternalError { message: String::new() }.kind(), "error");
}

#[test]
fn status_code_only_when_target_answered() {
    assert_eq!(ProbeOutcome::HttpError { status_code: 503, message: String::new() }.status_code(), Some(503));
    assert_eq!(ProbeOutcome::TransportError { message: String::new() }.status_code(), None);
}

#[test]
fn elapsed_ms_rounds_to_two_decimals() {
    assert_eq!(elapsed_ms(Duration::from_micros(12_346)), 12.35);
    assert_eq!(elapsed_ms(Duration::ZERO), 0.0);
    assert_eq!(round2(1.0 / 3.0), 0.33);
}
