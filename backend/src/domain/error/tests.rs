//! Regression coverage for domain errors.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::storage("disk"), ErrorCode::StorageFailure)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_message_falls_back_to_code_message(#[case] message: &str) {
    let error = Error::not_found(message);
    assert_eq!(error.message(), "not found");
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let error = Error::invalid_request("bad");
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(value, json!({ "code": "invalid_request", "message": "bad" }));
}

#[rstest]
fn serialises_details_and_correlation_id() {
    let error = Error::storage("Error getting word: timeout")
        .with_correlation_id("abc")
        .with_details(json!({ "id": "w1" }));
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "storage_failure",
            "message": "Error getting word: timeout",
            "correlationId": "abc",
            "details": { "id": "w1" }
        })
    );
}

#[rstest]
#[tokio::test]
async fn captures_correlation_id_in_scope() {
    let id = CorrelationId::new("req-42").expect("valid id");
    let error = CorrelationId::scope(id, async { Error::internal("boom") }).await;
    assert_eq!(error.correlation_id(), Some("req-42"));
}

#[rstest]
fn no_correlation_id_out_of_scope() {
    assert!(Error::internal("boom").correlation_id().is_none());
}
