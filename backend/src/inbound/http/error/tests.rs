//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const CORRELATION_ID: &str = "req-0001";

#[fixture]
fn internal_error_case() -> Error {
    Error::internal("connection string postgres://secret")
        .with_correlation_id(CORRELATION_ID)
        .with_details(json!({"secret": "x"}))
}

#[rstest]
#[case(Error::invalid_request("Missing Id"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("Word not found"), StatusCode::NOT_FOUND)]
#[case(Error::storage("Error getting word: timeout"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::service_unavailable("pool exhausted"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn body_of(error: &Error) -> (actix_web::http::header::HeaderMap, Value) {
    let response = ResponseError::error_response(error);
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (headers, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error_case: Error) {
    let (headers, body) = body_of(&internal_error_case).await;

    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["correlationId"], CORRELATION_ID);
    assert!(body.get("details").is_none());
    assert_eq!(
        headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(CORRELATION_ID)
    );
}

#[rstest]
#[actix_web::test]
async fn storage_errors_keep_backend_diagnostics() {
    let error = Error::storage("Error searching for words: relation missing");
    let (_, body) = body_of(&error).await;

    assert_eq!(body["code"], "storage_failure");
    assert_eq!(body["message"], "Error searching for words: relation missing");
}

#[rstest]
#[actix_web::test]
async fn validation_details_are_forwarded() {
    let error = Error::invalid_request("validation failed")
        .with_details(json!({"errors": [{"field": "value"}]}));
    let (headers, body) = body_of(&error).await;

    assert_eq!(body["details"]["errors"][0]["field"], "value");
    assert!(headers.get(CORRELATION_ID_HEADER).is_none());
}

#[rstest]
#[actix_web::test]
async fn malformed_json_bodies_become_invalid_requests() {
    use actix_web::{App, HttpResponse, test, web};

    let app = test::init_service(App::new().app_data(json_config()).route(
        "/",
        web::post().to(|_: web::Json<Value>| async { HttpResponse::Ok().finish() }),
    ))
    .await;
    let req = test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}
