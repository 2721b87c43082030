//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn decode(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

fn trace_header(response: &HttpResponse) -> Option<String> {
    response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ASCII header").to_owned())
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("contact store error: relation missing")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"sql": "SELECT"}));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace_header(&response), Some(expected_trace_id.clone()));

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn validation_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("name must be unique")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"field": "name", "code": "duplicate_name"}));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = decode(response).await;
    assert_eq!(payload.message(), "name must be unique");
    assert_eq!(
        payload.details(),
        Some(&json!({"field": "name", "code": "duplicate_name"}))
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::not_found("person not found");

    let response = ResponseError::error_response(&error);

    assert!(trace_header(&response).is_none());
    let payload = decode(response).await;
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}

#[rstest]
#[case(JsonPayloadError::ContentType, "content type must be application/json")]
#[case(
    JsonPayloadError::Overflow { limit: 16 },
    "request body too large"
)]
fn json_payload_errors_become_bad_requests(
    #[case] payload_error: JsonPayloadError,
    #[case] message: &str,
) {
    let request = TestRequest::default().to_http_request();

    let err = json_error_handler(payload_error, &request);

    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let domain = err
        .as_error::<Error>()
        .expect("handler wraps a domain error");
    assert_eq!(domain.message(), message);
}
