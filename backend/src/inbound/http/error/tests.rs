//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};

use crate::domain::TraceId;

#[fixture]
fn trace_id() -> TraceId {
    "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("fixture is a valid UUID")
}

async fn decode_response(
    error: &Error,
    expected_status: StatusCode,
    expected_header: Option<String>,
) -> Error {
    let response = ResponseError::error_response(error);
    assert_eq!(response.status(), expected_status);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace-id is ascii").to_owned());
    assert_eq!(header, expected_header);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialises")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("no such page"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(trace_id: TraceId) {
    let error = Error::internal("relation \"donuts\" does not exist").with_trace_id(trace_id);

    let payload = decode_response(
        &error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(trace_id.to_string()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(trace_id));
}

#[rstest]
#[actix_web::test]
async fn unavailable_errors_keep_their_message(trace_id: TraceId) {
    let error = Error::service_unavailable("catalogue repository unavailable")
        .with_trace_id(trace_id);

    let payload = decode_response(
        &error,
        StatusCode::SERVICE_UNAVAILABLE,
        Some(trace_id.to_string()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(payload.message(), "catalogue repository unavailable");
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_the_header() {
    let payload =
        decode_response(&Error::invalid_request("bad"), StatusCode::BAD_REQUEST, None).await;

    assert_eq!(payload.trace_id(), None);
    assert_eq!(payload.message(), "bad");
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
}
