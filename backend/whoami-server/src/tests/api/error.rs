use crate::ApiError;
use crate::api::error::TEXT_CONTENT_TYPE;

use whoami_core::CoreError;

use axum::response::IntoResponse;
use http::{StatusCode, header};
use http_body_util::BodyExt;

#[tokio::test]
async fn given_malformed_input_when_converted_then_400_with_plain_message() {
    let error: ApiError = CoreError::malformed_input("Eppn is expected to be user@domain").into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        TEXT_CONTENT_TYPE
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Eppn is expected to be user@domain");
}

#[tokio::test]
async fn given_role_lookup_failure_when_converted_then_500_naming_identity() {
    let error: ApiError = CoreError::role_lookup_failed(
        "http://example.org/users/foo@example.org",
        CoreError::directory("unreachable"),
    )
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("http://example.org/users/foo@example.org"));
}

#[tokio::test]
async fn given_unclassified_failure_when_converted_then_500() {
    let error: ApiError = CoreError::directory("Boooo").into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Boooo");
}

#[test]
fn given_internal_error_when_displayed_then_location_included() {
    let error = ApiError::internal("Nooo");

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.to_string().starts_with("Internal error: Nooo"));
}
