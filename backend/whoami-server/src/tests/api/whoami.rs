use crate::{AppState, JSON_CONTENT_TYPE, build_router, identity_response, write_identity};

use whoami_core::{AttributeSource, CoreError, CoreResult, Identity, IdentityProvider};

use std::io::{self, Write};
use std::sync::Arc;

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Provider that ignores the request and returns a canned outcome
struct FakeProvider(fn() -> CoreResult<Identity>);

impl IdentityProvider for FakeProvider {
    fn identify(&self, _source: &dyn AttributeSource) -> CoreResult<Identity> {
        (self.0)()
    }
}

fn state_with(outcome: fn() -> CoreResult<Identity>) -> AppState {
    AppState::new(Arc::new(FakeProvider(outcome)))
}

async fn call(state: AppState, method: Method) -> axum::response::Response {
    build_router(state)
        .oneshot(
            Request::builder()
                .method(method)
                .uri("/whoami")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn given_non_get_method_when_called_then_405_without_body() {
    for method in [Method::POST, Method::DELETE, Method::PUT, Method::PATCH, Method::HEAD] {
        let response = call(state_with(|| Ok(Identity::new("x"))), method.clone()).await;

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "method {method} should not be allowed"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn given_bad_input_when_called_then_400() {
    let response = call(
        state_with(|| Err(CoreError::malformed_input("Nooo"))),
        Method::GET,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Nooo");
}

#[tokio::test]
async fn given_internal_error_when_called_then_500() {
    let response = call(
        state_with(|| Err(CoreError::directory("Boooo"))),
        Method::GET,
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn given_identity_when_called_then_json_round_trips() {
    let response = call(
        state_with(|| {
            let mut identity = Identity::new("foo:/bar");
            identity.email = "foo@example.org".into();
            identity.roles = vec!["butcher".into(), "baker".into()];
            Ok(identity)
        }),
        Method::GET,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let returned: Identity = serde_json::from_slice(&body).unwrap();
    assert_eq!(returned.id, "foo:/bar");
    assert_eq!(returned.email, "foo@example.org");
    assert_eq!(returned.roles, vec!["butcher", "baker"]);
}

#[test]
fn given_identity_when_written_then_indented_and_sparse() {
    let mut out = Vec::new();

    write_identity(&Identity::new("foo:/bar"), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "{\n  \"@id\": \"foo:/bar\",\n  \"@type\": \"User\"\n}\n");
}

struct CannotWrite;

impl Write for CannotWrite {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "Couldn't write"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_broken_writer_when_written_then_error_reported() {
    let result = write_identity(&Identity::new("foo:/bar"), CannotWrite);

    assert!(result.is_err());
}

#[test]
fn given_identity_when_response_built_then_200() {
    let response = identity_response(&Identity::new("foo:/bar"));

    assert_eq!(response.status(), StatusCode::OK);
}
