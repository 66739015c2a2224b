use crate::{ApiError, AppState, HeaderSource};

use whoami_core::Identity;

use std::io::{self, Write};

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use log::{debug, error};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// GET /whoami - identity of the user the proxy authenticated
pub async fn whoami(State(state): State<AppState>, method: Method, headers: HeaderMap) -> Response {
    if method != Method::GET {
        debug!("Rejecting {} /whoami", method);
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match state.provider.identify(&HeaderSource::new(&headers)) {
        Ok(identity) => identity_response(&identity),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Serialize an identity into a 200 response.
///
/// The body is fully encoded before the status line is produced, so an
/// encoding failure still turns into a clean 500.
pub fn identity_response(identity: &Identity) -> Response {
    let mut body = Vec::with_capacity(512);

    match write_identity(identity, &mut body) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Error encoding JSON response for {}: {}", identity.id, e);
            ApiError::internal(format!("Error encoding JSON response: {}", e)).into_response()
        }
    }
}

/// Write an identity as two-space indented JSON followed by a newline
pub fn write_identity<W: Write>(identity: &Identity, mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, identity)?;
    out.write_all(b"\n")
}
