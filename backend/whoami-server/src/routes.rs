use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{any, get},
};

/// Build the application router.
///
/// `/whoami` is registered for every method so the handler, not the router,
/// decides what "method not allowed" looks like.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/whoami", any(api::whoami::whoami))
        .route("/live", get(health::liveness))
        .with_state(state)
}
