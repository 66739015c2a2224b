pub mod api;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    header_source::HeaderSource,
    whoami::{JSON_CONTENT_TYPE, identity_response, whoami, write_identity},
};
pub use app_state::{AppState, build_resolver};
pub use cli::{Cli, Commands, ServeArgs};
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
