#![allow(dead_code)]

//! Test infrastructure for whoami-server integration tests

use whoami_config::Config;
use whoami_core::{CoreResult, Identity, Role};
use whoami_server::{AppState, build_resolver, build_router};

use std::sync::Arc;

use axum_test::TestServer;

pub const USER_BASE: &str = "http://example.org/fcrepo/rest/";

/// Create a TestServer for the given configuration
pub fn create_test_server(config: &Config) -> TestServer {
    TestServer::new(build_router(AppState::from_config(config)))
        .expect("Failed to create test server")
}

/// Create a TestServer whose role lookup always fails
pub fn create_failing_roles_server(config: &Config) -> TestServer {
    let failing = |_: &Identity| -> CoreResult<Vec<Role>> {
        Err(whoami_core::CoreError::directory("directory unavailable"))
    };
    let resolver = build_resolver(config).with_role_resolver(Arc::new(failing));

    TestServer::new(build_router(AppState::new(Arc::new(resolver))))
        .expect("Failed to create test server")
}
