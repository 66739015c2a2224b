use whoami_config::Config;
use whoami_core::{AttributeMapping, DefaultRoleResolver, IdentityProvider, IdentityResolver};

use std::sync::Arc;

use log::info;

/// Shared, read-only state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(build_resolver(config)))
    }
}

/// Convert configuration into the identity resolver
pub fn build_resolver(config: &Config) -> IdentityResolver {
    let headers = &config.headers;
    let mapping = AttributeMapping {
        principal: headers.eppn.clone(),
        email: headers.email.clone(),
        display_name: headers.display_name.clone(),
        given_name: headers.given_name.clone(),
        family_name: headers.last_name.clone(),
        locators: headers.locators.clone(),
    };

    let resolver = IdentityResolver::new(mapping)
        .with_user_base_uri(config.identity.user_base_url.as_str())
        .with_jsonld_context(config.identity.jsonld_context.as_str());

    if !config.roles.enabled {
        return resolver;
    }

    info!(
        "Granting default roles [{}] to every identity",
        config.roles.defaults.join(", ")
    );
    resolver.with_role_resolver(Arc::new(DefaultRoleResolver::new(
        config.roles.base_url.as_str(),
        config.roles.defaults.clone(),
    )))
}
