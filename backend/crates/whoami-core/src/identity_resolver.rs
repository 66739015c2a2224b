use crate::{AttributeMapping, AttributeSource, CoreError, CoreResult, Identity, RoleResolver};

use std::sync::Arc;

use log::debug;

/// Anything that can turn a request's asserted attributes into an identity
pub trait IdentityProvider: Send + Sync {
    fn identify(&self, source: &dyn AttributeSource) -> CoreResult<Identity>;
}

/// Builds identity records from asserted attributes.
///
/// Holds only read-only configuration, so one instance is shared by every
/// request without locking.
#[derive(Clone, Default)]
pub struct IdentityResolver {
    /// Prefix for identity ids, e.g. `http://archive.local/fcrepo/rest/users/`
    pub user_base_uri: String,
    /// JSON-LD context URI copied into every record
    pub jsonld_context: String,
    pub mapping: AttributeMapping,
    pub roles: Option<Arc<dyn RoleResolver>>,
}

impl IdentityResolver {
    pub fn new(mapping: AttributeMapping) -> Self {
        Self {
            mapping,
            ..Default::default()
        }
    }

    pub fn with_user_base_uri<S: Into<String>>(mut self, user_base_uri: S) -> Self {
        self.user_base_uri = user_base_uri.into();
        self
    }

    pub fn with_jsonld_context<S: Into<String>>(mut self, jsonld_context: S) -> Self {
        self.jsonld_context = jsonld_context.into();
        self
    }

    pub fn with_role_resolver(mut self, roles: Arc<dyn RoleResolver>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn resolve(&self, source: &dyn AttributeSource) -> CoreResult<Identity> {
        let principal = read(source, self.mapping.principal_field());

        let Some((_, domain)) = principal.split_once('@') else {
            return Err(CoreError::malformed_input(format!(
                "Eppn is expected to be user@domain, instead got '{}'",
                principal
            )));
        };

        let mut identity = Identity::new(format!("{}{}", self.user_base_uri, principal));
        identity.context = self.jsonld_context.clone();
        identity.display_name = read(source, self.mapping.display_name_field()).to_string();
        identity.first_name = read(source, self.mapping.given_name_field()).to_string();
        identity.last_name = read(source, self.mapping.family_name_field()).to_string();
        identity.email = read(source, self.mapping.email_field()).to_string();
        identity.locator_ids = self.locator_ids(source, domain);

        self.add_roles(&mut identity)?;

        debug!(
            "Resolved {} ({} locators, {} roles)",
            identity.id,
            identity.locator_ids.len(),
            identity.roles.len()
        );

        Ok(identity)
    }

    fn locator_ids(&self, source: &dyn AttributeSource, domain: &str) -> Vec<String> {
        self.mapping
            .locator_fields()
            .into_iter()
            .filter_map(|field| {
                let value = read(source, field);
                (!value.is_empty()).then(|| format!("{}:{}:{}", domain, field, value))
            })
            .collect()
    }

    fn add_roles(&self, identity: &mut Identity) -> CoreResult<()> {
        let Some(resolver) = &self.roles else {
            return Ok(());
        };

        let roles = resolver
            .lookup(identity)
            .map_err(|e| CoreError::role_lookup_failed(identity.id.as_str(), e))?;

        identity.merge_roles(roles.iter().map(|role| role.simple_name()));

        Ok(())
    }
}

impl IdentityProvider for IdentityResolver {
    fn identify(&self, source: &dyn AttributeSource) -> CoreResult<Identity> {
        self.resolve(source)
    }
}

fn read<'a>(source: &'a dyn AttributeSource, name: &str) -> &'a str {
    source.get(name).unwrap_or_default()
}
