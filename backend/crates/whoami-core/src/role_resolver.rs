use crate::{CoreResult, Identity, Role};

/// Looks up the roles held by a (partially built) identity.
///
/// Implementations backed by a remote directory own their timeout and retry
/// policy; the resolver calls `lookup` once and treats any error as terminal.
pub trait RoleResolver: Send + Sync {
    fn lookup(&self, identity: &Identity) -> CoreResult<Vec<Role>>;
}

impl<F> RoleResolver for F
where
    F: Fn(&Identity) -> CoreResult<Vec<Role>> + Send + Sync,
{
    fn lookup(&self, identity: &Identity) -> CoreResult<Vec<Role>> {
        self(identity)
    }
}

/// Grants the same configured roles to every identity
#[derive(Debug, Clone, Default)]
pub struct DefaultRoleResolver {
    pub base_uri: String,
    pub default_roles: Vec<String>,
}

impl DefaultRoleResolver {
    pub fn new<S: Into<String>>(base_uri: S, default_roles: Vec<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            default_roles,
        }
    }
}

impl RoleResolver for DefaultRoleResolver {
    fn lookup(&self, _identity: &Identity) -> CoreResult<Vec<Role>> {
        Ok(self
            .default_roles
            .iter()
            .map(|name| Role::new(self.base_uri.as_str(), name.as_str()))
            .collect())
    }
}
