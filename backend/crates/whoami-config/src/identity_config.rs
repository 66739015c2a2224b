use serde::Deserialize;

/// How resolved identities are addressed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Prefix prepended to the principal to form `@id`
    pub user_base_url: String,
    /// JSON-LD context URI emitted as `@context`
    pub jsonld_context: String,
}
