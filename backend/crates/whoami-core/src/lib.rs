pub mod attribute_mapping;
pub mod attribute_source;
pub mod error;
pub mod identity;
pub mod identity_resolver;
pub mod role;
pub mod role_resolver;

pub use attribute_mapping::{AttributeMapping, DEFAULT_ATTRIBUTE_NAMES, DefaultAttributeNames};
pub use attribute_source::AttributeSource;
pub use error::{CoreError, CoreResult};
pub use identity::{IDENTITY_KIND, Identity};
pub use identity_resolver::{IdentityProvider, IdentityResolver};
pub use role::Role;
pub use role_resolver::{DefaultRoleResolver, RoleResolver};

#[cfg(test)]
mod tests;
