use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Static role assignment applied to every identity
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    pub enabled: bool,
    pub base_url: String,
    pub defaults: Vec<String>,
}

impl RolesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.defaults.is_empty() {
            return Err(ConfigError::roles(
                "roles.defaults must list at least one role when roles are enabled",
            ));
        }

        if let Some(blank) = self.defaults.iter().position(|r| r.trim().is_empty()) {
            return Err(ConfigError::roles(format!(
                "roles.defaults[{}] cannot be blank",
                blank
            )));
        }

        Ok(())
    }
}
