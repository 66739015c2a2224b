use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    HeadersConfig, IdentityConfig, LogLevel, LoggingConfig, RolesConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub identity: IdentityConfig,
    pub headers: HeadersConfig,
    pub roles: RolesConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for USER_SERVICE_CONFIG_DIR env var, else use ./.whoami/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: USER_SERVICE_CONFIG_DIR env var > ./.whoami/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.headers.validate()?;
        self.roles.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  identity: base='{}', context='{}'",
            self.identity.user_base_url, self.identity.jsonld_context
        );
        info!(
            "  headers: eppn='{}', email='{}', display_name='{}', given_name='{}', last_name='{}'",
            self.headers.eppn,
            self.headers.email,
            self.headers.display_name,
            self.headers.given_name,
            self.headers.last_name
        );

        match &self.headers.locators {
            Some(locators) if locators.is_empty() => info!("  locators: disabled"),
            Some(locators) => info!("  locators: {}", locators.join(",")),
            None => info!("  locators: built-in defaults"),
        }

        if self.roles.enabled {
            info!(
                "  roles: base='{}', defaults={}",
                self.roles.base_url,
                self.roles.defaults.join(",")
            );
        } else {
            info!("  roles: disabled");
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("USER_SERVICE_HOST", &mut self.server.host);
        Self::apply_env_parse("USER_SERVICE_PORT", &mut self.server.port);

        // Identity
        Self::apply_env_string(
            "USER_SERVICE_USER_BASEURL",
            &mut self.identity.user_base_url,
        );
        Self::apply_env_string(
            "USER_SERVICE_JSONLD_CONTEXT",
            &mut self.identity.jsonld_context,
        );

        // Headers
        Self::apply_env_string("SHIB_HEADER_EPPN", &mut self.headers.eppn);
        Self::apply_env_string("SHIB_HEADER_EMAIL", &mut self.headers.email);
        Self::apply_env_string("SHIB_HEADER_DISPLAYNAME", &mut self.headers.display_name);
        Self::apply_env_string("SHIB_HEADER_GIVEN_NAME", &mut self.headers.given_name);
        Self::apply_env_string("SHIB_HEADER_LAST_NAME", &mut self.headers.last_name);
        if let Ok(val) = std::env::var("SHIB_HEADERS_LOCATOR") {
            self.headers.locators = Some(HeadersConfig::parse_list(&val));
        }

        // Roles
        Self::apply_env_bool("USER_SERVICE_ROLES_ENABLED", &mut self.roles.enabled);
        Self::apply_env_string("USER_SERVICE_ROLE_BASEURL", &mut self.roles.base_url);
        if let Ok(val) = std::env::var("USER_SERVICE_DEFAULT_ROLES") {
            self.roles.defaults = HeadersConfig::parse_list(&val);
        }

        // Logging
        if let Ok(val) = std::env::var("USER_SERVICE_LOG_LEVEL") {
            self.logging.level = LogLevel::parse_lenient(&val);
        }
        Self::apply_env_bool("USER_SERVICE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("USER_SERVICE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
