mod config;
mod error;
mod headers_config;
mod identity_config;
mod log_level;
mod logging_config;
mod roles_config;
mod server_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use headers_config::HeadersConfig;
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use roles_config::RolesConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "USER_SERVICE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".whoami";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8091;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
