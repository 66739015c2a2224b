use crate::{ConfigError, ConfigErrorResult};

use http::HeaderName;
use serde::Deserialize;

/// Names of the headers the authentication proxy asserts attributes in.
///
/// Empty strings mean "use the built-in name". `locators` is optional on
/// purpose: leaving it out uses the built-in locator list, while
/// `locators = []` turns locators off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    pub eppn: String,
    pub email: String,
    pub display_name: String,
    pub given_name: String,
    pub last_name: String,
    pub locators: Option<Vec<String>>,
}

impl HeadersConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let named = [
            ("headers.eppn", &self.eppn),
            ("headers.email", &self.email),
            ("headers.display_name", &self.display_name),
            ("headers.given_name", &self.given_name),
            ("headers.last_name", &self.last_name),
        ];

        for (key, name) in named {
            if !name.is_empty() {
                Self::validate_header_name(key, name)?;
            }
        }

        if let Some(locators) = &self.locators {
            for (i, name) in locators.iter().enumerate() {
                if name.trim().is_empty() {
                    return Err(ConfigError::headers(format!(
                        "headers.locators[{}] cannot be blank",
                        i
                    )));
                }
                Self::validate_header_name("headers.locators", name)?;
            }
        }

        Ok(())
    }

    /// Parse a comma-separated header list. An empty string is an explicit
    /// empty list.
    pub fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }

    fn validate_header_name(key: &str, name: &str) -> ConfigErrorResult<()> {
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            ConfigError::headers(format!("{} is not a valid header name: '{}'", key, name))
        })?;
        Ok(())
    }
}
