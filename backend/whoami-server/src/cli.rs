use crate::error::Result as ServerResult;

use whoami_config::{Config, HeadersConfig};

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "user-service")]
#[command(about = "Provides an http endpoint for determining user info based on shibboleth headers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the user service web service
    Serve(ServeArgs),
}

/// Flags override config.toml and environment values
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port for serving http user service
    #[arg(long)]
    pub port: Option<u16>,

    /// JSON-LD context URI
    #[arg(long)]
    pub context: Option<String>,

    #[arg(long)]
    pub eppn_header: Option<String>,

    #[arg(long)]
    pub display_name_header: Option<String>,

    #[arg(long)]
    pub email_header: Option<String>,

    #[arg(long)]
    pub given_name_header: Option<String>,

    #[arg(long)]
    pub last_name_header: Option<String>,

    /// Comma-separated list of headers to use as locators ("" for none)
    #[arg(long)]
    pub locator_headers: Option<String>,

    /// BaseURL for User resources
    #[arg(long)]
    pub user_base_url: Option<String>,

    /// BaseURL for role resources
    #[arg(long)]
    pub role_base_url: Option<String>,

    /// Comma-separated roles granted to every user; enables role lookup
    #[arg(long)]
    pub default_roles: Option<String>,
}

impl ServeArgs {
    /// Load config.toml and the environment, then layer these flags on top.
    pub fn load_config(&self) -> ServerResult<Config> {
        self.configure(Config::load()?)
    }

    /// Apply the flags to `config` and validate the result.
    pub fn configure(&self, mut config: Config) -> ServerResult<Config> {
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        set(&self.host, &mut config.server.host);
        if let Some(port) = self.port {
            config.server.port = port;
        }

        set(&self.context, &mut config.identity.jsonld_context);
        set(&self.user_base_url, &mut config.identity.user_base_url);

        set(&self.eppn_header, &mut config.headers.eppn);
        set(&self.display_name_header, &mut config.headers.display_name);
        set(&self.email_header, &mut config.headers.email);
        set(&self.given_name_header, &mut config.headers.given_name);
        set(&self.last_name_header, &mut config.headers.last_name);
        if let Some(locators) = &self.locator_headers {
            config.headers.locators = Some(HeadersConfig::parse_list(locators));
        }

        set(&self.role_base_url, &mut config.roles.base_url);
        if let Some(roles) = &self.default_roles {
            config.roles.defaults = HeadersConfig::parse_list(roles);
            config.roles.enabled = true;
        }
    }
}

fn set(flag: &Option<String>, target: &mut String) {
    if let Some(value) = flag {
        *target = value.clone();
    }
}
