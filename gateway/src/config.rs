//! Process configuration, read once at startup.
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded by the binary first), then defaults.

use std::net::SocketAddr;

use clap::Parser;
use thiserror::Error;
use url::Url;

pub const DEFAULT_EXTERNAL_API_URL: &str = "https://api-externa.com/clientes";

/// Clientes gateway
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the external client API
    #[clap(long, env = "EXTERNAL_API_URL", default_value = DEFAULT_EXTERNAL_API_URL)]
    pub external_api_url: String,

    /// Deployment mode; "development" enables debug logging
    #[clap(long, env = "APP_ENV", default_value = "production")]
    pub app_env: String,

    /// Address to listen on
    #[clap(short, long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Enable verbose logging (can be specified multiple times)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Result<Config, ConfigError> {
        Ok(Config::new(&self.external_api_url)?.with_debug(self.app_env == "development"))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid external API URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("external API URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Immutable settings shared by the service for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub external_api_url: String,
    pub debug: bool,
}

impl Config {
    pub fn new(external_api_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(external_api_url).map_err(|source| ConfigError::InvalidUrl {
            url: external_api_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        Ok(Self {
            external_api_url: external_api_url.to_string(),
            debug: false,
        })
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
