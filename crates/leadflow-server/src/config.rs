//! Environment-driven server configuration.
//!
//! - `PORT`: listen port (default 3000)
//! - `LEADS_FILE`: path of the JSON store (default `leads.json`)
//!
//! Unset and empty variables both fall back to the default.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LEADS_FILE: &str = "leads.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub leads_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            leads_file: PathBuf::from(DEFAULT_LEADS_FILE),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match set("PORT") {
            Some(value) => match value.trim().parse() {
                Ok(port) => port,
                Err(source) => return Err(ConfigError::InvalidPort { value, source }),
            },
            None => DEFAULT_PORT,
        };
        let leads_file = set("LEADS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEADS_FILE));

        Ok(ServerConfig { port, leads_file })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
