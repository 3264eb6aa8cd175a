//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SCOOP_DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `SCOOP_HOST` - Bind address (default: 127.0.0.1)
//! - `SCOOP_PORT` - Listen port (default: 3000)
//! - `SCOOP_UPDATE_KEY_SOURCE` - Where the Update handler reads the order id
//!   from: `path` (default) or `body` (legacy clients that embed `Id` in the
//!   JSON body)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the Update handler finds the order identifier.
///
/// The original service shipped two parallel update endpoints, one keyed by
/// the path parameter and one by an `Id` field in the body. There is one
/// handler now; this setting selects which contract it speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateKeySource {
    /// Read the id from the `id` path parameter.
    #[default]
    Path,
    /// Read the id from the `Id` field of the JSON body.
    Body,
}

impl FromStr for UpdateKeySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "body" => Ok(Self::Body),
            other => Err(format!("expected 'path' or 'body', got '{other}'")),
        }
    }
}

/// Scoop API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Identifier source for the Update handler
    pub update_key_source: UpdateKeySource,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_env("SCOOP_DATABASE_URL")?.into();

        let host = optional_env("SCOOP_HOST")
            .map_or(Ok(IpAddr::from([127, 0, 0, 1])), |raw| {
                raw.parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("SCOOP_HOST".to_owned(), raw))
            })?;

        let port = optional_env("SCOOP_PORT").map_or(Ok(3000), |raw| {
            raw.parse()
                .map_err(|_| ConfigError::InvalidEnvVar("SCOOP_PORT".to_owned(), raw))
        })?;

        let update_key_source =
            optional_env("SCOOP_UPDATE_KEY_SOURCE").map_or(Ok(UpdateKeySource::default()), |raw| {
                raw.parse().map_err(|e: String| {
                    ConfigError::InvalidEnvVar("SCOOP_UPDATE_KEY_SOURCE".to_owned(), e)
                })
            })?;

        Ok(Self {
            database_url,
            host,
            port,
            update_key_source,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_key_source_parses() {
        assert_eq!("path".parse(), Ok(UpdateKeySource::Path));
        assert_eq!("body".parse(), Ok(UpdateKeySource::Body));
        assert_eq!("BODY".parse(), Ok(UpdateKeySource::Body));
    }

    #[test]
    fn test_update_key_source_rejects_unknown() {
        assert!("header".parse::<UpdateKeySource>().is_err());
    }

    #[test]
    fn test_update_key_source_default_is_path() {
        assert_eq!(UpdateKeySource::default(), UpdateKeySource::Path);
    }
}
