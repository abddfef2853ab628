//! Configuration for the server and the session store.
//!
//! Configuration is optional: with no file present every field falls back to
//! a sensible default, so `taskpad serve` works out of the box.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session identifier.
    pub cookie_name: String,
    /// Sliding session lifetime; refreshed on every resolved request.
    #[serde(with = "humantime_serde")]
    pub ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "taskpad_session".to_string(),
            ttl: Duration::from_secs(60 * 60 * 24),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file, falling back to
    /// defaults when no path is given. Missing keys take their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            None => Config::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.session.cookie_name.trim().is_empty() {
            return Err(Error::Config(
                "session.cookie_name must not be empty".to_string(),
            ));
        }
        if self.session.ttl.is_zero() {
            return Err(Error::Config("session.ttl must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.session.cookie_name, "taskpad_session");
        assert_eq!(config.session.ttl, Duration::from_secs(86400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let parsed: Config = toml::from_str(
            r#"
            [server]
            port = 3000

            [session]
            ttl = "1h"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.server.host, "127.0.0.1");
        assert_eq!(parsed.session.ttl, Duration::from_secs(3600));
        assert_eq!(parsed.session.cookie_name, "taskpad_session");
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhost = \"0.0.0.0\"\nport = 9000").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn empty_cookie_name_is_rejected() {
        let parsed: Config = toml::from_str("[session]\ncookie_name = \"  \"").unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let parsed: Config = toml::from_str("[session]\nttl = \"0s\"").unwrap();
        assert!(parsed.validate().is_err());
    }
}
