//! Process settings
//!
//! Immutable after startup: CLI arguments provide the base values and
//! environment variables override them, so container users can reconfigure
//! between restarts without touching the command line.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing::warn;

use super::{DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_PORT};

static SETTINGS: OnceCell<Arc<Settings>> = OnceCell::new();

/// Environment overrides
const ENV_HOST: &str = "EXPLORER_HOST";
const ENV_PORT: &str = "EXPLORER_PORT";
const ENV_DATA_DIR: &str = "EXPLORER_DATA_DIR";

/// Process-wide configuration, fixed before the server binds
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Directory searched for the dataset CSV
    pub data_dir: PathBuf,
    /// Optional directory with a replacement web client
    pub client_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            client_dir: None,
        }
    }
}

impl Settings {
    /// Build settings from CLI values, then apply environment overrides
    pub fn new(host: String, port: u16, data_dir: PathBuf, client_dir: Option<PathBuf>) -> Self {
        let mut settings = Self {
            host,
            port,
            data_dir,
            client_dir,
        };
        settings.apply_env();
        settings
    }

    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var(ENV_HOST) {
            if !host.trim().is_empty() {
                self.host = host.trim().to_string();
            }
        }

        if let Ok(port) = std::env::var(ENV_PORT) {
            match parse_port(&port) {
                Some(port) => self.port = port,
                None => warn!("Ignoring invalid {}={:?}", ENV_PORT, port),
            }
        }

        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if !dir.trim().is_empty() {
                self.data_dir = PathBuf::from(dir.trim());
            }
        }
    }

    /// Install the settings singleton
    pub fn init(self) -> Arc<Settings> {
        SETTINGS.get_or_init(|| Arc::new(self)).clone()
    }

    /// Get the global settings instance
    pub fn get() -> Result<Arc<Settings>> {
        SETTINGS
            .get()
            .map(Arc::clone)
            .context("Settings not initialized")
    }

    /// Address string for the HTTP server bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a port value from the environment; zero is not a usable port
fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok().filter(|p| *p != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8050);
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.bind_addr(), "0.0.0.0:8050");
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8051"), Some(8051));
        assert_eq!(parse_port(" 9000 "), Some(9000));
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("not-a-port"), None);
        assert_eq!(parse_port("70000"), None);
    }
}
