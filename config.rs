//! Configuration management with environment variable support.
//!
//! This module provides [`Config`] for loading and validating VeilPack
//! settings from JSON files and environment variables.
//!
//! The cipher passphrase lives here rather than as a baked-in literal so the
//! pipeline can be driven with arbitrary keys without rebuilding. The default
//! matches the passphrase of the original artifacts, so blobs produced with
//! no configuration at all stay decodable.
//!
//! ## Environment Variables
//!
//! - `VEILPACK_PASSPHRASE`: Override the cipher passphrase
//! - `VEILPACK_CONFIG`: Override config file path

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable names for configuration overrides
pub const ENV_PASSPHRASE: &str = "VEILPACK_PASSPHRASE";
pub const ENV_CONFIG_PATH: &str = "VEILPACK_CONFIG";

/// Passphrase used when no config file or override is present.
/// Format constant of the original artifacts.
pub const DEFAULT_PASSPHRASE: &str = "System.Reflection";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub passphrase: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            passphrase: DEFAULT_PASSPHRASE.to_string(),
        }
    }
}

impl Config {
    /// Load config from file path
    pub fn load(path: &str) -> Result<Self> {
        let s =
            fs::read_to_string(path).with_context(|| format!("reading config file {}", path))?;
        let mut config: Config = serde_json::from_str(&s)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load config with environment variable overrides
    /// Priority: ENV vars > config file > defaults
    pub fn load_with_env(path: Option<&str>) -> Result<Self> {
        // Check for config path from environment
        let config_path = path
            .map(String::from)
            .or_else(|| env::var(ENV_CONFIG_PATH).ok());

        let mut config = match config_path {
            Some(ref p) if Path::new(p).exists() => {
                info!(path = p, "loading config from file");
                let s = fs::read_to_string(p)
                    .with_context(|| format!("reading config file {}", p))?;
                serde_json::from_str(&s)?
            }
            _ => {
                debug!("using default configuration");
                Config::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to config
    fn apply_env_overrides(&mut self) {
        if let Ok(passphrase) = env::var(ENV_PASSPHRASE) {
            debug!("overriding passphrase from environment");
            self.passphrase = passphrase;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.passphrase.is_empty() {
            anyhow::bail!("passphrase cannot be empty");
        }
        Ok(())
    }

    /// Create a new config with an explicit passphrase
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }
}
