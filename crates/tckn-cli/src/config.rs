//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the library crates never see it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config PATH`, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for commands.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// How many numbers `generate` produces when no COUNT is given.
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(path) => path.clone(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse a TOML document into a config, filling gaps with defaults.
    fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).map_err(Into::into)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tckn.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("rs", "tckn", "tckn")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tckn.toml"))
    }
}
