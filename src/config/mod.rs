//! Configuration Management
//!
//! Loads circq settings from TOML files with environment overrides.
//! Configuration includes:
//! - Buffer settings (initial capacity for command-line queues)
//! - Window settings (default replacement budget)
//! - Logging settings (filter level, JSON output)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::CircqError;
use crate::ring_buffer::MIN_CAPACITY;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Slots allocated by a fresh queue before any growth
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

fn default_initial_capacity() -> usize {
    MIN_CAPACITY
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Replacement budget used when the command line gives none
    #[serde(default)]
    pub replacements: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "warn" or "circq=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of the compact text format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from `path`, or from the default locations when
    /// `path` is `None`, then apply `CIRCQ_*` environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config: Config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                toml::from_str(&content).context("Failed to parse config")?
            }
            None => {
                let mut default_paths = vec![std::path::PathBuf::from("circq.toml")];
                if let Some(home) = dirs::home_dir() {
                    default_paths.push(home.join(".config/circq/config.toml"));
                }

                let mut loaded: Option<Config> = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        loaded = Some(toml::from_str(&content).with_context(|| {
                            format!("Failed to parse config {}", p.display())
                        })?);
                        break;
                    }
                }
                loaded.unwrap_or_default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `CIRCQ_*` variables. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(capacity) = std::env::var("CIRCQ_INITIAL_CAPACITY") {
            if let Ok(n) = capacity.parse::<usize>() {
                self.buffer.initial_capacity = n;
            }
        }
        if let Ok(replacements) = std::env::var("CIRCQ_REPLACEMENTS") {
            if let Ok(n) = replacements.parse::<usize>() {
                self.window.replacements = n;
            }
        }
        if let Ok(level) = std::env::var("CIRCQ_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(json) = std::env::var("CIRCQ_LOG_JSON") {
            if let Ok(b) = json.parse::<bool>() {
                self.logging.json = b;
            }
        }
    }

    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.buffer.initial_capacity == 0 {
            return Err(CircqError::Config(
                "buffer.initial_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
