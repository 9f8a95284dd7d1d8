//! Drill configuration
//!
//! Handles loading configuration from TOML files, environment variables, and
//! default values, merged with figment. The defaults reproduce the shipped
//! drill setup: scan this binary's namespace and bind the removal capability
//! to the aggressive implementation by override.

use std::env;
use std::path::{Path, PathBuf};

use bindery::Overrides;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, DEFAULT_NAMESPACE,
    DEFAULT_ROOM,
};
use crate::error::{Error, Result};
use crate::logging::parse_log_level;
use crate::ports::Removal;

/// Logging configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Top-level drill configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Namespace scanned for capability implementations
    pub namespace: String,
    /// Room the drill runs over
    pub room: String,
    /// Capability overrides (capability name to implementation name)
    pub overrides: Overrides,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            room: DEFAULT_ROOM.to_string(),
            overrides: Overrides::new().assign::<dyn Removal>("aggressive"),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader service
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `DrillConfig::default()`
    /// 2. TOML configuration file (if one exists)
    /// 3. Environment variables with prefix (e.g. `DECON_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<DrillConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(DrillConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("Configuration loaded from {}", default_path.display());
        }

        // Underscore as separator for nested keys (e.g. DECON_OVERRIDES_REMOVAL)
        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("_"));

        let config: DrillConfig = figment
            .extract()
            .map_err(|e| Error::configuration_with_source("Failed to extract configuration", e))?;

        validate_drill_config(&config)?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &DrillConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| {
            Error::configuration_with_source("Failed to serialize config to TOML", e)
        })?;

        std::fs::write(path.as_ref(), toml_string)
            .map_err(|e| Error::configuration_with_source("Failed to write config file", e))?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find a default configuration file, if one exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate drill configuration
fn validate_drill_config(config: &DrillConfig) -> Result<()> {
    if config.namespace.trim().is_empty() {
        return Err(Error::configuration("Namespace cannot be empty"));
    }
    if config.room.trim().is_empty() {
        return Err(Error::configuration("Room name cannot be empty"));
    }
    parse_log_level(&config.logging.level)?;
    Ok(())
}
