// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::SettingsBag;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (error, warn, info, debug, trace); RUST_LOG overrides it
    #[serde(default = "default_level")]
    pub level: String,

    /// Append log output to this file instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Codec used when a command doesn't name one
    #[serde(default = "default_codec")]
    pub codec: String,

    /// Settings applied on top of handler defaults, keyed by settings key
    /// (e.g. "Codec.DNxHR.Profile" = "dnxhr_hq")
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_codec() -> String {
    "dnxhd".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            codec: default_codec(),
            settings: BTreeMap::new(),
        }
    }
}

impl DefaultsConfig {
    /// Write configured overrides into `settings` as user values
    pub fn apply_to(&self, settings: &mut SettingsBag) {
        for (key, value) in &self.settings {
            settings.set_string(key, value.as_str());
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("ffhandlers")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("ffhandlers")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save_to(&config_path) {
                eprintln!("Warning: Could not create default config file: {:#}", e);
                eprintln!(
                    "Using built-in defaults. Run 'ffhandlers init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Create a default config file if it doesn't exist
    pub fn ensure_default() -> Result<()> {
        if !Self::exists() {
            Config::default().save()?;
        }
        Ok(())
    }
}
