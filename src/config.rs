//! Configuration management for the date picker
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, PLATFORM_DATE_FORMAT, PLATFORM_TIME_FORMAT,
};
use crate::picker::{DialogMode, PlatformCapabilities, StyleSet};
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub platform: PlatformConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern of the date region
    pub date_format: String,
    /// strftime pattern of the time region
    pub time_format: String,
    /// strftime pattern of single-region fields (platform rendering when unset)
    pub format: Option<String>,
    /// Placeholder shown when a field has no value
    pub default_value_text: Option<String>,
    /// Dialog presentation: "calendar", "spinner" or "default"
    pub dialog_mode: DialogMode,
}

/// Host platform capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Close the dialog once a value is selected
    pub auto_dismiss: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Theme color names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub text: String,
    pub error: String,
    pub muted: String,
    pub value: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Level filter: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: PLATFORM_DATE_FORMAT.to_string(),
            time_format: PLATFORM_TIME_FORMAT.to_string(),
            format: None,
            default_value_text: None,
            dialog_mode: DialogMode::Default,
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            auto_dismiss: true,
            mouse_enabled: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text: "white".to_string(),
            error: "red".to_string(),
            muted: "gray".to_string(),
            value: "cyan".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl PlatformConfig {
    pub fn capabilities(&self) -> PlatformCapabilities {
        PlatformCapabilities {
            auto_dismiss: self.auto_dismiss,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_pattern("date_format", &self.display.date_format)?;
        validate_pattern("time_format", &self.display.time_format)?;
        if let Some(format) = &self.display.format {
            validate_pattern("format", format)?;
        }

        StyleSet::from_theme(&self.theme).context("Invalid theme")?;
        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Date picker configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

/// Reject strftime patterns chrono cannot format
fn validate_pattern(name: &str, pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("Invalid {} '{}'", name, pattern);
    }

    // Patterns can parse yet fail on a value without a timezone (%z, %Z, %+)
    let sample = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow::anyhow!("Could not build sample date"))?;
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(pattern)).is_err() {
        anyhow::bail!("{} '{}' cannot format a local date-time", name, pattern);
    }
    Ok(())
}
