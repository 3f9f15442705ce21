//! Configuration management for letsdoit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, PARTICLES_DEFAULT_MAX, PARTICLES_DEFAULT_SPAWN_MS, PARTICLES_MAX_LIMIT, PARTICLES_MIN_SPAWN_MS,
};
use crate::tasks::Theme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub particles: ParticlesConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme used until one has been chosen and saved
    /// Options: "dark", "light", "navy"
    pub default_theme: Theme,
    /// Whether the completed list starts expanded
    pub show_completed: bool,
    /// Enable mouse capture
    pub mouse_enabled: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clock format in the footer
    pub time_format: String,
    /// Date format in the footer
    pub date_format: String,
    /// Time format next to completed tasks
    pub completed_time_format: String,
}

/// Ambient particle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Draw rising bubbles behind the task list
    pub enabled: bool,
    /// Upper bound on bubbles alive at once
    pub max_particles: usize,
    /// Milliseconds between newly spawned bubbles
    pub spawn_interval_ms: u64,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file; defaults to the platform data directory
    pub path: Option<PathBuf>,
    /// Keep everything in memory for this session
    pub ephemeral: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file as well as the in-app log view
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Dark,
            show_completed: false,
            mouse_enabled: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: datetime::CLOCK_TIME_FORMAT.to_string(),
            date_format: datetime::CLOCK_DATE_FORMAT.to_string(),
            completed_time_format: datetime::COMPLETED_TIME_FORMAT.to_string(),
        }
    }
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_particles: PARTICLES_DEFAULT_MAX,
            spawn_interval_ms: PARTICLES_DEFAULT_SPAWN_MS,
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

impl LoggingConfig {
    /// Parsed log level filter
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
        let current_dir_config = PathBuf::from("letsdoit.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("letsdoit").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.particles.max_particles == 0 || self.particles.max_particles > PARTICLES_MAX_LIMIT {
            anyhow::bail!(
                "max_particles must be between 1 and {}, got {}",
                PARTICLES_MAX_LIMIT,
                self.particles.max_particles
            );
        }

        if self.particles.spawn_interval_ms < PARTICLES_MIN_SPAWN_MS {
            anyhow::bail!(
                "spawn_interval_ms must be at least {}, got {}",
                PARTICLES_MIN_SPAWN_MS,
                self.particles.spawn_interval_ms
            );
        }

        // Validate date/time formats
        for (name, format) in [
            ("time_format", &self.display.time_format),
            ("date_format", &self.display.date_format),
            ("completed_time_format", &self.display.completed_time_format),
        ] {
            if !datetime::is_valid_format(format) {
                anyhow::bail!("Invalid {} '{}'", name, format);
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Database path to use when not ephemeral
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => Ok(crate::storage::LocalStorage::default_path()?),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# letsdoit Configuration File\n# Generated on {}\n\n",
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
            .map(|dir| dir.join("letsdoit"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
