//! Configuration module
//!
//! Handles finding, loading and layering configuration.

mod env;

pub use env::EnvConfig;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;
use crate::utils::logger::LogLevel;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./jasmine-console.yaml",
    "./jasmine-console.yml",
    "./.jasmine-console.yaml",
    "~/.config/jasmine-console/config.yaml",
];

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Emit ANSI color escapes
    pub colors: bool,

    /// Output format (text or json)
    pub format: String,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            colors: true,
            format: "text".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Layer configuration: CLI flag > environment > config file > defaults
    ///
    /// The file comes from `cli_path`, then `JASMINE_CONSOLE_CONFIG`, then the
    /// standard locations.
    pub fn resolve(cli_path: Option<&Path>, env: &EnvConfig) -> Result<Self> {
        let config = match config_path(cli_path, env) {
            Some(path) => Self::load(&path)?,
            None => Self::load_default()?,
        };

        Ok(config.with_env(env))
    }

    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|location| expand_path(location))
            .find(|path| path.exists())
    }

    /// Load configuration from default location, or defaults if none exists
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if OutputFormat::from_str(&self.format).is_none() {
            anyhow::bail!("Unknown output format: {}", self.format);
        }
        if LogLevel::from_str(&self.log_level).is_none() {
            anyhow::bail!("Unknown log level: {}", self.log_level);
        }
        Ok(())
    }

    /// Apply environment overrides on top of this configuration
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(colors) = env.colors {
            self.colors = colors;
        }
        if let Some(format) = &env.format {
            self.format = format.clone();
        }
        self
    }

    /// Apply command-line flags; these win over everything else
    pub fn with_cli(mut self, format: Option<&str>, no_color: bool) -> Result<Self> {
        if let Some(format) = format {
            if OutputFormat::from_str(format).is_none() {
                anyhow::bail!("Unknown output format: {format}");
            }
            self.format = format.to_string();
        }
        if no_color {
            self.colors = false;
        }
        Ok(self)
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_str(&self.format).unwrap_or_default()
    }
}

/// Explicit config file, if one was named on the command line or in the environment
fn config_path(cli_path: Option<&Path>, env: &EnvConfig) -> Option<PathBuf> {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| env.config_file.as_ref().map(PathBuf::from))
}

/// Expand ~ in path
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
