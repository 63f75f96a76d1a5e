//! QR Studio runtime configuration handling

use crate::error::{Error, Result};
use crate::render::{ErrorCorrection, RenderOptions};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Default rendering parameter overrides
    pub render: RenderDefaults,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl StudioConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No qrstudio.toml / qrstudio.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["qrstudio.toml", "qrstudio.yaml", "qrstudio.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qrstudio");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.render.apply_env_overrides();
        self.logging.apply_env_overrides();
    }

    /// Produce fully resolved render options ready to pass to `generate()`.
    pub fn render_options(&self) -> Result<RenderOptions> {
        self.render.to_render_options()
    }
}

/// User-friendly render overrides merged on top of `RenderOptions::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    /// Override for module edge length in pixels (clamped to 4..=30)
    pub module_size: Option<u32>,
    /// Override for quiet-zone width in modules (clamped to 1..=10)
    pub border: Option<u32>,
    /// Override for the default correction tier (`low` or `high`)
    pub error_correction: Option<String>,
    /// Default logo file to embed when a request does not carry one
    pub logo: Option<PathBuf>,
}

impl RenderDefaults {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(size) = env::var("QRSTUDIO_MODULE_SIZE") {
            self.module_size = size.parse::<u32>().ok();
        }
        if let Ok(border) = env::var("QRSTUDIO_BORDER") {
            self.border = border.parse::<u32>().ok();
        }
        if let Ok(tier) = env::var("QRSTUDIO_ERROR_CORRECTION") {
            self.error_correction = Some(tier);
        }
        if let Ok(logo) = env::var("QRSTUDIO_LOGO") {
            if logo.trim().is_empty() {
                self.logo = None;
            } else {
                self.logo = Some(PathBuf::from(logo));
            }
        }
    }

    /// Merge overrides onto the default render options.
    pub fn to_render_options(&self) -> Result<RenderOptions> {
        let mut options = RenderOptions::default();

        if let Some(size) = self.module_size {
            options.module_size = size.clamp(4, 30);
        }

        if let Some(border) = self.border {
            options.border = border.clamp(1, 10);
        }

        if let Some(tier) = &self.error_correction {
            options.error_correction = ErrorCorrection::parse(tier).ok_or_else(|| {
                Error::Config(format!(
                    "Unknown correction tier '{}'. Use low or high",
                    tier
                ))
            })?;
        }

        if let Some(logo) = &self.logo {
            options.logo = Some(logo.clone());
        }

        Ok(options)
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRSTUDIO_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRSTUDIO_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRSTUDIO_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRSTUDIO_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("QRSTUDIO_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::from_str(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults_clamped() {
        let defaults = RenderDefaults {
            module_size: Some(100),
            border: Some(0),
            ..Default::default()
        };
        let options = defaults.to_render_options().unwrap();
        assert_eq!(options.module_size, 30);
        assert_eq!(options.border, 1);
    }

    #[test]
    fn test_unset_defaults_pass_through() {
        let options = RenderDefaults::default().to_render_options().unwrap();
        assert_eq!(options.module_size, RenderOptions::default().module_size);
        assert_eq!(options.error_correction, ErrorCorrection::Low);
    }

    #[test]
    fn test_bad_tier_rejected() {
        let defaults = RenderDefaults {
            error_correction: Some("medium".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            defaults.to_render_options(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_src = r#"
            [render]
            module_size = 8
            error_correction = "high"

            [logging]
            level = "debug"
            color = false
        "#;
        let config: StudioConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.render.module_size, Some(8));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.color);

        let options = config.render_options().unwrap();
        assert_eq!(options.error_correction, ErrorCorrection::High);
    }
}
