//! Style configuration for Quarkit
//!
//! Provides configuration file handling and validation for the symbol
//! renderer. Supports JSON and TOML file formats, with the default file
//! living in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Module settings (style name, style size)
//! - Eye settings (finder pattern style)
//! - Render settings (quiet zone margin)

use crate::error::{SettingsError, SettingsResult};
use quarkit_styles::{EyeStyle, ModuleRenderer, ModuleStyleKind, SymbolRenderer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Largest accepted quiet zone, in modules.
pub const MAX_MARGIN: u32 = 64;

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "quarkit.toml";

/// Data module settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    /// Module style
    pub style: ModuleStyleKind,
    /// Radius for star, smoothness for vertigo, diameter for dot, corner
    /// cut for round
    pub size: f64,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            style: ModuleStyleKind::Square,
            size: 0.5,
        }
    }
}

/// Finder pattern settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeSettings {
    /// Eye style
    pub style: EyeStyle,
}

/// Output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Quiet zone around the symbol, in modules
    pub margin: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { margin: 4 }
    }
}

/// Complete style configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub module: ModuleSettings,
    pub eye: EyeSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl StyleConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, `<config dir>/quarkit/quarkit.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("quarkit").join(CONFIG_FILE_NAME))
            .ok_or(SettingsError::ConfigDirectory)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded style config");
        Ok(config)
    }

    /// Load config from file, falling back to defaults if it is missing or
    /// unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "No style config, using defaults");
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring style config, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        // Size range depends on the module style
        ModuleRenderer::new(self.module.style, self.module.size)?;

        if self.render.margin > MAX_MARGIN {
            return Err(SettingsError::InvalidSetting {
                key: "render.margin".to_string(),
                reason: format!("must be at most {}, got {}", MAX_MARGIN, self.render.margin),
            });
        }

        Ok(())
    }

    /// Set a single value by dotted key, e.g. `module.style`.
    pub fn set_setting(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        let invalid = |reason: String| SettingsError::InvalidSetting {
            key: key.to_string(),
            reason,
        };

        match key {
            "module.style" => self.module.style = value.parse()?,
            "module.size" => {
                self.module.size = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(format!("not a number: {}", value)))?
            }
            "eye.style" => self.eye.style = value.parse()?,
            "render.margin" => {
                self.render.margin = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(format!("not a whole number: {}", value)))?
            }
            _ => return Err(invalid("unknown key".to_string())),
        }

        Ok(())
    }

    /// Build the symbol renderer this config describes
    pub fn build_renderer(&self) -> SettingsResult<SymbolRenderer> {
        let modules = ModuleRenderer::new(self.module.style, self.module.size)?;
        Ok(SymbolRenderer::new(modules, self.eye.style))
    }
}
