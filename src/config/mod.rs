//! Configuration file support for videoink.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/videoink/config.toml`. Settings include the starting brush,
//! palette, stamp radii, surface size, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{CanvasPreset, ColorSpec};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, StampConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Narrowest stroke width accepted anywhere, in pixels.
pub const MIN_WIDTH: f64 = 1.0;
/// Widest stroke width accepted anywhere, in pixels.
pub const MAX_WIDTH: f64 = 50.0;

const MIN_STAMP_RADIUS: f64 = 5.0;
const MAX_STAMP_RADIUS: f64 = 500.0;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_width = 5.0
/// palette = ["white", "black", "red", "orange", "yellow", "green", "blue", "purple", "pink"]
///
/// [stamp]
/// small_radius = 50.0
/// large_radius = 100.0
///
/// [canvas]
/// size = "720p"
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// clear_canvas = ["Backspace"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults and palette
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Stamp radii
    #[serde(default)]
    pub stamp: StampConfig,

    /// Surface size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 50.0
    /// - `stamp.small_radius`, `stamp.large_radius`: 5.0 - 500.0
    /// - `palette`: must not be empty
    pub fn validate_and_clamp(&mut self) {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to {MIN_WIDTH:.1}-{MAX_WIDTH:.1} range",
                self.drawing.default_width
            );
            self.drawing.default_width = if self.drawing.default_width.is_nan() {
                MIN_WIDTH
            } else {
                self.drawing.default_width.clamp(MIN_WIDTH, MAX_WIDTH)
            };
        }

        for (name, radius) in [
            ("small_radius", &mut self.stamp.small_radius),
            ("large_radius", &mut self.stamp.large_radius),
        ] {
            if !(MIN_STAMP_RADIUS..=MAX_STAMP_RADIUS).contains(&*radius) {
                log::warn!(
                    "Invalid stamp {name} {:.1}, clamping to {MIN_STAMP_RADIUS:.1}-{MAX_STAMP_RADIUS:.1} range",
                    *radius
                );
                *radius = if radius.is_nan() {
                    MIN_STAMP_RADIUS
                } else {
                    radius.clamp(MIN_STAMP_RADIUS, MAX_STAMP_RADIUS)
                };
            }
        }

        if self.drawing.palette.is_empty() {
            log::warn!("Empty palette, falling back to the default swatches");
            self.drawing.palette = types::default_palette();
        }

        for (index, spec) in self.drawing.palette.iter().enumerate() {
            if !spec.is_valid() {
                log::warn!("Palette entry {index} ({spec:?}) is not a color; it will draw red");
            }
        }

        if !self.drawing.default_color.is_valid() {
            log::warn!(
                "Invalid default_color {:?}, falling back to red",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("red".to_string());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/videoink/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("videoink");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
