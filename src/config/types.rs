//! Configuration type definitions.

use super::enums::{CanvasPreset, ColorSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the brush the session starts with and the swatches reachable
/// through the digit keys.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default ink color - a named color, `#rrggbb`, `rgb(r, g, b)` or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Swatches selected with the `select_color` keybindings, in order
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            palette: default_palette(),
        }
    }
}

/// Stamp (ring) settings.
///
/// Ctrl+click places a small ring, Ctrl+Shift+click a large one.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StampConfig {
    /// Radius of the small ring in pixels (valid range: 5.0 - 500.0)
    #[serde(default = "default_small_radius")]
    pub small_radius: f64,

    /// Radius of the large ring in pixels (valid range: 5.0 - 500.0)
    #[serde(default = "default_large_radius")]
    pub large_radius: f64,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            small_radius: default_small_radius(),
            large_radius: default_large_radius(),
        }
    }
}

/// Drawing surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface size preset, matching the video size (`720p` or `1080p`)
    #[serde(default = "default_canvas_size")]
    pub size: CanvasPreset,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: default_canvas_size(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_width() -> f64 {
    5.0
}

pub(crate) fn default_palette() -> Vec<ColorSpec> {
    [
        "white", "black", "red", "orange", "yellow", "green", "blue", "purple", "pink",
    ]
    .into_iter()
    .map(|name| ColorSpec::Name(name.to_string()))
    .collect()
}

fn default_small_radius() -> f64 {
    50.0
}

fn default_large_radius() -> f64 {
    100.0
}

fn default_canvas_size() -> CanvasPreset {
    CanvasPreset::Hd720
}
