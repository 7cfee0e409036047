//! Configuration enum types.

use crate::draw::{Color, color::RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Surface size preset matching the video element's resize options.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub enum CanvasPreset {
    /// 1280x720
    #[serde(rename = "720p")]
    Hd720,
    /// 1920x1080
    #[serde(rename = "1080p")]
    Hd1080,
}

impl CanvasPreset {
    /// Pixel dimensions `(width, height)` of the preset.
    pub fn dimensions(self) -> (i32, i32) {
        match self {
            CanvasPreset::Hd720 => (1280, 720),
            CanvasPreset::Hd1080 => (1920, 1080),
        }
    }

    /// Parses a preset name such as `720p` or `1080p` (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "720p" | "720" | "hd720" => Some(CanvasPreset::Hd720),
            "1080p" | "1080" | "hd1080" => Some(CanvasPreset::Hd1080),
            _ => None,
        }
    }
}

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # CSS-like strings
/// default_color = "#ff8000"
/// default_color = "rgb(255, 128, 0)"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color name, `#rrggbb`/`#rgb`, or `rgb(...)`/`rgba(...)` string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unparseable strings default to red with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true if the specification resolves to a color without falling back.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, ORANGE};

    #[test]
    fn preset_dimensions_and_parsing() {
        assert_eq!(CanvasPreset::Hd720.dimensions(), (1280, 720));
        assert_eq!(CanvasPreset::Hd1080.dimensions(), (1920, 1080));
        assert_eq!(CanvasPreset::parse("1080P"), Some(CanvasPreset::Hd1080));
        assert_eq!(CanvasPreset::parse("4k"), None);
    }

    #[test]
    fn color_spec_resolution() {
        assert_eq!(ColorSpec::Name("blue".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Rgb([255, 0, 0]).to_color(), RED);
        assert_eq!(ColorSpec::Name("rgb(255, 128, 0)".into()).to_color().g, 128.0 / 255.0);
        assert_eq!(ColorSpec::Name("#ff8000".into()).to_color().r, ORANGE.r);
        assert!(!ColorSpec::Name("mauve-ish".into()).is_valid());
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color(), RED);
    }
}
