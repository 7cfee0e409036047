//! Utility functions for color names and CSS-like color strings.
//!
//! This module provides:
//! - Name-to-color mapping used by the configuration file
//! - Parsing of `#rgb`, `#rrggbb`, `rgb(...)` and `rgba(...)` strings
//! - Color-to-name mapping for log messages

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "purple", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "purple" => Some(PURPLE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a CSS-like color string.
///
/// Swatches report their computed background color as `rgb(r, g, b)`, so that
/// form is the one the environment most often hands over.
///
/// # Returns
/// - `Some(Color)` for names, `#rgb`, `#rrggbb`, `rgb(r, g, b)` and
///   `rgba(r, g, b, a)` (alpha 0.0-1.0)
/// - `None` for anything else
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return None;
        }
        let mut color = parse_rgb_channels(&parts[..3])?;
        color.a = parts[3]
            .parse::<f64>()
            .ok()
            .filter(|alpha| alpha.is_finite())?
            .clamp(0.0, 1.0);
        return Some(color);
    }

    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }
        return parse_rgb_channels(&parts);
    }

    name_to_color(value)
}

fn parse_rgb_channels(parts: &[&str]) -> Option<Color> {
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    Some(Color::from_rgb8(r, g, b))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color::from_rgb8(channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if (0.4..=0.6).contains(&color.r) && color.g < 0.1 && (0.4..=0.6).contains(&color.b) {
        "Purple"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_color_mappings() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color(" Purple ").unwrap(), PURPLE);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(parse_color("#ff0000"), Some(RED));
        assert_eq!(parse_color("#00F"), Some(BLUE));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    #[test]
    fn parse_functional_forms() {
        assert_eq!(parse_color("rgb(0, 255, 0)"), Some(GREEN));
        assert_eq!(parse_color("RGB(255,255,255)"), Some(WHITE));
        assert_eq!(
            parse_color("rgba(0, 0, 0, 0.5)"),
            Some(Color::new(0.0, 0.0, 0.0, 0.5))
        );
        assert_eq!(parse_color("rgba(0, 0, 0, nan)"), None);
        assert_eq!(parse_color("rgba(0, 0, 0, inf)"), None);
        assert_eq!(parse_color("rgb(300, 0, 0)"), None);
        assert_eq!(parse_color("rgb(1, 2)"), None);
    }

    #[test]
    fn parse_falls_back_to_names() {
        assert_eq!(parse_color("orange"), Some(ORANGE));
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&PURPLE), "Purple");
        assert_eq!(
            color_to_name(&Color {
                r: 0.42,
                g: 0.42,
                b: 0.42,
                a: 1.0
            }),
            "Custom"
        );
    }
}
