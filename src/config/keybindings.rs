//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that maps keyboard
//! shortcuts to drawing actions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // History
    Undo,
    ClearCanvas,

    // Width controls
    IncreaseWidth,
    DecreaseWidth,

    // Palette selection by swatch index
    SelectColor(usize),
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Backspace".
    /// Modifiers can appear in any order: "Shift+Ctrl+Z", "Alt+Shift+Ctrl+Z", etc.
    /// Supports spaces around '+' (e.g., "Ctrl + Z")
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty leftovers are the '+' key
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// clear_canvas = ["Backspace"]
/// select_color = ["0", "1", "2", "3", "4", "5", "6", "7", "8"]
/// ```
///
/// `select_color[i]` selects palette entry `i`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_increase_width")]
    pub increase_width: Vec<String>,

    #[serde(default = "default_decrease_width")]
    pub decrease_width: Vec<String>,

    #[serde(default = "default_select_color")]
    pub select_color: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            clear_canvas: default_clear_canvas(),
            increase_width: default_increase_width(),
            decrease_width: default_decrease_width(),
            select_color: default_select_color(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding, action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        for binding_str in &self.undo {
            insert_binding(binding_str, Action::Undo)?;
        }

        for binding_str in &self.clear_canvas {
            insert_binding(binding_str, Action::ClearCanvas)?;
        }

        for binding_str in &self.increase_width {
            insert_binding(binding_str, Action::IncreaseWidth)?;
        }

        for binding_str in &self.decrease_width {
            insert_binding(binding_str, Action::DecreaseWidth)?;
        }

        for (index, binding_str) in self.select_color.iter().enumerate() {
            insert_binding(binding_str, Action::SelectColor(index))?;
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["Backspace".to_string()]
}

fn default_increase_width() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_width() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_select_color() -> Vec<String> {
    (0..9).map(|digit| digit.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Backspace").unwrap();
        assert_eq!(binding.key, "Backspace");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_plus_key() {
        let plain = KeyBinding::parse("+").unwrap();
        assert_eq!(plain.key, "+");
        assert!(!plain.ctrl);

        let with_ctrl = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(with_ctrl.key, "+");
        assert!(with_ctrl.ctrl);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let binding = KeyBinding::parse("Shift + Ctrl + Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(binding.shift);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert!(binding.matches("z", true, false, false)); // Case insensitive
        assert!(!binding.matches("Z", false, false, false)); // Missing ctrl
        assert!(!binding.matches("Z", true, true, false)); // Extra shift
        assert!(!binding.matches("Y", true, false, false)); // Wrong key
    }

    #[test]
    fn test_build_action_map() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();

        let ctrl_z = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(map.get(&ctrl_z), Some(&Action::Undo));

        let backspace = KeyBinding::parse("Backspace").unwrap();
        assert_eq!(map.get(&backspace), Some(&Action::ClearCanvas));

        for digit in 0..9 {
            let binding = KeyBinding::parse(&digit.to_string()).unwrap();
            assert_eq!(map.get(&binding), Some(&Action::SelectColor(digit)));
        }
        assert!(!map.contains_key(&KeyBinding::parse("9").unwrap()));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let config = KeybindingsConfig {
            clear_canvas: vec!["Ctrl+Z".to_string()],
            ..KeybindingsConfig::default()
        };

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("Ctrl+Z"));
    }

    #[test]
    fn test_duplicate_with_different_modifier_order() {
        let config = KeybindingsConfig {
            undo: vec!["Ctrl+Shift+Z".to_string()],
            clear_canvas: vec!["Shift+Ctrl+Z".to_string()],
            ..KeybindingsConfig::default()
        };

        assert!(config.build_action_map().is_err());
    }
}
