//! Input state management.

use crate::config::{Action, Config, KeyBinding, MAX_WIDTH, MIN_WIDTH};
use crate::draw::{AnnotationCanvas, Brush, Color, Point, Surface};
use crate::input::modifiers::Modifiers;
use crate::util;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;

/// Main input state containing the whole annotation session.
///
/// This struct holds the canvas (surface, history and the stroke in
/// progress), the brush parameters, modifier keys and the last pointer
/// position. It processes pointer and keyboard events in arrival order.
pub struct InputState<S: Surface> {
    /// Surface, command log and stroke accumulator
    pub canvas: AnnotationCanvas<S>,
    /// Current ink color (swatch clicks or digit keys)
    pub current_color: Color,
    /// Current stroke width in pixels (width slider or +/- keys)
    pub current_width: f64,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Last known pointer position, relative to the surface
    pub pointer: Point,
    /// Swatches reachable through `SelectColor` actions
    pub palette: Vec<Color>,
    /// Ring radius for Ctrl+press
    pub small_stamp_radius: f64,
    /// Ring radius for Ctrl+Shift+press
    pub large_stamp_radius: f64,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl<S: Surface> InputState<S> {
    /// Creates a new InputState around `surface` with an empty history.
    ///
    /// # Arguments
    /// * `surface` - Surface the session draws on
    /// * `color` - Initial ink color
    /// * `width` - Initial stroke width in pixels (clamped to 1.0 - 50.0)
    /// * `palette` - Swatches for the `SelectColor` actions
    /// * `small_stamp_radius` - Ring radius for Ctrl+press
    /// * `large_stamp_radius` - Ring radius for Ctrl+Shift+press
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        surface: S,
        color: Color,
        width: f64,
        palette: Vec<Color>,
        small_stamp_radius: f64,
        large_stamp_radius: f64,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            canvas: AnnotationCanvas::new(surface),
            current_color: color,
            current_width: clamp_width(width),
            modifiers: Modifiers::new(),
            pointer: Point::default(),
            palette,
            small_stamp_radius,
            large_stamp_radius,
            action_map,
        }
    }

    /// Creates an InputState from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the configured keybindings are malformed or collide.
    pub fn from_config(config: &Config, surface: S) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .context("Invalid keybindings in configuration")?;

        let palette = config
            .drawing
            .palette
            .iter()
            .map(|spec| spec.to_color())
            .collect();

        Ok(Self::with_defaults(
            surface,
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
            palette,
            config.stamp.small_radius,
            config.stamp.large_radius,
            action_map,
        ))
    }

    /// Brush captured into the next primitive.
    pub fn brush(&self) -> Brush {
        Brush {
            color: self.current_color,
            width: self.current_width,
        }
    }

    /// Sets the ink color used by subsequent primitives.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
        debug!("Color set to {}", util::color_to_name(&color));
    }

    /// Sets the ink color from a CSS-like string such as `rgb(0, 0, 255)`.
    ///
    /// Returns `false` and keeps the current color if the string is not a color.
    pub fn set_color_str(&mut self, value: &str) -> bool {
        match util::parse_color(value) {
            Some(color) => {
                self.set_color(color);
                true
            }
            None => {
                warn!("Ignoring unrecognized color '{value}'");
                false
            }
        }
    }

    /// Sets the stroke width, clamped to 1.0 - 50.0 pixels.
    ///
    /// Strokes already in the log keep the width they were drawn with.
    pub fn set_width(&mut self, width: f64) {
        if width.is_nan() {
            warn!("Ignoring NaN stroke width");
            return;
        }
        let clamped = clamp_width(width);
        if clamped != width {
            warn!("Stroke width {width:.1} out of range, using {clamped:.1}");
        }
        self.current_width = clamped;
        debug!("Width set to {:.1}px", self.current_width);
    }

    /// Look up an action for the given key name with the held modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }
}

fn clamp_width(width: f64) -> f64 {
    if width.is_nan() {
        MIN_WIDTH
    } else {
        width.clamp(MIN_WIDTH, MAX_WIDTH)
    }
}
