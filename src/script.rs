//! Scripted input events.
//!
//! An event script is a TOML file with an `[[event]]` array. Each entry has a
//! kebab-case `type` and the fields of that event:
//!
//! ```toml
//! [[event]]
//! type = "color"
//! value = "rgb(0, 0, 255)"
//!
//! [[event]]
//! type = "pointer-down"
//! x = 10
//! y = 10
//!
//! [[event]]
//! type = "key"
//! combo = "Ctrl+Z"
//! ```

use crate::config::{CanvasPreset, KeyBinding};
use crate::draw::Surface;
use crate::input::{InputState, Key};
use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One input event, as the environment would deliver it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// Key name such as `Ctrl`, `Shift`, `Backspace`, `z` or `3`
    KeyPress { key: String },
    KeyRelease { key: String },
    /// Press and release of a whole binding string such as `Ctrl+Z`
    Key { combo: String },
    /// CSS-like color string
    Color { value: String },
    Width { value: f64 },
    Resize { preset: CanvasPreset },
}

/// Ordered list of events loaded from a script file.
#[derive(Debug, Default, Deserialize)]
pub struct EventScript {
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl EventScript {
    /// Parses a script from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read event script {}", path.display()))?;
        let script = Self::from_toml(&text)
            .with_context(|| format!("Failed to parse event script {}", path.display()))?;
        info!(
            "Loaded {} event(s) from {}",
            script.events.len(),
            path.display()
        );
        Ok(script)
    }

    /// Feeds every event to `state` in order.
    ///
    /// # Errors
    /// Stops at the first event that cannot be delivered at all (a malformed
    /// key combination or a failed resize). Unknown keys and colors are only
    /// logged, as they would be if they came from a real environment.
    pub fn apply<S: Surface>(&self, state: &mut InputState<S>) -> Result<()> {
        for (index, event) in self.events.iter().enumerate() {
            apply_event(state, event).with_context(|| format!("Event #{index} ({event:?})"))?;
        }
        debug!(
            "Script finished with {} stroke(s) in the log",
            state.canvas.log().len()
        );
        Ok(())
    }
}

fn apply_event<S: Surface>(state: &mut InputState<S>, event: &ScriptEvent) -> Result<()> {
    match event {
        ScriptEvent::PointerDown { x, y } => state.on_pointer_down(*x, *y),
        ScriptEvent::PointerMove { x, y } => state.on_pointer_move(*x, *y),
        ScriptEvent::PointerUp { x, y } => state.on_pointer_up(*x, *y),
        ScriptEvent::KeyPress { key } => state.on_key_press(named_key(key)),
        ScriptEvent::KeyRelease { key } => state.on_key_release(named_key(key)),
        ScriptEvent::Key { combo } => {
            let binding = KeyBinding::parse(combo).map_err(|err| anyhow!(err))?;
            state.press_binding(&binding);
        }
        ScriptEvent::Color { value } => {
            state.set_color_str(value);
        }
        ScriptEvent::Width { value } => state.set_width(*value),
        ScriptEvent::Resize { preset } => {
            let (width, height) = preset.dimensions();
            state
                .canvas
                .resize(width, height)
                .context("Failed to resize surface")?;
        }
    }
    Ok(())
}

fn named_key(name: &str) -> Key {
    let key = Key::from_name(name);
    if key == Key::Unknown {
        warn!("Unknown key name '{name}' in script");
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::draw::color::BLUE;
    use crate::draw::{Primitive, RecordingSurface};

    fn session() -> InputState<RecordingSurface> {
        InputState::from_config(&Config::default(), RecordingSurface::new(1280, 720)).unwrap()
    }

    #[test]
    fn parses_every_event_kind() {
        let script = EventScript::from_toml(
            r##"
            [[event]]
            type = "pointer-down"
            x = 1
            y = 2.5

            [[event]]
            type = "pointer-move"
            x = 3
            y = 4

            [[event]]
            type = "pointer-up"
            x = 5
            y = 6

            [[event]]
            type = "key-press"
            key = "Ctrl"

            [[event]]
            type = "key-release"
            key = "Ctrl"

            [[event]]
            type = "key"
            combo = "Ctrl+Z"

            [[event]]
            type = "color"
            value = "#0000ff"

            [[event]]
            type = "width"
            value = 12

            [[event]]
            type = "resize"
            preset = "1080p"
            "##,
        )
        .unwrap();

        assert_eq!(script.events.len(), 9);
        assert_eq!(script.events[0], ScriptEvent::PointerDown { x: 1.0, y: 2.5 });
        assert_eq!(
            script.events[5],
            ScriptEvent::Key {
                combo: "Ctrl+Z".into()
            }
        );
        assert_eq!(script.events[7], ScriptEvent::Width { value: 12.0 });
        assert_eq!(
            script.events[8],
            ScriptEvent::Resize {
                preset: CanvasPreset::Hd1080
            }
        );
    }

    #[test]
    fn empty_script_has_no_events() {
        assert!(EventScript::from_toml("").unwrap().events.is_empty());
    }

    #[test]
    fn rejects_unknown_event_type() {
        let err = EventScript::from_toml("[[event]]\ntype = \"teleport\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("teleport"));
    }

    #[test]
    fn apply_drives_the_session() {
        let script = EventScript::from_toml(
            r#"
            [[event]]
            type = "color"
            value = "blue"

            [[event]]
            type = "pointer-down"
            x = 10
            y = 10

            [[event]]
            type = "pointer-move"
            x = 20
            y = 20

            [[event]]
            type = "pointer-up"
            x = 20
            y = 20

            [[event]]
            type = "key-press"
            key = "Ctrl"

            [[event]]
            type = "pointer-down"
            x = 100
            y = 100

            [[event]]
            type = "key-release"
            key = "Ctrl"
            "#,
        )
        .unwrap();

        let mut state = session();
        script.apply(&mut state).unwrap();

        let log = state.canvas.log();
        assert_eq!(log.len(), 2);
        assert!(!log.strokes()[0].is_stamp());
        assert!(log.strokes()[1].is_stamp());
        let Primitive::Freehand { color, .. } = &log.strokes()[0].primitives()[0] else {
            panic!("expected freehand");
        };
        assert_eq!(*color, BLUE);
    }

    #[test]
    fn key_combo_undoes() {
        let script = EventScript::from_toml(
            r#"
            [[event]]
            type = "pointer-down"
            x = 10
            y = 10

            [[event]]
            type = "pointer-up"
            x = 10
            y = 10

            [[event]]
            type = "key"
            combo = "Ctrl+Z"
            "#,
        )
        .unwrap();

        let mut state = session();
        script.apply(&mut state).unwrap();
        assert!(state.canvas.log().is_empty());
        assert!(state.canvas.surface().is_blank());
    }

    #[test]
    fn resize_replays_onto_new_surface() {
        let script = EventScript::from_toml(
            r#"
            [[event]]
            type = "pointer-down"
            x = 10
            y = 10

            [[event]]
            type = "pointer-up"
            x = 10
            y = 10

            [[event]]
            type = "resize"
            preset = "1080p"
            "#,
        )
        .unwrap();

        let mut state = session();
        script.apply(&mut state).unwrap();
        assert_eq!(state.canvas.surface().width(), 1920);
        assert_eq!(state.canvas.surface().height(), 1080);
        assert_eq!(state.canvas.surface().ops.len(), 1);
    }

    #[test]
    fn malformed_combo_reports_event_index() {
        let script = EventScript::from_toml(
            r#"
            [[event]]
            type = "key"
            combo = "Ctrl+Shift"
            "#,
        )
        .unwrap();

        let err = script.apply(&mut session()).unwrap_err();
        assert!(format!("{err:#}").contains("Event #0"));
    }
}
