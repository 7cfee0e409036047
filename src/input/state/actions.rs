use crate::config::{Action, KeyBinding};
use crate::draw::Surface;
use crate::input::{events::Key, modifiers::Modifiers};
use log::{debug, warn};

use super::InputState;

impl<S: Surface> InputState<S> {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Every other key is
    /// looked up in the keybinding map together with the held modifiers.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases change any state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Presses and releases a whole key combination such as `Ctrl+Z`.
    ///
    /// The held modifiers are replaced by the combination's for the duration
    /// of the press and restored afterwards.
    pub fn press_binding(&mut self, binding: &KeyBinding) {
        let saved = self.modifiers;
        self.modifiers = Modifiers {
            shift: binding.shift,
            ctrl: binding.ctrl,
            alt: binding.alt,
        };

        let key = Key::from_name(&binding.key);
        self.on_key_press(key);
        self.on_key_release(key);

        self.modifiers = saved;
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Undo => {
                self.canvas.undo_last();
            }
            Action::ClearCanvas => self.canvas.clear_all(),
            Action::IncreaseWidth => {
                self.set_width(self.current_width + 1.0);
            }
            Action::DecreaseWidth => {
                self.set_width(self.current_width - 1.0);
            }
            Action::SelectColor(index) => match self.palette.get(index).copied() {
                Some(color) => {
                    debug!("Selected palette entry {index}");
                    self.set_color(color);
                }
                None => warn!(
                    "Palette entry {index} does not exist ({} configured)",
                    self.palette.len()
                ),
            },
        }
    }
}
