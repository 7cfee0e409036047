//! Keyboard modifier state tracking.

use super::tool::Tool;

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt) are currently pressed.
/// Used to pick what a pointer press does and to match keyboard shortcuts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Determines what a pointer press does based on current modifier state.
    ///
    /// # Tool Selection Priority
    /// 1. Ctrl+Shift → large stamp
    /// 2. Ctrl → small stamp
    /// 3. None → Pen (default)
    pub fn current_tool(&self) -> Tool {
        if self.ctrl && self.shift {
            Tool::StampLarge
        } else if self.ctrl {
            Tool::StampSmall
        } else {
            Tool::Pen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_follows_modifiers() {
        let mut modifiers = Modifiers::new();
        assert_eq!(modifiers.current_tool(), Tool::Pen);

        modifiers.shift = true;
        assert_eq!(modifiers.current_tool(), Tool::Pen);

        modifiers.ctrl = true;
        assert_eq!(modifiers.current_tool(), Tool::StampLarge);

        modifiers.shift = false;
        assert_eq!(modifiers.current_tool(), Tool::StampSmall);
    }
}
