//! Pointer tool selection.

/// What a pointer press does.
///
/// Tools are selected by holding modifier keys while pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default, no modifiers)
    Pen,
    /// Small ring at the press position (Ctrl)
    StampSmall,
    /// Large ring at the press position (Ctrl+Shift)
    StampLarge,
}
