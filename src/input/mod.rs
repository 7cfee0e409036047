//! Input handling and brush state.
//!
//! This module translates pointer and keyboard events into canvas operations.
//! It tracks the held modifiers, the brush (color and width) supplied by the
//! environment, and the last known pointer position.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::Key;
pub use modifiers::Modifiers;
pub use state::InputState;
pub use tool::Tool;
