mod actions;
mod core;
mod mouse;

pub use self::core::InputState;
