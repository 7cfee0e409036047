//! Annotation layer for video frames.
//!
//! Freehand strokes and ring stamps are recorded as replayable primitives so
//! that undo can rebuild the surface from history. The binary drives the same
//! session from a TOML event script and exports the layer as a PNG.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
