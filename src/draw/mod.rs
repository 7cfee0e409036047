//! Annotation engine (Cairo-based).
//!
//! This module defines the core drawing model:
//! - [`Primitive`]: a recorded draw call (freehand segment or stamp)
//! - [`Stroke`] / [`CommandLog`]: grouped primitives and their history
//! - [`StrokeAccumulator`]: buffers the interaction in progress
//! - [`replay`]: rebuilds a surface from the log (used for undo)
//! - [`AnnotationCanvas`]: ties the above to a [`Surface`]

pub mod canvas;
pub mod color;
pub mod history;
pub mod primitive;
pub mod raster;
pub mod render;
pub mod replay;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use canvas::AnnotationCanvas;
pub use color::Color;
pub use history::{CommandLog, Stroke};
pub use primitive::{Point, Primitive};
pub use raster::RasterSurface;
pub use render::{render_freehand, render_primitive, render_stamp, smooth_path};
pub use replay::{ReplayReport, replay};
pub use stroke::{Brush, StrokeAccumulator};
pub use surface::{PathSegment, RecordingSurface, RenderError, Surface, SurfaceOp};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, TRANSPARENT, WHITE, YELLOW};
