//! Raster surface abstraction.
//!
//! Everything the annotation engine writes goes through [`Surface`]. The cairo
//! backed [`RasterSurface`](super::RasterSurface) produces pixels, while
//! [`RecordingSurface`] keeps the operations as data so tests can assert on
//! the exact sequence of draw calls.

use super::color::Color;
use super::primitive::Point;
use thiserror::Error;

/// Errors raised while writing to a surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("freehand primitive has no points")]
    EmptyFreehand,

    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),
}

/// One segment of an open path handed to [`Surface::stroke_path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// Starts the path at a point
    MoveTo(Point),
    /// Quadratic curve from the current point
    QuadTo { ctrl: Point, to: Point },
}

/// Mutations a 2D raster surface has to support.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> i32;

    /// Surface height in pixels.
    fn height(&self) -> i32;

    /// Resets the transform and erases every pixel.
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Fills a solid disk.
    fn fill_disk(&mut self, center: Point, radius: f64, color: Color) -> Result<(), RenderError>;

    /// Strokes an open path with round caps and joins.
    fn stroke_path(
        &mut self,
        path: &[PathSegment],
        width: f64,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Strokes a circle outline without filling it.
    fn stroke_ring(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Replaces the backing store with a blank one of the given size.
    fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError>;
}

/// Operation captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    FillDisk {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokePath {
        path: Vec<PathSegment>,
        width: f64,
        color: Color,
    },
    StrokeRing {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
}

/// Surface that records draw calls instead of rasterizing them.
///
/// `ops` mirrors what would be visible: clearing or resizing drops the
/// recorded operations, just like it drops pixels on a real surface.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    /// Operations drawn since the last clear, in order
    pub ops: Vec<SurfaceOp>,
    /// Number of times the surface was cleared
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            clears: 0,
        }
    }

    /// Returns true if nothing has been drawn since the last clear.
    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.ops.clear();
        self.clears += 1;
        Ok(())
    }

    fn fill_disk(&mut self, center: Point, radius: f64, color: Color) -> Result<(), RenderError> {
        self.ops.push(SurfaceOp::FillDisk {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_path(
        &mut self,
        path: &[PathSegment],
        width: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ops.push(SurfaceOp::StrokePath {
            path: path.to_vec(),
            width,
            color,
        });
        Ok(())
    }

    fn stroke_ring(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ops.push(SurfaceOp::StrokeRing {
            center,
            radius,
            width,
            color,
        });
        Ok(())
    }

    fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        if width <= 0 || height <= 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        self.width = width;
        self.height = height;
        self.ops.clear();
        Ok(())
    }
}
