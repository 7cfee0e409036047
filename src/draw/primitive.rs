//! Recorded draw calls.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// Surface-relative pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A single recorded draw call together with every parameter it needs.
///
/// Primitives are immutable once built; replaying one onto a cleared surface
/// always produces the same pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Smoothed freehand curve through every point of the stroke so far.
    Freehand {
        /// Whole point buffer of the stroke at the time of the call
        points: Vec<Point>,
        /// Line width in pixels
        width: f64,
        /// Ink color
        color: Color,
    },
    /// Fixed-radius ring placed at a single point.
    Stamp {
        /// Ring center
        center: Point,
        /// Line width in pixels
        width: f64,
        /// Ink color
        color: Color,
        /// Ring radius in pixels
        radius: f64,
    },
}

impl Primitive {
    pub fn is_stamp(&self) -> bool {
        matches!(self, Primitive::Stamp { .. })
    }

    /// Short name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Freehand { .. } => "freehand",
            Primitive::Stamp { .. } => "stamp",
        }
    }
}
