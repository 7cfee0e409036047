//! In-progress stroke buffering.

use super::color::Color;
use super::history::{CommandLog, Stroke};
use super::primitive::{Point, Primitive};
use super::render::render_primitive;
use super::surface::Surface;
use log::{debug, error};

/// Ink parameters captured into every primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub width: f64,
}

/// Collects the primitives of the interaction in progress.
///
/// A freehand interaction runs `begin` → `extend`* → `end`; only `end`
/// commits, so an interaction that never ends never reaches the log. Stamps
/// bypass the buffer and commit immediately.
#[derive(Debug, Default)]
pub struct StrokeAccumulator {
    /// Points of the active stroke, in arrival order
    points: Vec<Point>,
    /// Primitives rendered so far for the active stroke
    pending: Vec<Primitive>,
    /// Drawing-mode flag
    active: bool,
}

impl StrokeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a freehand stroke is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points recorded for the active stroke.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of primitives waiting for the stroke to end.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Starts a new freehand stroke, discarding any leftover buffer.
    pub fn begin(&mut self) {
        self.points.clear();
        self.pending.clear();
        self.active = true;
    }

    /// Appends a point and renders the stroke so far.
    ///
    /// Each call renders the whole buffer again, which retraces the growing
    /// curve on the live surface. Returns `false` when no stroke is active.
    pub fn extend<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        point: Point,
        brush: Brush,
    ) -> bool {
        if !self.active {
            debug!("Ignoring stroke point ({}, {}) while idle", point.x, point.y);
            return false;
        }

        self.points.push(point);
        let primitive = Primitive::Freehand {
            points: self.points.clone(),
            width: brush.width,
            color: brush.color,
        };

        if let Err(err) = render_primitive(surface, &primitive) {
            error!("Failed to render freehand segment: {err}");
        }
        self.pending.push(primitive);
        true
    }

    /// Finishes the active stroke with `last_point` and commits it.
    ///
    /// Returns `false` (and commits nothing) when no stroke is active.
    pub fn end<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        log: &mut CommandLog,
        last_point: Point,
        brush: Brush,
    ) -> bool {
        if !self.extend(surface, last_point, brush) {
            return false;
        }

        let pending = std::mem::take(&mut self.pending);
        self.points.clear();
        self.active = false;

        match Stroke::new(pending) {
            Some(stroke) => {
                debug!(
                    "Committed freehand stroke with {} segment(s)",
                    stroke.len()
                );
                log.commit(stroke);
                true
            }
            None => false,
        }
    }

    /// Places a ring at `center` and commits it as its own stroke.
    ///
    /// Works whether or not a freehand stroke is active and leaves that
    /// stroke's buffer untouched.
    pub fn stamp<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        log: &mut CommandLog,
        center: Point,
        radius: f64,
        brush: Brush,
    ) {
        let primitive = Primitive::Stamp {
            center,
            width: brush.width,
            color: brush.color,
            radius,
        };

        if let Err(err) = render_primitive(surface, &primitive) {
            error!("Failed to render stamp: {err}");
        }

        if let Some(stroke) = Stroke::stamp(primitive) {
            debug!(
                "Committed stamp at ({}, {}) radius {radius}",
                center.x, center.y
            );
            log.commit(stroke);
        }
    }

    /// Drops the active stroke without committing anything.
    pub fn cancel(&mut self) {
        if self.active {
            debug!(
                "Discarding in-progress stroke with {} point(s)",
                self.points.len()
            );
        }
        self.points.clear();
        self.pending.clear();
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use crate::draw::surface::RecordingSurface;

    const BRUSH: Brush = Brush {
        color: RED,
        width: 4.0,
    };

    #[test]
    fn extend_is_ignored_while_idle() {
        let mut acc = StrokeAccumulator::new();
        let mut surface = RecordingSurface::new(100, 100);
        assert!(!acc.extend(&mut surface, Point::new(1.0, 1.0), BRUSH));
        assert!(acc.points().is_empty());
        assert!(surface.is_blank());
    }

    #[test]
    fn each_extend_carries_the_whole_buffer() {
        let mut acc = StrokeAccumulator::new();
        let mut surface = RecordingSurface::new(100, 100);
        let mut log = CommandLog::new();

        acc.begin();
        acc.extend(&mut surface, Point::new(0.0, 0.0), BRUSH);
        acc.extend(&mut surface, Point::new(5.0, 5.0), BRUSH);
        assert!(acc.end(&mut surface, &mut log, Point::new(10.0, 0.0), BRUSH));

        assert_eq!(log.len(), 1);
        let stroke = &log.strokes()[0];
        assert_eq!(stroke.len(), 3);
        for (i, primitive) in stroke.primitives().iter().enumerate() {
            let Primitive::Freehand { points, .. } = primitive else {
                panic!("expected freehand, got {primitive:?}");
            };
            assert_eq!(points.len(), i + 1);
        }
        assert!(!acc.is_active());
        assert!(acc.points().is_empty());
        assert_eq!(acc.pending_len(), 0);
    }

    #[test]
    fn end_without_begin_commits_nothing() {
        let mut acc = StrokeAccumulator::new();
        let mut surface = RecordingSurface::new(100, 100);
        let mut log = CommandLog::new();
        assert!(!acc.end(&mut surface, &mut log, Point::new(1.0, 1.0), BRUSH));
        assert!(log.is_empty());
    }

    #[test]
    fn stamp_does_not_touch_pending_stroke() {
        let mut acc = StrokeAccumulator::new();
        let mut surface = RecordingSurface::new(200, 200);
        let mut log = CommandLog::new();

        acc.begin();
        acc.extend(&mut surface, Point::new(1.0, 1.0), BRUSH);
        acc.extend(&mut surface, Point::new(2.0, 2.0), BRUSH);
        let points_before = acc.points().to_vec();

        acc.stamp(&mut surface, &mut log, Point::new(50.0, 50.0), 50.0, BRUSH);

        assert!(acc.is_active());
        assert_eq!(acc.points(), points_before.as_slice());
        assert_eq!(acc.pending_len(), 2);
        assert_eq!(log.len(), 1);
        assert!(log.strokes()[0].is_stamp());
    }

    #[test]
    fn cancel_drops_the_interaction() {
        let mut acc = StrokeAccumulator::new();
        let mut surface = RecordingSurface::new(100, 100);
        let mut log = CommandLog::new();

        acc.begin();
        acc.extend(&mut surface, Point::new(1.0, 1.0), BRUSH);
        acc.cancel();

        assert!(!acc.is_active());
        assert!(!acc.end(&mut surface, &mut log, Point::new(2.0, 2.0), BRUSH));
        assert!(log.is_empty());
    }
}
