//! Annotation canvas: surface, history and the stroke in progress.

use super::history::CommandLog;
use super::primitive::Point;
use super::replay::{ReplayReport, replay};
use super::stroke::{Brush, StrokeAccumulator};
use super::surface::{RenderError, Surface};
use log::{debug, error, info};

/// Owns the command log and the surface derived from it.
///
/// The surface is a cache: everything on it can be rebuilt from the log with
/// [`redraw`](Self::redraw), which is how undo and resize work.
pub struct AnnotationCanvas<S: Surface> {
    surface: S,
    log: CommandLog,
    accumulator: StrokeAccumulator,
}

impl<S: Surface> AnnotationCanvas<S> {
    /// Wraps a surface with an empty history.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            log: CommandLog::new(),
            accumulator: StrokeAccumulator::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the canvas and hands back the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    pub fn accumulator(&self) -> &StrokeAccumulator {
        &self.accumulator
    }

    /// Returns true while a freehand stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.accumulator.is_active()
    }

    /// Starts a freehand stroke.
    pub fn begin(&mut self) {
        self.accumulator.begin();
    }

    /// Adds a point to the stroke in progress and renders it.
    pub fn extend(&mut self, point: Point, brush: Brush) -> bool {
        self.accumulator.extend(&mut self.surface, point, brush)
    }

    /// Ends the stroke in progress and commits it to the log.
    pub fn end(&mut self, last_point: Point, brush: Brush) -> bool {
        self.accumulator
            .end(&mut self.surface, &mut self.log, last_point, brush)
    }

    /// Places a stamp and commits it immediately.
    pub fn stamp(&mut self, center: Point, radius: f64, brush: Brush) {
        self.accumulator
            .stamp(&mut self.surface, &mut self.log, center, radius, brush);
    }

    /// Drops the stroke in progress and wipes its ink by replaying the log.
    ///
    /// Returns `false` without touching the surface when nothing is being drawn.
    pub fn cancel_stroke(&mut self) -> bool {
        if !self.accumulator.is_active() {
            return false;
        }
        self.accumulator.cancel();
        self.redraw();
        true
    }

    /// Removes the newest stroke and rebuilds the surface from what is left.
    ///
    /// Returns `false` without touching the surface when the log is empty.
    pub fn undo_last(&mut self) -> bool {
        let Some(stroke) = self.log.pop() else {
            debug!("Nothing to undo");
            return false;
        };

        debug!(
            "Undoing {} stroke with {} primitive(s)",
            if stroke.is_stamp() { "stamp" } else { "freehand" },
            stroke.len()
        );
        self.redraw();
        true
    }

    /// Empties the log, drops any stroke in progress and blanks the surface.
    ///
    /// This cannot be undone.
    pub fn clear_all(&mut self) {
        let removed = self.log.len();
        self.log.clear();
        self.accumulator.cancel();
        if let Err(err) = self.surface.clear() {
            error!("Failed to clear surface: {err}");
        }
        info!("Cleared {removed} stroke(s)");
    }

    /// Rebuilds the surface from the full log.
    ///
    /// Returns `None` if the surface could not even be cleared.
    pub fn redraw(&mut self) -> Option<ReplayReport> {
        match replay(&self.log, &mut self.surface) {
            Ok(report) => Some(report),
            Err(err) => {
                error!("Replay failed: {err}");
                None
            }
        }
    }

    /// Swaps in a blank surface of the new size and replays the log onto it.
    ///
    /// Coordinates are kept as recorded; strokes outside the new bounds are
    /// simply clipped.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        self.surface.resize(width, height)?;
        info!("Resized canvas to {width}x{height}");
        self.redraw();
        Ok(())
    }
}
