use crate::draw::Point;
use crate::input::tool::Tool;
use log::debug;

use super::InputState;
use crate::draw::Surface;

impl<S: Surface> InputState<S> {
    /// Processes a pointer press at surface-relative coordinates.
    ///
    /// # Behavior
    /// - Ctrl held: places a small stamp at the press position
    /// - Ctrl+Shift held: places a large stamp at the press position
    /// - Otherwise, while idle: starts a freehand stroke
    ///
    /// Stamps work even while a stroke is in progress and leave it untouched.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.pointer = point;

        match self.modifiers.current_tool() {
            Tool::StampSmall => self.place_stamp(point, self.small_stamp_radius),
            Tool::StampLarge => self.place_stamp(point, self.large_stamp_radius),
            Tool::Pen => {
                if self.canvas.is_drawing() {
                    debug!("Pointer down at ({x}, {y}) while already drawing; ignored");
                    return;
                }
                self.canvas.begin();
                debug!("Started stroke at ({x}, {y})");
            }
        }
    }

    /// Processes pointer motion.
    ///
    /// While drawing, the stroke is extended with the *previous* pointer
    /// position before the new one is recorded, so the press position is the
    /// first point of every stroke.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.canvas.is_drawing() {
            let brush = self.brush();
            self.canvas.extend(self.pointer, brush);
        }
        self.pointer = Point::new(x, y);
    }

    /// Processes a pointer release.
    ///
    /// The stroke ends with the last known pointer position; the release
    /// position itself is only recorded afterwards.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        if self.canvas.is_drawing() {
            let brush = self.brush();
            self.canvas.end(self.pointer, brush);
        }
        self.pointer = Point::new(x, y);
    }

    fn place_stamp(&mut self, center: Point, radius: f64) {
        let brush = self.brush();
        self.canvas.stamp(center, radius, brush);
    }
}
