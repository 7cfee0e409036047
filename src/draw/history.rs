//! Stroke history.

use super::primitive::Primitive;
use serde::Serialize;

/// Primitives produced by one continuous interaction, undone as a unit.
///
/// A stroke is never empty, and it is either made only of freehand
/// primitives or of exactly one stamp.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stroke {
    primitives: Vec<Primitive>,
}

impl Stroke {
    /// Builds a freehand stroke. Returns `None` for an empty list or one that
    /// contains a stamp.
    pub fn new(primitives: Vec<Primitive>) -> Option<Self> {
        if primitives.is_empty() || primitives.iter().any(Primitive::is_stamp) {
            return None;
        }
        Some(Self { primitives })
    }

    /// Builds a one-element stroke holding a single stamp.
    pub fn stamp(stamp: Primitive) -> Option<Self> {
        stamp.is_stamp().then(|| Self {
            primitives: vec![stamp],
        })
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn is_stamp(&self) -> bool {
        self.primitives.first().is_some_and(Primitive::is_stamp)
    }
}

/// Ordered record of committed strokes.
///
/// Insertion order is creation order and undo order. Entries are never edited
/// in place; the log only grows by [`commit`](Self::commit) and shrinks from
/// the end by [`pop`](Self::pop) or all at once by [`clear`](Self::clear).
#[derive(Debug, Default, Serialize)]
pub struct CommandLog {
    strokes: Vec<Stroke>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stroke.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes and returns the most recently committed stroke.
    pub fn pop(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Drops every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of primitives across all strokes.
    pub fn primitive_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use crate::draw::primitive::Point;

    fn freehand(points: &[(f64, f64)]) -> Primitive {
        Primitive::Freehand {
            points: points.iter().copied().map(Point::from).collect(),
            width: 2.0,
            color: RED,
        }
    }

    fn stamp() -> Primitive {
        Primitive::Stamp {
            center: Point::new(1.0, 1.0),
            width: 2.0,
            color: RED,
            radius: 50.0,
        }
    }

    #[test]
    fn stroke_rejects_empty_and_mixed_input() {
        assert!(Stroke::new(Vec::new()).is_none());
        assert!(Stroke::new(vec![freehand(&[(0.0, 0.0)]), stamp()]).is_none());
        assert!(Stroke::stamp(freehand(&[(0.0, 0.0)])).is_none());
    }

    #[test]
    fn stamp_stroke_holds_one_primitive() {
        let stroke = Stroke::stamp(stamp()).unwrap();
        assert_eq!(stroke.len(), 1);
        assert!(stroke.is_stamp());
        assert!(!stroke.is_empty());
    }

    #[test]
    fn pop_returns_strokes_in_reverse_commit_order() {
        let mut log = CommandLog::new();
        let first = Stroke::new(vec![freehand(&[(0.0, 0.0)])]).unwrap();
        let second = Stroke::stamp(stamp()).unwrap();
        log.commit(first.clone());
        log.commit(second.clone());
        assert_eq!(log.len(), 2);
        assert_eq!(log.primitive_count(), 2);

        assert_eq!(log.pop(), Some(second));
        assert_eq!(log.pop(), Some(first));
        assert_eq!(log.pop(), None);
        assert!(log.is_empty());
    }

    #[test]
    fn log_serializes_as_nested_arrays() {
        let mut log = CommandLog::new();
        log.commit(Stroke::stamp(stamp()).unwrap());
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["strokes"][0][0]["kind"], "stamp");
    }
}
