//! Primitive rendering.
//!
//! Pure functions that turn one [`Primitive`] into surface operations. They
//! carry no state of their own, so rendering the same primitive onto the same
//! surface state always produces the same result.

use super::color::Color;
use super::primitive::{Point, Primitive};
use super::surface::{PathSegment, RenderError, Surface};

/// Freehand strokes with fewer points than this render as a single dot.
pub const MIN_SMOOTHED_POINTS: usize = 6;

/// Dispatches a primitive to its renderer.
pub fn render_primitive<S: Surface + ?Sized>(
    surface: &mut S,
    primitive: &Primitive,
) -> Result<(), RenderError> {
    match primitive {
        Primitive::Freehand {
            points,
            width,
            color,
        } => render_freehand(surface, points, *width, *color),
        Primitive::Stamp {
            center,
            width,
            color,
            radius,
        } => render_stamp(surface, *center, *width, *color, *radius),
    }
}

/// Draws a ring (outline only) of `radius` around `center`.
pub fn render_stamp<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    width: f64,
    color: Color,
    radius: f64,
) -> Result<(), RenderError> {
    surface.stroke_ring(center, radius, width, color)
}

/// Draws a freehand stroke from its accumulated points.
///
/// - no points: nothing is drawn and [`RenderError::EmptyFreehand`] is returned
/// - fewer than [`MIN_SMOOTHED_POINTS`]: a filled dot of radius `width / 2` at
///   the first point, so a tap still leaves ink
/// - otherwise: the smoothed open path from [`smooth_path`]
pub fn render_freehand<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    width: f64,
    color: Color,
) -> Result<(), RenderError> {
    let Some(first) = points.first() else {
        return Err(RenderError::EmptyFreehand);
    };

    if points.len() < MIN_SMOOTHED_POINTS {
        return surface.fill_disk(*first, width / 2.0, color);
    }

    surface.stroke_path(&smooth_path(points), width, color)
}

/// Builds the corner-cutting path through `points`.
///
/// Each interior point `i` in `1..len - 2` becomes the control point of a
/// quadratic segment ending at the midpoint of `points[i]` and `points[i + 1]`.
/// The last one or two points only steer the final segment and are never
/// reached exactly, which shortens the tail slightly.
pub fn smooth_path(points: &[Point]) -> Vec<PathSegment> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(points.len().saturating_sub(2));
    path.push(PathSegment::MoveTo(*first));

    for i in 1..points.len().saturating_sub(2) {
        path.push(PathSegment::QuadTo {
            ctrl: points[i],
            to: points[i].midpoint(points[i + 1]),
        });
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{GREEN, RED};
    use crate::draw::surface::{RecordingSurface, SurfaceOp};

    fn line_of(count: usize) -> Vec<Point> {
        (0..count)
            .map(|i| Point::new(i as f64 * 10.0, (i % 2) as f64 * 10.0))
            .collect()
    }

    #[test]
    fn empty_freehand_is_reported_and_draws_nothing() {
        let mut surface = RecordingSurface::new(100, 100);
        let result = render_freehand(&mut surface, &[], 4.0, RED);
        assert!(matches!(result, Err(RenderError::EmptyFreehand)));
        assert!(surface.is_blank());
    }

    #[test]
    fn five_points_render_as_dot_at_first_point() {
        let mut surface = RecordingSurface::new(100, 100);
        let points = line_of(5);
        render_freehand(&mut surface, &points, 8.0, RED).unwrap();

        assert_eq!(
            surface.ops,
            vec![SurfaceOp::FillDisk {
                center: points[0],
                radius: 4.0,
                color: RED,
            }]
        );
    }

    #[test]
    fn six_points_render_as_smoothed_path() {
        let mut surface = RecordingSurface::new(100, 100);
        let points = line_of(6);
        render_freehand(&mut surface, &points, 3.0, GREEN).unwrap();

        assert_eq!(surface.ops.len(), 1);
        let SurfaceOp::StrokePath { path, width, color } = &surface.ops[0] else {
            panic!("expected a stroked path, got {:?}", surface.ops[0]);
        };
        assert_eq!(*width, 3.0);
        assert_eq!(*color, GREEN);
        // move + segments for i = 1, 2, 3
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn smooth_path_uses_midpoints_and_skips_tail() {
        let points = line_of(7);
        let path = smooth_path(&points);

        assert_eq!(path[0], PathSegment::MoveTo(points[0]));
        assert_eq!(path.len(), 1 + 4);
        for (offset, segment) in path[1..].iter().enumerate() {
            let i = offset + 1;
            assert_eq!(
                *segment,
                PathSegment::QuadTo {
                    ctrl: points[i],
                    to: points[i].midpoint(points[i + 1]),
                }
            );
        }
        // last emitted segment ends between points[4] and points[5]; points[6] is never reached
        assert_eq!(
            path.last(),
            Some(&PathSegment::QuadTo {
                ctrl: points[4],
                to: points[4].midpoint(points[5]),
            })
        );
    }

    #[test]
    fn single_point_smooth_path_is_just_a_move() {
        let points = [Point::new(3.0, 4.0)];
        assert_eq!(smooth_path(&points), vec![PathSegment::MoveTo(points[0])]);
        assert!(smooth_path(&[]).is_empty());
    }

    #[test]
    fn stamp_strokes_a_ring() {
        let mut surface = RecordingSurface::new(200, 200);
        let stamp = Primitive::Stamp {
            center: Point::new(50.0, 50.0),
            width: 2.0,
            color: RED,
            radius: 50.0,
        };
        render_primitive(&mut surface, &stamp).unwrap();

        assert_eq!(
            surface.ops,
            vec![SurfaceOp::StrokeRing {
                center: Point::new(50.0, 50.0),
                radius: 50.0,
                width: 2.0,
                color: RED,
            }]
        );
    }
}
