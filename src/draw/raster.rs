//! Cairo-backed raster surface.

use super::color::Color;
use super::primitive::Point;
use super::surface::{PathSegment, RenderError, Surface};
use std::f64::consts::PI;
use std::io::Write;

/// ARGB32 image surface the annotations are painted on.
///
/// A fresh cairo context is created for every operation so that no context
/// outlives a call; this keeps [`RasterSurface::pixels`] able to borrow the
/// pixel data exclusively.
pub struct RasterSurface {
    surface: cairo::ImageSurface,
}

impl RasterSurface {
    /// Creates a transparent surface of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
        Ok(Self {
            surface: create_image(width, height)?,
        })
    }

    fn context(&self) -> Result<cairo::Context, RenderError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        Ok(ctx)
    }

    /// Copies the raw pixel data (premultiplied ARGB32, native endian).
    pub fn pixels(&mut self) -> Result<Vec<u8>, RenderError> {
        self.surface.flush();
        let data = self.surface.data()?;
        Ok(data.to_vec())
    }

    /// Returns the alpha channel of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn alpha_at(&mut self, x: i32, y: i32) -> Result<Option<u8>, RenderError> {
        if x < 0 || y < 0 || x >= self.surface.width() || y >= self.surface.height() {
            return Ok(None);
        }
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let pixels = self.pixels()?;
        let word = u32::from_ne_bytes([
            pixels[offset],
            pixels[offset + 1],
            pixels[offset + 2],
            pixels[offset + 3],
        ]);
        Ok(Some((word >> 24) as u8))
    }

    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&mut self) -> Result<bool, RenderError> {
        Ok(self.pixels()?.iter().all(|byte| *byte == 0))
    }

    /// Encodes the surface as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        self.surface.flush();
        self.surface.write_to_png(writer)?;
        Ok(())
    }
}

fn create_image(width: i32, height: i32) -> Result<cairo::ImageSurface, RenderError> {
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidSize { width, height });
    }
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        width,
        height,
    )?)
}

fn set_source(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}

impl Surface for RasterSurface {
    fn width(&self) -> i32 {
        self.surface.width()
    }

    fn height(&self) -> i32 {
        self.surface.height()
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        let ctx = self.context()?;
        ctx.identity_matrix();
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    fn fill_disk(&mut self, center: Point, radius: f64, color: Color) -> Result<(), RenderError> {
        let ctx = self.context()?;
        ctx.arc(center.x, center.y, radius, 0.0, PI * 2.0);
        ctx.close_path();
        set_source(&ctx, color);
        ctx.fill()?;
        Ok(())
    }

    fn stroke_path(
        &mut self,
        path: &[PathSegment],
        width: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        let ctx = self.context()?;
        set_source(&ctx, color);
        ctx.set_line_width(width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        // Cairo only knows cubic curves; raise each quadratic to its cubic equivalent
        let mut current = Point::default();
        for segment in path {
            match *segment {
                PathSegment::MoveTo(point) => {
                    ctx.move_to(point.x, point.y);
                    current = point;
                }
                PathSegment::QuadTo { ctrl, to } => {
                    let c1x = current.x + 2.0 / 3.0 * (ctrl.x - current.x);
                    let c1y = current.y + 2.0 / 3.0 * (ctrl.y - current.y);
                    let c2x = to.x + 2.0 / 3.0 * (ctrl.x - to.x);
                    let c2y = to.y + 2.0 / 3.0 * (ctrl.y - to.y);
                    ctx.curve_to(c1x, c1y, c2x, c2y, to.x, to.y);
                    current = to;
                }
            }
        }

        ctx.stroke()?;
        Ok(())
    }

    fn stroke_ring(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    ) -> Result<(), RenderError> {
        let ctx = self.context()?;
        set_source(&ctx, color);
        ctx.set_line_width(width);
        ctx.new_path();
        ctx.arc(center.x, center.y, radius, 0.0, PI * 2.0);
        ctx.stroke()?;
        Ok(())
    }

    fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        self.surface = create_image(width, height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn new_surface_is_blank() {
        let mut surface = RasterSurface::new(32, 16).unwrap();
        assert_eq!((surface.width(), surface.height()), (32, 16));
        assert!(surface.is_blank().unwrap());
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(matches!(
            RasterSurface::new(0, 16),
            Err(RenderError::InvalidSize { .. })
        ));
    }

    #[test]
    fn disk_paints_center_and_clear_erases_it() {
        let mut surface = RasterSurface::new(40, 40).unwrap();
        surface.fill_disk(Point::new(20.0, 20.0), 5.0, RED).unwrap();
        assert_eq!(surface.alpha_at(20, 20).unwrap(), Some(255));
        assert_eq!(surface.alpha_at(2, 2).unwrap(), Some(0));

        surface.clear().unwrap();
        assert!(surface.is_blank().unwrap());
    }

    #[test]
    fn ring_leaves_center_empty() {
        let mut surface = RasterSurface::new(100, 100).unwrap();
        surface
            .stroke_ring(Point::new(50.0, 50.0), 30.0, 4.0, BLUE)
            .unwrap();
        assert_eq!(surface.alpha_at(50, 50).unwrap(), Some(0));
        assert_eq!(surface.alpha_at(80, 50).unwrap(), Some(255));
    }

    #[test]
    fn write_png_emits_signature() {
        let surface = RasterSurface::new(8, 8).unwrap();
        let mut bytes = Vec::new();
        surface.write_png(&mut bytes).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn alpha_at_out_of_bounds_is_none() {
        let mut surface = RasterSurface::new(8, 8).unwrap();
        assert_eq!(surface.alpha_at(8, 0).unwrap(), None);
        assert_eq!(surface.alpha_at(-1, 0).unwrap(), None);
    }
}
