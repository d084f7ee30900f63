//! RGBA pixel format with alpha blending.
//!
//! Provides the `PixelFormat` trait and `PixfmtRgba32`, which reads and
//! writes non-premultiplied RGBA32 pixels (4 bytes per pixel) in a
//! [`RowAccessor`].

use crate::basics::CoverType;
use crate::color::Rgba8;
use crate::rendering_buffer::RowAccessor;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Pixel-level write access for renderers. Coordinates are unchecked;
/// [`RendererBase`](crate::renderer_base::RendererBase) clips before calling.
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Blend a single pixel at (x, y) with color `c` and coverage `cover`.
    fn blend_pixel(&mut self, x: i32, y: i32, c: &Self::ColorType, cover: CoverType);

    /// Blend a horizontal line of `len` pixels at (x, y) with uniform color and coverage.
    fn blend_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType, cover: CoverType);

    /// Copy (overwrite) a horizontal line of `len` pixels with color `c`.
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType);

    /// Copy (overwrite) a single pixel at (x, y) with color `c`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Self::ColorType);

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Self::ColorType;
}

// ============================================================================
// PixfmtRgba32: non-premultiplied RGBA, 8 bits per channel
// ============================================================================

/// Pixel format for non-premultiplied RGBA32. Component order R, G, B, A.
pub struct PixfmtRgba32<'a> {
    rbuf: &'a mut RowAccessor,
}

pub const BPP: usize = 4; // bytes per pixel

impl<'a> PixfmtRgba32<'a> {
    pub fn new(rbuf: &'a mut RowAccessor) -> Self {
        Self { rbuf }
    }

    #[inline]
    fn pix_mut(&mut self, x: i32, y: i32) -> &mut [u8] {
        let off = x as usize * BPP;
        &mut self.rbuf.row_slice_mut(y as u32)[off..off + BPP]
    }

    /// Blend a single pixel (internal helper, no bounds checking).
    #[inline]
    fn blend_pix(p: &mut [u8], c: &Rgba8, alpha: u8) {
        if alpha == 255 {
            p.copy_from_slice(&[c.r, c.g, c.b, 255]);
        } else {
            p[0] = Rgba8::lerp(p[0], c.r, alpha);
            p[1] = Rgba8::lerp(p[1], c.g, alpha);
            p[2] = Rgba8::lerp(p[2], c.b, alpha);
            p[3] = Rgba8::lerp(p[3], 255, alpha);
        }
    }
}

impl<'a> PixelFormat for PixfmtRgba32<'a> {
    type ColorType = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let off = x as usize * BPP;
        let p = &self.rbuf.row_slice(y as u32)[off..off + BPP];
        Rgba8::new(p[0], p[1], p[2], p[3])
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        self.pix_mut(x, y).copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }

    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        let start = x as usize * BPP;
        let row = self.rbuf.row_slice_mut(y as u32);
        for px in row[start..start + len as usize * BPP].chunks_exact_mut(BPP) {
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, c: &Rgba8, cover: CoverType) {
        let alpha = Rgba8::mult_cover(c.a, cover);
        if alpha > 0 {
            Self::blend_pix(self.pix_mut(x, y), c, alpha);
        }
    }

    fn blend_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, cover: CoverType) {
        let alpha = Rgba8::mult_cover(c.a, cover);
        if alpha == 0 {
            return;
        }
        let start = x as usize * BPP;
        let row = self.rbuf.row_slice_mut(y as u32);
        for px in row[start..start + len as usize * BPP].chunks_exact_mut(BPP) {
            Self::blend_pix(px, c, alpha);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let mut ra = RowAccessor::new(100, 80, BPP);
        let pf = PixfmtRgba32::new(&mut ra);
        assert_eq!(pf.width(), 100);
        assert_eq!(pf.height(), 80);
    }

    #[test]
    fn test_copy_pixel() {
        let mut ra = RowAccessor::new(10, 10, BPP);
        let mut pf = PixfmtRgba32::new(&mut ra);
        let red = Rgba8::new(255, 0, 0, 255);
        pf.copy_pixel(5, 5, &red);
        assert_eq!(pf.pixel(5, 5), red);
        assert_eq!(pf.pixel(4, 5), Rgba8::default());
    }

    #[test]
    fn test_copy_hline() {
        let mut ra = RowAccessor::new(10, 10, BPP);
        let mut pf = PixfmtRgba32::new(&mut ra);
        let green = Rgba8::new(0, 255, 0, 255);
        pf.copy_hline(2, 3, 5, &green);
        for x in 2..7 {
            assert_eq!(pf.pixel(x, 3), green);
        }
        assert_eq!(pf.pixel(1, 3), Rgba8::default());
        assert_eq!(pf.pixel(7, 3), Rgba8::default());
    }

    #[test]
    fn test_blend_pixel_opaque() {
        let mut ra = RowAccessor::new(4, 4, BPP);
        let mut pf = PixfmtRgba32::new(&mut ra);
        let blue = Rgba8::new(0, 0, 255, 255);
        pf.blend_pixel(1, 1, &blue, 255);
        assert_eq!(pf.pixel(1, 1), blue);
    }

    #[test]
    fn test_blend_hline_semi_transparent() {
        let mut ra = RowAccessor::new(4, 1, BPP);
        let mut pf = PixfmtRgba32::new(&mut ra);
        pf.copy_hline(0, 0, 4, &Rgba8::new(255, 255, 255, 255));
        let half_black = Rgba8::new(0, 0, 0, 128);
        pf.blend_hline(0, 0, 2, &half_black, 255);
        let p = pf.pixel(0, 0);
        assert!(p.r > 120 && p.r < 135, "r = {}", p.r);
        assert_eq!(p.a, 255);
        assert_eq!(pf.pixel(2, 0), Rgba8::new(255, 255, 255, 255));
    }
}
