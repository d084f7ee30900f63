//! Base renderer with clipping.
//!
//! Wraps a pixel format with a clip rectangle so every write stays inside
//! the visible area, and acts as the [`SpanSink`] that paints fill and
//! outline output.

use crate::basics::{CoverType, RectI, COVER_FULL};
use crate::color::Rgba;
use crate::pixfmt_rgba::PixelFormat;
use crate::scanline_fill::{Span, SpanSink};

// ============================================================================
// RendererBase: clip-and-delegate renderer
// ============================================================================

/// Base renderer that clips all operations to a rectangle before delegating
/// to the underlying pixel format.
pub struct RendererBase<PF: PixelFormat> {
    ren: PF,
    clip_box: RectI,
}

impl<PF: PixelFormat> RendererBase<PF> {
    /// Create a new renderer wrapping the given pixel format.
    /// The clip box is initialized to the full buffer extent.
    pub fn new(ren: PF) -> Self {
        let w = ren.width() as i32;
        let h = ren.height() as i32;
        Self {
            ren,
            clip_box: RectI::new(0, 0, w - 1, h - 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.ren.width()
    }
    pub fn height(&self) -> u32 {
        self.ren.height()
    }

    /// Set the clip rectangle (will be intersected with the buffer bounds).
    pub fn clip_box_i(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        let mut cb = RectI::new(x1, y1, x2, y2);
        cb.normalize();
        if cb.clip(&self.full_box()) {
            self.clip_box = cb;
            true
        } else {
            self.clip_box = RectI::new(1, 1, 0, 0);
            false
        }
    }

    /// Reset clipping to the full buffer or to nothing.
    pub fn reset_clipping(&mut self, visibility: bool) {
        self.clip_box = if visibility {
            self.full_box()
        } else {
            RectI::new(1, 1, 0, 0)
        };
    }

    pub fn clip_box(&self) -> &RectI {
        &self.clip_box
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.clip_box.hit_test(x, y)
    }

    /// Get a reference to the underlying pixel format.
    pub fn ren(&self) -> &PF {
        &self.ren
    }

    /// Get a mutable reference to the underlying pixel format.
    pub fn ren_mut(&mut self) -> &mut PF {
        &mut self.ren
    }

    fn full_box(&self) -> RectI {
        RectI::new(
            0,
            0,
            self.ren.width() as i32 - 1,
            self.ren.height() as i32 - 1,
        )
    }

    // ========================================================================
    // Rendering operations (clip then delegate)
    // ========================================================================

    /// Clear the entire buffer to a solid color.
    pub fn clear(&mut self, c: &PF::ColorType) {
        let w = self.ren.width();
        if w > 0 {
            for y in 0..self.ren.height() as i32 {
                self.ren.copy_hline(0, y, w, c);
            }
        }
    }

    /// Copy a single pixel (clipped).
    pub fn copy_pixel(&mut self, x: i32, y: i32, c: &PF::ColorType) {
        if self.inbox(x, y) {
            self.ren.copy_pixel(x, y, c);
        }
    }

    /// Blend a single pixel (clipped).
    pub fn blend_pixel(&mut self, x: i32, y: i32, c: &PF::ColorType, cover: CoverType) {
        if self.inbox(x, y) {
            self.ren.blend_pixel(x, y, c, cover);
        }
    }

    /// Get the pixel at (x, y), or default if outside clip.
    pub fn pixel(&self, x: i32, y: i32) -> PF::ColorType
    where
        PF::ColorType: Default,
    {
        if self.inbox(x, y) {
            self.ren.pixel(x, y)
        } else {
            PF::ColorType::default()
        }
    }

    /// Clip an inclusive horizontal run; `None` when nothing is visible.
    fn clip_hline(&self, mut x1: i32, y: i32, mut x2: i32) -> Option<(i32, u32)> {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        let cb = &self.clip_box;
        if y > cb.y2 || y < cb.y1 || x1 > cb.x2 || x2 < cb.x1 {
            return None;
        }
        let x1 = x1.max(cb.x1);
        let x2 = x2.min(cb.x2);
        Some((x1, (x2 - x1 + 1) as u32))
    }

    /// Copy a horizontal line (clipped). x1, x2 are inclusive endpoints.
    pub fn copy_hline(&mut self, x1: i32, y: i32, x2: i32, c: &PF::ColorType) {
        if let Some((x, len)) = self.clip_hline(x1, y, x2) {
            self.ren.copy_hline(x, y, len, c);
        }
    }

    /// Blend a horizontal line (clipped). x1, x2 are inclusive endpoints.
    pub fn blend_hline(&mut self, x1: i32, y: i32, x2: i32, c: &PF::ColorType, cover: CoverType) {
        if let Some((x, len)) = self.clip_hline(x1, y, x2) {
            self.ren.blend_hline(x, y, len, c, cover);
        }
    }
}

/// Paints spans and points with full coverage.
impl<PF> SpanSink for RendererBase<PF>
where
    PF: PixelFormat,
    PF::ColorType: From<Rgba>,
{
    fn span(&mut self, span: Span, color: &Rgba) {
        let c = PF::ColorType::from(*color);
        self.blend_hline(span.x1, span.y, span.x2, &c, COVER_FULL);
    }

    fn point(&mut self, x: i32, y: i32, color: &Rgba) {
        let c = PF::ColorType::from(*color);
        self.blend_pixel(x, y, &c, COVER_FULL);
    }
}

// ============================================================================
// Tests
// ============================================================================
