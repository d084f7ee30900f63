//! Rendering buffer: row-oriented access to pixel data.
//!
//! [`RowAccessor`] owns a rectangular byte buffer and hands out row slices
//! computed as `y * stride`. Rows are stored top-down, matching the
//! scanline order of the fill.

/// Owned pixel buffer with row access.
#[derive(Debug, Clone, Default)]
pub struct RowAccessor {
    buf: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl RowAccessor {
    /// Allocate a zeroed buffer of `height` rows of `width * bpp` bytes.
    pub fn new(width: u32, height: u32, bpp: usize) -> Self {
        let stride = width as usize * bpp;
        Self {
            buf: vec![0; stride * height as usize],
            width,
            height,
            stride,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Immutable slice for row `y`.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &self.buf[start..start + self.stride]
    }

    /// Mutable slice for row `y`.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &mut self.buf[start..start + self.stride]
    }

    /// The whole buffer, rows concatenated top to bottom.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

// ============================================================================
// Tests
// ============================================================================
