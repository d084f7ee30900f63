//! Color types.
//!
//! - `Rgba`: f64 components in `[0, 1]`; fill and line colors are given in
//!   this form (three normalized components plus opacity).
//! - `Rgba8`: u8 components, the storage format of the raster target.
//!
//! Also carries the 16-entry drawing palette and the numbered fill presets.

use crate::basics::{CoverType, COVER_MASK};

// ============================================================================
// Rgba (f64 precision color)
// ============================================================================

/// RGBA color with f64 components in range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three normalized components.
    pub const fn new_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Rgba {
    /// White, the default fill of a fresh drawing.
    fn default() -> Self {
        Self::new_rgb(1.0, 1.0, 1.0)
    }
}

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_SCALE: u32 = 1 << Self::BASE_SHIFT;
    pub const BASE_MASK: u32 = Self::BASE_SCALE - 1;
    const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert from `Rgba` (f64), clamping each component to `[0, 1]`.
    pub fn from_rgba(c: &Rgba) -> Self {
        Self {
            r: Self::from_double(c.r),
            g: Self::from_double(c.g),
            b: Self::from_double(c.b),
            a: Self::from_double(c.a),
        }
    }

    /// Convert to `Rgba` (f64).
    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            r: Self::to_double(self.r),
            g: Self::to_double(self.g),
            b: Self::to_double(self.b),
            a: Self::to_double(self.a),
        }
    }

    pub fn to_double(a: u8) -> f64 {
        a as f64 / Self::BASE_MASK as f64
    }

    pub fn from_double(a: f64) -> u8 {
        (a.clamp(0.0, 1.0) * Self::BASE_MASK as f64 + 0.5) as u8
    }

    /// Fixed-point multiply, exact over u8.
    #[inline]
    fn multiply(a: u8, b: u8) -> u8 {
        let t: u32 = a as u32 * b as u32 + Self::BASE_MSB;
        (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT) as u8
    }

    /// Multiply a color component by a cover.
    #[inline]
    pub fn mult_cover(a: u8, b: CoverType) -> u8 {
        if b as u32 == COVER_MASK {
            a
        } else {
            Self::multiply(a, b)
        }
    }

    /// Interpolate p to q by a.
    #[inline]
    pub fn lerp(p: u8, q: u8, a: u8) -> u8 {
        let t = (q as i32 - p as i32) * a as i32 + Self::BASE_MSB as i32 - (p > q) as i32;
        (p as i32 + (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT)) as u8
    }
}

impl From<Rgba> for Rgba8 {
    fn from(c: Rgba) -> Self {
        Self::from_rgba(&c)
    }
}

impl From<Rgba8> for Rgba {
    fn from(c: Rgba8) -> Self {
        c.to_rgba()
    }
}

// ============================================================================
// Palette and presets
// ============================================================================

/// The 16-color drawing palette.
pub const PALETTE: [Rgba8; 16] = [
    Rgba8::new_opaque(0, 0, 0),
    Rgba8::new_opaque(128, 128, 128),
    Rgba8::new_opaque(192, 192, 192),
    Rgba8::new_opaque(255, 255, 255),
    Rgba8::new_opaque(128, 0, 0),
    Rgba8::new_opaque(255, 0, 0),
    Rgba8::new_opaque(255, 128, 0),
    Rgba8::new_opaque(255, 255, 0),
    Rgba8::new_opaque(128, 255, 0),
    Rgba8::new_opaque(0, 255, 0),
    Rgba8::new_opaque(0, 255, 128),
    Rgba8::new_opaque(0, 255, 255),
    Rgba8::new_opaque(0, 128, 255),
    Rgba8::new_opaque(0, 0, 255),
    Rgba8::new_opaque(128, 0, 255),
    Rgba8::new_opaque(255, 0, 255),
];

/// Palette index selected for a fresh drawing.
pub const DEFAULT_PALETTE_INDEX: usize = 12;

/// Palette entry `index` as a line color, falling back to
/// [`DEFAULT_PALETTE_INDEX`] when out of range.
pub fn palette_color(index: usize) -> Rgba {
    PALETTE
        .get(index)
        .unwrap_or(&PALETTE[DEFAULT_PALETTE_INDEX])
        .to_rgba()
}

/// Default line and fill color of a fresh drawing.
pub const DEFAULT_POLYGON_COLOR: Rgba = Rgba::new_rgb(0.0, 0.5, 1.0);

/// Numbered fill presets `1..=6`: red, green, blue, yellow, magenta, cyan.
pub fn preset_fill_color(index: u32) -> Option<Rgba> {
    match index {
        1 => Some(Rgba::new_rgb(1.0, 0.0, 0.0)),
        2 => Some(Rgba::new_rgb(0.0, 1.0, 0.0)),
        3 => Some(Rgba::new_rgb(0.0, 0.0, 1.0)),
        4 => Some(Rgba::new_rgb(1.0, 1.0, 0.0)),
        5 => Some(Rgba::new_rgb(1.0, 0.0, 1.0)),
        6 => Some(Rgba::new_rgb(0.0, 1.0, 1.0)),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
