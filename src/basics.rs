//! Foundation geometry types and helpers.
//!
//! Pixel-space vertices, floating-point points, an inclusive integer
//! rectangle used for clip boxes, and the rounding rule shared by every
//! span the engine emits.

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest pixel column: `x + 0.5` truncated toward zero.
///
/// This is the engine's pixel-snap rule. Note that truncation toward zero
/// means values in `(-1.5, -0.5]` land on `0` rather than `-1`; spans are
/// clamped to the drawable area afterwards, so this only matters for
/// geometry that is already off screen.
#[inline]
pub fn iround(v: f64) -> i32 {
    (v + 0.5) as i32
}

// ============================================================================
// Cover constants
// ============================================================================

/// Per-pixel coverage as understood by the pixel format.
pub type CoverType = u8;

pub const COVER_SHIFT: u32 = 8;
pub const COVER_SIZE: u32 = 1 << COVER_SHIFT;
pub const COVER_MASK: u32 = COVER_SIZE - 1;
pub const COVER_FULL: CoverType = COVER_MASK as CoverType;

// ============================================================================
// Points
// ============================================================================

/// A polygon vertex in integer pixel coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> PointD {
        PointD::new(self.x as f64, self.y as f64)
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point with f64 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointD {
    pub x: f64,
    pub y: f64,
}

impl PointD {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangle
// ============================================================================

/// Integer rectangle with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectI {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectI {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Swap corners so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            std::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            std::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Intersect with `r`. Returns false if the result is empty.
    pub fn clip(&mut self, r: &RectI) -> bool {
        self.x1 = self.x1.max(r.x1);
        self.y1 = self.y1.max(r.y1);
        self.x2 = self.x2.min(r.x2);
        self.y2 = self.y2.min(r.y2);
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

// ============================================================================
// Polygon measures
// ============================================================================

/// Signed polygon area by the shoelace formula.
///
/// Positive for clockwise winding in y-down screen space.
pub fn polygon_area(vertices: &[Vertex]) -> f64 {
    if vertices.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut prev = vertices[vertices.len() - 1].to_point();
    for v in vertices {
        let p = v.to_point();
        sum += prev.x * p.y - prev.y * p.x;
        prev = p;
    }
    sum * 0.5
}

/// Arithmetic mean of the vertices, or the origin for an empty slice.
pub fn centroid(vertices: &[Vertex]) -> PointD {
    if vertices.is_empty() {
        return PointD::default();
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x as f64, sy + v.y as f64));
    PointD::new(sx / n, sy / n)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iround_half_up() {
        assert_eq!(iround(0.0), 0);
        assert_eq!(iround(0.49), 0);
        assert_eq!(iround(0.5), 1);
        assert_eq!(iround(2.5), 3);
        assert_eq!(iround(3.7), 4);
    }

    #[test]
    fn test_iround_truncates_toward_zero() {
        assert_eq!(iround(-0.7), 0);
        assert_eq!(iround(-1.6), -1);
    }

    #[test]
    fn test_rect_normalize_and_clip() {
        let mut r = RectI::new(30, 40, 10, 20);
        r.normalize();
        assert_eq!(r, RectI::new(10, 20, 30, 40));

        assert!(r.clip(&RectI::new(15, 0, 100, 25)));
        assert_eq!(r, RectI::new(15, 20, 30, 25));

        let mut outside = RectI::new(0, 0, 5, 5);
        assert!(!outside.clip(&RectI::new(10, 10, 20, 20)));
    }

    #[test]
    fn test_rect_hit_test() {
        let r = RectI::new(10, 20, 30, 40);
        assert!(r.hit_test(10, 20));
        assert!(r.hit_test(30, 40));
        assert!(!r.hit_test(31, 40));
    }

    #[test]
    fn test_polygon_area_square() {
        let sq = [
            Vertex::new(0, 0),
            Vertex::new(4, 0),
            Vertex::new(4, 4),
            Vertex::new(0, 4),
        ];
        assert!((polygon_area(&sq) - 16.0).abs() < 1e-12);
        let rev: Vec<Vertex> = sq.iter().rev().copied().collect();
        assert!((polygon_area(&rev) + 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[Vertex::new(3, 3), Vertex::new(5, 5)]), 0.0);
    }

    #[test]
    fn test_centroid() {
        let c = centroid(&[Vertex::new(0, 0), Vertex::new(4, 0), Vertex::new(2, 6)]);
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!((c.y - 2.0).abs() < 1e-12);
        assert_eq!(centroid(&[]), PointD::default());
    }
}
