//! Polygon outline pass.
//!
//! Draws the polygon's sides as one-pixel Bresenham lines through a
//! [`SpanSink`]. This is the line pass that runs before a polygon is closed,
//! so it accepts two vertices where the fill needs three.

use crate::basics::Vertex;
use crate::color::Rgba;
use crate::error::{MIN_AREA_VERTICES, MIN_OUTLINE_VERTICES};
use crate::scanline_fill::SpanSink;

// ============================================================================
// Bresenham line interpolator
// ============================================================================

/// Integer Bresenham walk over every octant.
///
/// Yields `len() + 1` pixels from the start to the end point inclusive.
/// Error terms are kept in `i64` so any pair of `i32` endpoints is valid.
#[derive(Debug, Clone)]
pub struct LineBresenhamInterpolator {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    remaining: u64,
}

impl LineBresenhamInterpolator {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        Self {
            x: x1,
            y: y1,
            dx,
            dy,
            sx: if x2 >= x1 { 1 } else { -1 },
            sy: if y2 >= y1 { 1 } else { -1 },
            err: dx + dy,
            remaining: dx.max(-dy) as u64 + 1,
        }
    }

    /// Number of steps in the dominant axis.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.dx.max(-self.dy) as u64
    }
}

impl Iterator for LineBresenhamInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Every visited point lies between the two i32 endpoints.
        let out = (self.x as i32, self.y as i32);
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

// ============================================================================
// Outline
// ============================================================================

/// True when both endpoints lie beyond the same edge of the area, so the
/// side cannot touch it.
#[inline]
fn off_area(a: Vertex, b: Vertex, w: i32, h: i32) -> bool {
    (a.x < 0 && b.x < 0) || (a.x >= w && b.x >= w) || (a.y < 0 && b.y < 0) || (a.y >= h && b.y >= h)
}

/// Draw the sides of `vertices` into a `width` x `height` area.
///
/// Each side `(v[i], v[i + 1])` is drawn without its end pixel, which is the
/// start of the next side. When `closed` and there are at least three
/// vertices the closing side back to `v[0]` is drawn too; otherwise the
/// final vertex's pixel is added so an open polyline ends where it should.
/// Pixels outside the area are dropped. Fewer than two vertices draw
/// nothing.
pub fn outline<S: SpanSink>(
    vertices: &[Vertex],
    closed: bool,
    color: &Rgba,
    width: u32,
    height: u32,
    sink: &mut S,
) {
    if vertices.len() < MIN_OUTLINE_VERTICES {
        return;
    }
    let (w, h) = (width as i32, height as i32);
    let mut plot = |(x, y): (i32, i32)| {
        if x >= 0 && x < w && y >= 0 && y < h {
            sink.point(x, y, color);
        }
    };

    let close = closed && vertices.len() >= MIN_AREA_VERTICES;
    let sides = if close {
        vertices.len()
    } else {
        vertices.len() - 1
    };

    for i in 0..sides {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        if off_area(a, b, w, h) {
            continue;
        }
        let line = LineBresenhamInterpolator::new(a.x, a.y, b.x, b.y);
        let steps = line.len() as usize;
        line.take(steps).for_each(&mut plot);
    }

    if !close {
        let last = vertices[vertices.len() - 1];
        plot((last.x, last.y));
    }
}

// ============================================================================
// Tests
// ============================================================================
