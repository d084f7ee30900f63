//! Row-resolution triangulation.
//!
//! Uses the same Edge Table walk as the fill, but instead of spans every
//! pair of active edges on row `y` yields the one-row trapezoid between
//! `y` and `y + 1`, split into two triangles. The output is deliberately
//! fine grained: each row is handled on its own, so concave and
//! self-intersecting outlines need no topology tracking.
//!
//! Triangle winding follows the scan: for a pair whose edges do not cross
//! within the row, both triangles have positive [`Triangle::signed_area`]
//! in y-down coordinates. A mesh builder that needs the opposite facing
//! reverses the vertex order.

use crate::active_edge_table::{scan_edge_table, ActiveEdgeTable, ScanlineVisitor};
use crate::basics::{PointD, Vertex};
use crate::edge_table::build_edge_table;
use crate::error::MIN_AREA_VERTICES;

/// Three points in the input coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [PointD; 3],
}

impl Triangle {
    pub const fn new(a: PointD, b: PointD, c: PointD) -> Self {
        Self { points: [a, b, c] }
    }

    /// Half the cross product of `b - a` and `c - a`.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.points;
        ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)) * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// The same triangle with the opposite winding.
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.points;
        Self::new(c, b, a)
    }
}

struct TriangleVisitor<'a> {
    out: &'a mut Vec<Triangle>,
}

impl<'a> ScanlineVisitor for TriangleVisitor<'a> {
    fn visit_row(&mut self, row: i32, aet: &ActiveEdgeTable) {
        let top = row as f64;
        let bottom = top + 1.0;
        for (even, odd) in aet.pairs() {
            let top_even = PointD::new(even.current_x, top);
            let top_odd = PointD::new(odd.current_x, top);
            let bottom_even = PointD::new(even.next_x(), bottom);
            let bottom_odd = PointD::new(odd.next_x(), bottom);

            self.out.push(Triangle::new(top_even, top_odd, bottom_even));
            self.out.push(Triangle::new(top_odd, bottom_odd, bottom_even));
        }
    }
}

/// Triangulate the polygon `vertices` over rows `0..height`.
///
/// Fewer than three vertices yield no triangles.
pub fn triangulate(vertices: &[Vertex], height: u32) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    if vertices.len() < MIN_AREA_VERTICES {
        return triangles;
    }
    let table = build_edge_table(vertices, height);
    scan_edge_table(&table, &mut TriangleVisitor { out: &mut triangles });
    triangles
}

/// Sum of signed triangle areas.
pub fn total_signed_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::signed_area).sum()
}

// ============================================================================
// Tests
// ============================================================================
