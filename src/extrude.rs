//! Prism extrusion of a filled polygon.
//!
//! Builds a closed 3D mesh from a screen-space polygon: side walls joining
//! a front and a back copy of the outline, and caps taken from
//! [`triangulate`], so concave and self-intersecting outlines extrude
//! without ear clipping.
//!
//! Mesh coordinates are centred on the vertex centroid, scaled uniformly,
//! and y-up (screen y is flipped). The front face lies at `z = +depth * scale
//! / 2`, the back face at the negative of that.

use crate::basics::{centroid, polygon_area, PointD, Vertex};
use crate::error::MIN_AREA_VERTICES;
use crate::triangulate::triangulate;

/// Screen-to-model scale used by [`ScanlineEngine`](crate::engine::ScanlineEngine).
pub const DEFAULT_EXTRUDE_SCALE: f32 = 0.01;

/// Row limit for cap triangulation. Caps of taller polygons stop here.
pub const MAX_CAP_ROWS: u32 = 4096;

/// An indexed polygon mesh with one normal per face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtrudedMesh {
    pub positions: Vec<[f32; 3]>,
    /// Vertex indices into `positions`, counter-clockwise seen from outside.
    pub faces: Vec<Vec<u32>>,
    /// Unit normal of each face; zero for degenerate faces.
    pub normals: Vec<[f32; 3]>,
}

impl ExtrudedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn push_vertex(&mut self, p: [f32; 3]) -> u32 {
        self.positions.push(p);
        (self.positions.len() - 1) as u32
    }

    /// Recompute `normals` from the current faces.
    pub fn calc_normals(&mut self) {
        let positions = &self.positions;
        self.normals = self
            .faces
            .iter()
            .map(|face| newell_normal(face.iter().map(|&i| positions[i as usize])))
            .collect();
    }
}

/// Newell's method over a closed vertex loop.
fn newell_normal(points: impl Iterator<Item = [f32; 3]>) -> [f32; 3] {
    let mut n = [0.0f32; 3];
    let mut iter = points.peekable();
    let Some(first) = iter.peek().copied() else {
        return n;
    };
    while let Some(a) = iter.next() {
        let b = iter.peek().copied().unwrap_or(first);
        n[0] += (a[1] - b[1]) * (a[2] + b[2]);
        n[1] += (a[2] - b[2]) * (a[0] + b[0]);
        n[2] += (a[0] - b[0]) * (a[1] + b[1]);
    }
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len > 0.0 {
        n.iter_mut().for_each(|c| *c /= len);
    }
    n
}

/// Extrude `vertices` to a prism `depth` screen units deep.
///
/// Returns `None` for fewer than three vertices. The first `2 * n` positions
/// are the front and back outline; the walls are the first `n` faces. Cap
/// triangles follow with their own vertices so each can carry a flat normal.
/// Caps cover at most [`MAX_CAP_ROWS`] rows from the polygon's top.
pub fn extrude(vertices: &[Vertex], depth: f32, scale: f32) -> Option<ExtrudedMesh> {
    if vertices.len() < MIN_AREA_VERTICES {
        return None;
    }
    let n = vertices.len() as u32;
    let c = centroid(vertices);
    let half = depth * scale * 0.5;
    let model = |p: PointD, z: f32| {
        [
            ((p.x - c.x) as f32) * scale,
            (-(p.y - c.y) as f32) * scale,
            z,
        ]
    };

    let mut mesh = ExtrudedMesh::default();
    for z in [half, -half] {
        for v in vertices {
            mesh.push_vertex(model(v.to_point(), z));
        }
    }

    // Clockwise on screen is counter-clockwise once y is flipped.
    let clockwise = polygon_area(vertices) >= 0.0;
    for i in 0..n {
        let next = (i + 1) % n;
        mesh.faces.push(if clockwise {
            vec![i, next, next + n, i + n]
        } else {
            vec![i, i + n, next + n, next]
        });
    }

    // Caps are triangulated with the top row moved to zero so nothing above
    // the screen is cut off.
    let min_y = vertices.iter().map(|v| v.y as i64).min().unwrap_or(0);
    let max_y = vertices.iter().map(|v| v.y as i64).max().unwrap_or(0);
    let shifted: Vec<Vertex> = vertices
        .iter()
        .map(|v| Vertex::new(v.x, (v.y as i64 - min_y).min(i32::MAX as i64) as i32))
        .collect();
    let rows = (max_y - min_y + 1).min(MAX_CAP_ROWS as i64) as u32;
    let triangles = triangulate(&shifted, rows);
    let unshift = |p: PointD| PointD::new(p.x, p.y + min_y as f64);

    // Scan triangles are clockwise on screen: reversed they face +z.
    for t in &triangles {
        let face = t
            .reversed()
            .points
            .iter()
            .map(|&p| mesh.push_vertex(model(unshift(p), half)))
            .collect();
        mesh.faces.push(face);
    }
    for t in &triangles {
        let face = t
            .points
            .iter()
            .map(|&p| mesh.push_vertex(model(unshift(p), -half)))
            .collect();
        mesh.faces.push(face);
    }

    mesh.calc_normals();
    Some(mesh)
}

// ============================================================================
// Tests
// ============================================================================
