//! Demo render functions.
//!
//! Each function takes the flat `[x0, y0, x1, y1, ...]` vertex list the
//! canvas frontend sends and returns plain buffers; `lib.rs` wraps them for
//! JavaScript.

use scanfill::basics::Vertex;
use scanfill::color::{palette_color, preset_fill_color, Rgba8, DEFAULT_POLYGON_COLOR};
use scanfill::engine::ScanlineEngine;
use scanfill::pixfmt_rgba::{PixfmtRgba32, BPP};
use scanfill::renderer_base::RendererBase;
use scanfill::rendering_buffer::RowAccessor;

/// Floats per vertex in [`mesh`] output: position then normal.
pub const MESH_STRIDE: usize = 6;

/// Pair up a flat coordinate list. A trailing odd value is ignored.
pub fn parse_vertices(flat: &[i32]) -> Vec<Vertex> {
    flat.chunks_exact(2)
        .map(|p| Vertex::new(p[0], p[1]))
        .collect()
}

// ============================================================================
// Polygon
// ============================================================================

/// Render the polygon being edited on a white background.
///
/// The outline uses palette entry `line`. While open only the outline is
/// drawn; once closed the interior is filled with preset `preset` (1..=6,
/// anything else uses the default blue) and the closing side is added.
pub fn polygon(
    flat: &[i32],
    width: u32,
    height: u32,
    preset: u32,
    line: usize,
    closed: bool,
) -> Vec<u8> {
    let vertices = parse_vertices(flat);
    let engine = ScanlineEngine::new(width, height);
    let color = preset_fill_color(preset).unwrap_or(DEFAULT_POLYGON_COLOR);

    let mut ra = RowAccessor::new(width, height, BPP);
    {
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut ra));
        ren.clear(&Rgba8::new_opaque(255, 255, 255));
        if closed {
            engine.fill(&vertices, &color, &mut ren);
        }
        engine.outline(&vertices, closed, &palette_color(line), &mut ren);
    }
    ra.into_vec()
}

// ============================================================================
// Triangulation
// ============================================================================

/// Cap triangles as `[ax, ay, bx, by, cx, cy, ...]`.
pub fn triangles(flat: &[i32], height: u32) -> Vec<f64> {
    let vertices = parse_vertices(flat);
    let engine = ScanlineEngine::new(1, height);
    engine
        .triangulate(&vertices)
        .iter()
        .flat_map(|t| t.points.iter().flat_map(|p| [p.x, p.y]))
        .collect()
}

// ============================================================================
// Extrusion
// ============================================================================

/// Extruded prism as an interleaved triangle list for WebGL.
///
/// Every face is fanned from its first vertex and each emitted vertex
/// carries its face's flat normal. Empty for fewer than three vertices.
pub fn mesh(flat: &[i32], depth: f32) -> Vec<f32> {
    let vertices = parse_vertices(flat);
    let engine = ScanlineEngine::new(1, 1);
    let Some(prism) = engine.extrude(&vertices, depth) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (face, normal) in prism.faces.iter().zip(&prism.normals) {
        for k in 1..face.len().saturating_sub(1) {
            for &i in &[face[0], face[k], face[k + 1]] {
                out.extend_from_slice(&prism.positions[i as usize]);
                out.extend_from_slice(normal);
            }
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
