//! Scanline engine facade.
//!
//! `ScanlineEngine` carries the drawable bounds shared by every pass and
//! forwards to the free functions in [`edge_table`](crate::edge_table),
//! [`scanline_fill`](crate::scanline_fill), [`triangulate`](crate::triangulate),
//! [`outline`](crate::outline) and [`extrude`](crate::extrude). It holds no
//! other state: each call builds its own Edge Table and Active Edge Table.

use crate::basics::Vertex;
use crate::color::Rgba;
use crate::edge_table::{build_edge_table, EdgeTable};
use crate::error::{check_vertex_count, ScanError, MIN_AREA_VERTICES, MIN_OUTLINE_VERTICES};
use crate::extrude::{extrude, ExtrudedMesh, DEFAULT_EXTRUDE_SCALE};
use crate::outline::outline;
use crate::scanline_fill::{fill, fill_spans, FillEvent, SpanSink};
use crate::triangulate::{triangulate, Triangle};

/// Polygon fill and triangulation over a `width` x `height` area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanlineEngine {
    width: u32,
    height: u32,
}

impl ScanlineEngine {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Resize the drawable area, e.g. after the canvas is resized.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn build_edge_table(&self, vertices: &[Vertex]) -> EdgeTable {
        build_edge_table(vertices, self.height)
    }

    pub fn fill<S: SpanSink>(&self, vertices: &[Vertex], color: &Rgba, sink: &mut S) {
        fill(vertices, color, self.width, self.height, sink);
    }

    pub fn fill_spans(&self, vertices: &[Vertex]) -> Vec<FillEvent> {
        fill_spans(vertices, self.width, self.height)
    }

    pub fn triangulate(&self, vertices: &[Vertex]) -> Vec<Triangle> {
        triangulate(vertices, self.height)
    }

    pub fn outline<S: SpanSink>(
        &self,
        vertices: &[Vertex],
        closed: bool,
        color: &Rgba,
        sink: &mut S,
    ) {
        outline(vertices, closed, color, self.width, self.height, sink);
    }

    /// Extrude at [`DEFAULT_EXTRUDE_SCALE`]. The caps are not limited to the
    /// drawable area.
    pub fn extrude(&self, vertices: &[Vertex], depth: f32) -> Option<ExtrudedMesh> {
        extrude(vertices, depth, DEFAULT_EXTRUDE_SCALE)
    }

    // ========================================================================
    // Checked variants
    // ========================================================================

    fn check_bounds(&self) -> Result<(), ScanError> {
        if self.width == 0 || self.height == 0 {
            return Err(ScanError::EmptyBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn try_fill<S: SpanSink>(
        &self,
        vertices: &[Vertex],
        color: &Rgba,
        sink: &mut S,
    ) -> Result<(), ScanError> {
        self.check_bounds()?;
        check_vertex_count(vertices.len(), MIN_AREA_VERTICES)?;
        self.fill(vertices, color, sink);
        Ok(())
    }

    pub fn try_fill_spans(&self, vertices: &[Vertex]) -> Result<Vec<FillEvent>, ScanError> {
        self.check_bounds()?;
        check_vertex_count(vertices.len(), MIN_AREA_VERTICES)?;
        Ok(self.fill_spans(vertices))
    }

    pub fn try_triangulate(&self, vertices: &[Vertex]) -> Result<Vec<Triangle>, ScanError> {
        self.check_bounds()?;
        check_vertex_count(vertices.len(), MIN_AREA_VERTICES)?;
        Ok(self.triangulate(vertices))
    }

    pub fn try_outline<S: SpanSink>(
        &self,
        vertices: &[Vertex],
        closed: bool,
        color: &Rgba,
        sink: &mut S,
    ) -> Result<(), ScanError> {
        self.check_bounds()?;
        check_vertex_count(vertices.len(), MIN_OUTLINE_VERTICES)?;
        self.outline(vertices, closed, color, sink);
        Ok(())
    }

    pub fn try_extrude(&self, vertices: &[Vertex], depth: f32) -> Result<ExtrudedMesh, ScanError> {
        check_vertex_count(vertices.len(), MIN_AREA_VERTICES)?;
        self.extrude(vertices, depth).ok_or(ScanError::InsufficientVertices {
            required: MIN_AREA_VERTICES,
            found: vertices.len(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
