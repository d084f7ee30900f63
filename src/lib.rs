//! # scanfill
//!
//! Scanline polygon filling and triangulation with an Edge Table / Active
//! Edge Table (ET/AET).
//!
//! Given an ordered list of integer vertices describing a closed polygon,
//! possibly concave and possibly self-intersecting, the engine produces:
//!
//! - horizontal pixel spans filling the interior under the even-odd rule
//! - a row-resolution triangle mesh covering the same interior
//! - a Bresenham outline of the polygon's sides
//! - an extruded prism mesh whose caps come from the triangulation
//!
//! ## Architecture
//!
//! Every pass shares one pipeline:
//!
//! 1. **Edge Table**: non-horizontal edges bucketed by their top row, with
//!    valley vertices shortened by one row so they are counted once
//! 2. **Active Edge Table**: edges crossing the current row, sorted by x
//! 3. **Visitor**: turns each sorted row into spans, triangles, or pixels
//!
//! Output goes through the [`SpanSink`](scanline_fill::SpanSink) trait, so
//! the same fill can collect events or paint an RGBA buffer via
//! [`RendererBase`](renderer_base::RendererBase).

// Foundation types
pub mod basics;
pub mod color;
pub mod error;

// Scanline core
pub mod active_edge_table;
pub mod edge_table;
pub mod scanline_fill;
pub mod triangulate;

// Derived passes
pub mod engine;
pub mod extrude;
pub mod outline;

// Raster target
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod rendering_buffer;

pub use basics::{PointD, Vertex};
pub use color::{Rgba, Rgba8};
pub use engine::ScanlineEngine;
pub use error::ScanError;
pub use extrude::ExtrudedMesh;
pub use scanline_fill::{FillEvent, Span, SpanSink};
pub use triangulate::Triangle;
