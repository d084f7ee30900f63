//! Scanline polygon fill.
//!
//! Emits the interior of a polygon as horizontal pixel spans, one row at a
//! time, top to bottom. Spans go to a [`SpanSink`], which is either a raster
//! target such as [`RendererBase`](crate::renderer_base::RendererBase) or a
//! plain `Vec<FillEvent>` for callers that paint by other means.

use crate::active_edge_table::{scan_edge_table, ActiveEdgeTable, ScanlineVisitor};
use crate::basics::{iround, Vertex};
use crate::color::Rgba;
use crate::edge_table::build_edge_table;
use crate::error::MIN_AREA_VERTICES;

// ============================================================================
// Output types
// ============================================================================

/// A run of pixels `x1..=x2` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub y: i32,
    pub x1: i32,
    pub x2: i32,
}

impl Span {
    pub const fn new(y: i32, x1: i32, x2: i32) -> Self {
        Self { y, x1, x2 }
    }

    /// Number of pixels covered.
    pub fn len(&self) -> u32 {
        (self.x2 - self.x1 + 1).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.x2 < self.x1
    }
}

/// One emitted primitive, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillEvent {
    Span(Span),
    /// A lone intercept with no partner on its row.
    Point { x: i32, y: i32 },
}

impl FillEvent {
    pub fn row(&self) -> i32 {
        match self {
            FillEvent::Span(s) => s.y,
            FillEvent::Point { y, .. } => *y,
        }
    }

    /// Number of pixels this event paints.
    pub fn pixel_count(&self) -> u32 {
        match self {
            FillEvent::Span(s) => s.len(),
            FillEvent::Point { .. } => 1,
        }
    }
}

// ============================================================================
// SpanSink
// ============================================================================

/// Receiver of fill output. Coordinates are already clamped to the
/// drawable area.
pub trait SpanSink {
    fn span(&mut self, span: Span, color: &Rgba);
    fn point(&mut self, x: i32, y: i32, color: &Rgba);
}

/// Collects events and ignores the color.
impl SpanSink for Vec<FillEvent> {
    fn span(&mut self, span: Span, _color: &Rgba) {
        self.push(FillEvent::Span(span));
    }

    fn point(&mut self, x: i32, y: i32, _color: &Rgba) {
        self.push(FillEvent::Point { x, y });
    }
}

// ============================================================================
// Fill
// ============================================================================

struct FillVisitor<'a, S: SpanSink> {
    sink: &'a mut S,
    color: &'a Rgba,
    width: i32,
}

impl<'a, S: SpanSink> ScanlineVisitor for FillVisitor<'a, S> {
    fn visit_row(&mut self, row: i32, aet: &ActiveEdgeTable) {
        for (even, odd) in aet.pairs() {
            let mut x1 = iround(even.current_x);
            let mut x2 = iround(odd.current_x);
            if x1 > x2 {
                std::mem::swap(&mut x1, &mut x2);
            }
            let x1 = x1.max(0);
            let x2 = x2.min(self.width - 1);
            if x1 <= x2 {
                self.sink.span(Span::new(row, x1, x2), self.color);
            }
        }

        if let Some(last) = aet.unpaired() {
            let x = iround(last.current_x);
            if x >= 0 && x < self.width {
                self.sink.point(x, row, self.color);
            }
        }
    }
}

/// Fill the polygon `vertices` with `color` inside a `width` x `height`
/// drawable area, sending spans to `sink`.
///
/// Fewer than three vertices, or an empty area, draw nothing.
pub fn fill<S: SpanSink>(
    vertices: &[Vertex],
    color: &Rgba,
    width: u32,
    height: u32,
    sink: &mut S,
) {
    if vertices.len() < MIN_AREA_VERTICES || width == 0 || height == 0 {
        return;
    }
    let table = build_edge_table(vertices, height);
    let mut visitor = FillVisitor {
        sink,
        color,
        width: width as i32,
    };
    scan_edge_table(&table, &mut visitor);
}

/// Fill into a list of [`FillEvent`]s, top to bottom.
pub fn fill_spans(vertices: &[Vertex], width: u32, height: u32) -> Vec<FillEvent> {
    let mut events = Vec::new();
    fill(vertices, &Rgba::default(), width, height, &mut events);
    events
}

/// Total pixels painted by `events`.
pub fn pixel_count(events: &[FillEvent]) -> u64 {
    events.iter().map(|e| e.pixel_count() as u64).sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::polygon_area;

    fn poly(points: &[(i32, i32)]) -> Vec<Vertex> {
        points.iter().copied().map(Vertex::from).collect()
    }

    fn spans(events: &[FillEvent]) -> Vec<Span> {
        events
            .iter()
            .filter_map(|e| match e {
                FillEvent::Span(s) => Some(*s),
                FillEvent::Point { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(0, 2, 5).len(), 4);
        assert_eq!(Span::new(0, 3, 3).len(), 1);
        assert!(Span::new(0, 4, 3).is_empty());
        assert_eq!(Span::new(0, 4, 3).len(), 0);
    }

    #[test]
    fn test_too_few_vertices() {
        assert!(fill_spans(&[], 10, 10).is_empty());
        assert!(fill_spans(&poly(&[(1, 1)]), 10, 10).is_empty());
        assert!(fill_spans(&poly(&[(1, 1), (8, 8)]), 10, 10).is_empty());
    }

    #[test]
    fn test_empty_area() {
        let tri = poly(&[(0, 0), (4, 0), (0, 4)]);
        assert!(fill_spans(&tri, 0, 10).is_empty());
        assert!(fill_spans(&tri, 10, 0).is_empty());
    }

    #[test]
    fn test_right_triangle() {
        let events = fill_spans(&poly(&[(0, 0), (4, 0), (0, 4)]), 10, 5);
        assert_eq!(
            events,
            vec![
                FillEvent::Span(Span::new(0, 0, 4)),
                FillEvent::Span(Span::new(1, 0, 3)),
                FillEvent::Span(Span::new(2, 0, 2)),
                FillEvent::Span(Span::new(3, 0, 1)),
            ]
        );
    }

    #[test]
    fn test_axis_aligned_rectangles() {
        for &(x0, y0, x1, y1) in &[(0, 0, 4, 4), (3, 2, 17, 9), (5, 5, 6, 30)] {
            let rect = poly(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]);
            let events = fill_spans(&rect, 40, 40);
            assert_eq!(events.len() as i32, y1 - y0);
            for (i, e) in events.iter().enumerate() {
                assert_eq!(*e, FillEvent::Span(Span::new(y0 + i as i32, x0, x1)));
            }
        }
    }

    #[test]
    fn test_rectangle_either_winding() {
        let cw = poly(&[(2, 1), (8, 1), (8, 6), (2, 6)]);
        let ccw: Vec<Vertex> = cw.iter().rev().copied().collect();
        assert_eq!(fill_spans(&cw, 20, 20), fill_spans(&ccw, 20, 20));
    }

    #[test]
    fn test_flat_top_and_bottom_not_duplicated() {
        let trapezoid = poly(&[(2, 0), (6, 0), (8, 4), (0, 4)]);
        let events = fill_spans(&trapezoid, 20, 20);
        let rows: Vec<i32> = events.iter().map(FillEvent::row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3]);
        assert_eq!(events[0], FillEvent::Span(Span::new(0, 2, 6)));
    }

    #[test]
    fn test_diamond_valley_and_side_vertices() {
        let diamond = poly(&[(2, 0), (4, 2), (2, 4), (0, 2)]);
        let events = fill_spans(&diamond, 10, 10);
        assert_eq!(
            events,
            vec![
                FillEvent::Span(Span::new(1, 1, 3)),
                FillEvent::Span(Span::new(2, 0, 4)),
                FillEvent::Span(Span::new(3, 1, 3)),
            ]
        );
    }

    #[test]
    fn test_concave_notch_splits_rows() {
        let notch = poly(&[(0, 0), (8, 0), (8, 8), (4, 3), (0, 8)]);
        let events = fill_spans(&notch, 20, 20);
        let row = |y: i32| -> Vec<Span> {
            spans(&events).into_iter().filter(|s| s.y == y).collect()
        };
        assert_eq!(row(3), vec![Span::new(3, 0, 8)]);
        assert_eq!(row(4).len(), 2);
        assert_eq!(row(7).len(), 2);
        assert!(row(8).is_empty());
    }

    #[test]
    fn test_convex_area_within_rounding() {
        let octagon = poly(&[
            (10, 0),
            (20, 0),
            (30, 10),
            (30, 20),
            (20, 30),
            (10, 30),
            (0, 20),
            (0, 10),
        ]);
        let events = fill_spans(&octagon, 64, 64);
        let rows = 30.0;
        let area = polygon_area(&octagon).abs();
        let count = pixel_count(&events) as f64;
        assert!((count - area).abs() <= 2.0 * rows, "count {count} area {area}");
        assert_eq!(count, 730.0);
    }

    #[test]
    fn test_clamps_to_width() {
        let wide = poly(&[(-5, 0), (50, 0), (50, 3), (-5, 3)]);
        let events = fill_spans(&wide, 10, 10);
        assert_eq!(events.len(), 3);
        for e in spans(&events) {
            assert_eq!((e.x1, e.x2), (0, 9));
        }
    }

    #[test]
    fn test_fully_outside_columns_skipped() {
        let right = poly(&[(20, 0), (30, 0), (30, 3), (20, 3)]);
        assert!(fill_spans(&right, 10, 10).is_empty());
    }

    #[test]
    fn test_cut_off_at_height() {
        let tall = poly(&[(0, 0), (3, 0), (3, 100), (0, 100)]);
        let events = fill_spans(&tall, 10, 6);
        assert_eq!(events.len(), 6);
        assert_eq!(events.last().map(FillEvent::row), Some(5));
    }

    #[test]
    fn test_unpaired_intercept_emits_point() {
        // The right side starts above the area and is discarded, leaving the
        // left side alone on each row.
        let clipped = poly(&[(2, 0), (6, -2), (6, 3)]);
        let events = fill_spans(&clipped, 10, 10);
        assert!(!events.is_empty());
        assert!(events
            .iter()
            .all(|e| matches!(e, FillEvent::Point { .. })));
    }

    #[test]
    fn test_bowtie_is_deterministic() {
        let bowtie = poly(&[(0, 0), (10, 10), (10, 0), (0, 10)]);
        let a = fill_spans(&bowtie, 20, 20);
        let b = fill_spans(&bowtie, 20, 20);
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_sink_receives_color() {
        struct ColorCheck(Vec<Rgba>);
        impl SpanSink for ColorCheck {
            fn span(&mut self, _span: Span, color: &Rgba) {
                self.0.push(*color);
            }
            fn point(&mut self, _x: i32, _y: i32, color: &Rgba) {
                self.0.push(*color);
            }
        }
        let red = Rgba::new_rgb(1.0, 0.0, 0.0);
        let mut sink = ColorCheck(Vec::new());
        fill(&poly(&[(0, 0), (4, 0), (0, 4)]), &red, 10, 10, &mut sink);
        assert_eq!(sink.0.len(), 4);
        assert!(sink.0.iter().all(|c| *c == red));
    }
}
