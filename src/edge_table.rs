//! Edge Table construction.
//!
//! Turns an ordered, implicitly closed vertex list into per-scanline buckets
//! of [`Edge`]s keyed by the row at which each edge becomes active. The scan
//! loops in [`crate::scanline_fill`] and [`crate::triangulate`] drain these
//! buckets into an [`ActiveEdgeTable`](crate::active_edge_table::ActiveEdgeTable).
//!
//! Rows are y pixel coordinates with y growing downwards, so the "lower"
//! endpoint of an edge is the one with the smaller y (nearer the top of the
//! drawable area).

use crate::basics::Vertex;

// ============================================================================
// Edge
// ============================================================================

/// One polygon side, oriented top to bottom.
///
/// The edge is active on rows `min_y..max_y` (end exclusive). `current_x` is
/// the x intercept on the row being scanned and moves by `inverse_slope`
/// after every row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub min_y: i32,
    pub max_y: i32,
    pub current_x: f64,
    pub inverse_slope: f64,
}

impl Edge {
    /// A horizontal side. It occupies its row in the table but is never active.
    pub fn horizontal(y: i32, x: i32) -> Self {
        Self {
            min_y: y,
            max_y: y,
            current_x: x as f64,
            inverse_slope: 0.0,
        }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.max_y <= self.min_y
    }

    /// True while `row` is above the exclusive end row.
    #[inline]
    pub fn is_active_at(&self, row: i32) -> bool {
        row < self.max_y
    }

    /// The x intercept one row further down, without mutating.
    #[inline]
    pub fn next_x(&self) -> f64 {
        self.current_x + self.inverse_slope
    }

    /// Step the x intercept to the next row.
    #[inline]
    pub fn advance(&mut self) {
        self.current_x += self.inverse_slope;
    }
}

// ============================================================================
// EdgeTable
// ============================================================================

/// Edges bucketed by starting row, sized to the drawable height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTable {
    rows: Vec<Vec<Edge>>,
}

impl EdgeTable {
    /// An empty table with `height` buckets.
    pub fn new(height: u32) -> Self {
        Self {
            rows: vec![Vec::new(); height as usize],
        }
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Insert `edge` into the bucket for `edge.min_y`.
    ///
    /// Edges starting outside `[0, height)` are discarded; returns whether
    /// the edge was kept.
    pub fn insert(&mut self, edge: Edge) -> bool {
        match self.row_index(edge.min_y) {
            Some(i) => {
                self.rows[i].push(edge);
                true
            }
            None => false,
        }
    }

    /// Edges starting on `row`, empty for rows outside the table.
    pub fn bucket(&self, row: i32) -> &[Edge] {
        match self.row_index(row) {
            Some(i) => &self.rows[i],
            None => &[],
        }
    }

    /// First row holding at least one edge.
    pub fn first_row(&self) -> Option<i32> {
        self.next_occupied_row(0)
    }

    /// First row at or after `from` holding at least one edge.
    pub fn next_occupied_row(&self, from: i32) -> Option<i32> {
        let start = from.max(0) as usize;
        self.rows
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, bucket)| !bucket.is_empty())
            .map(|(i, _)| i as i32)
    }

    /// Total number of stored edges, horizontal ones included.
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Iterate `(row, bucket)` for every non-empty bucket, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (i32, &[Edge])> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(i, bucket)| (i as i32, bucket.as_slice()))
    }

    #[inline]
    fn row_index(&self, row: i32) -> Option<usize> {
        if row >= 0 && (row as usize) < self.rows.len() {
            Some(row as usize)
        } else {
            None
        }
    }
}

// ============================================================================
// Vertex classification
// ============================================================================

/// How a vertex sits relative to its two polygon neighbours in y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Both neighbours have strictly greater y: a local minimum where two
    /// edges start together.
    Valley,
    /// Both neighbours have strictly smaller y: a local maximum where two
    /// edges end together.
    Peak,
    /// Anything else, including neighbours level with the vertex.
    Monotone,
}

/// Classify the vertex at `index` by comparing the y of its previous and
/// next vertices (wrapping around) with its own.
pub fn classify_vertex(vertices: &[Vertex], index: usize) -> VertexKind {
    let n = vertices.len();
    if n < 2 {
        return VertexKind::Monotone;
    }
    let y = vertices[index].y;
    let prev = vertices[(index + n - 1) % n].y;
    let next = vertices[(index + 1) % n].y;

    if prev > y && next > y {
        VertexKind::Valley
    } else if prev < y && next < y {
        VertexKind::Peak
    } else {
        VertexKind::Monotone
    }
}

/// Δx/Δy from `from` to `to`; zero for a horizontal pair.
#[inline]
pub fn inverse_slope(from: Vertex, to: Vertex) -> f64 {
    let dy = to.y as f64 - from.y as f64;
    if dy == 0.0 {
        return 0.0;
    }
    (to.x as f64 - from.x as f64) / dy
}

// ============================================================================
// Construction
// ============================================================================

/// Build the Edge Table for the closed polygon `vertices` over rows
/// `0..height`.
///
/// Every side `(v[i], v[i + 1])`, including the closing side, yields one
/// edge. An edge whose top endpoint is a [`VertexKind::Valley`] starts one
/// row later, so the two edges meeting there do not both register a span
/// boundary on the vertex row. Fewer than two vertices yield an empty table.
pub fn build_edge_table(vertices: &[Vertex], height: u32) -> EdgeTable {
    let mut table = EdgeTable::new(height);
    let n = vertices.len();
    if n < 2 {
        return table;
    }

    for i in 0..n {
        let j = (i + 1) % n;
        let (a, b) = (vertices[i], vertices[j]);

        if a.y == b.y {
            table.insert(Edge::horizontal(a.y, a.x));
            continue;
        }

        let (top_index, top, bottom) = if a.y < b.y { (i, a, b) } else { (j, b, a) };
        let slope = inverse_slope(a, b);
        let mut edge = Edge {
            min_y: top.y,
            max_y: bottom.y,
            current_x: top.x as f64,
            inverse_slope: slope,
        };

        if classify_vertex(vertices, top_index) == VertexKind::Valley {
            edge.min_y += 1;
            edge.advance();
        }

        table.insert(edge);
    }

    table
}

// ============================================================================
// Tests
// ============================================================================
