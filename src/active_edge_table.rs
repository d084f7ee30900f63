//! Active Edge Table and the shared row-scan skeleton.
//!
//! [`scan_edge_table`] walks the rows of an [`EdgeTable`] top to bottom,
//! maintaining the set of edges crossing the current row, and hands each row
//! to a [`ScanlineVisitor`]. Filling and triangulation are both visitors over
//! the same walk; they differ only in what they emit per pair of edges.

use crate::edge_table::{Edge, EdgeTable};

// ============================================================================
// ActiveEdgeTable
// ============================================================================

/// Edges crossing the row being scanned.
///
/// After [`sort`](Self::sort) the entries are ordered by ascending
/// `current_x`; entries `2k` and `2k + 1` bound one interior run.
#[derive(Debug, Clone, Default)]
pub struct ActiveEdgeTable {
    edges: Vec<Edge>,
}

impl ActiveEdgeTable {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Move the edges of `bucket` in, skipping any that are not active on
    /// `row` (horizontal sides, and sides shortened to nothing by the valley
    /// correction).
    pub fn activate(&mut self, bucket: &[Edge], row: i32) {
        self.edges
            .extend(bucket.iter().filter(|e| e.is_active_at(row)).copied());
    }

    /// Stable sort by `current_x`.
    pub fn sort(&mut self) {
        self.edges
            .sort_by(|a, b| a.current_x.total_cmp(&b.current_x));
    }

    /// Step every edge's x intercept to the next row.
    pub fn advance(&mut self) {
        for edge in &mut self.edges {
            edge.advance();
        }
    }

    /// Drop edges that have ended by `row`.
    pub fn retire(&mut self, row: i32) {
        self.edges.retain(|e| e.is_active_at(row));
    }

    /// Consecutive `(even, odd)` entries.
    pub fn pairs(&self) -> impl Iterator<Item = (&Edge, &Edge)> {
        self.edges.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// The trailing entry when the table has odd size.
    pub fn unpaired(&self) -> Option<&Edge> {
        if self.edges.len() % 2 == 1 {
            self.edges.last()
        } else {
            None
        }
    }
}

// ============================================================================
// Row scan
// ============================================================================

/// Per-row callback for [`scan_edge_table`].
pub trait ScanlineVisitor {
    /// Called once per scanned row with the sorted active edges.
    fn visit_row(&mut self, row: i32, aet: &ActiveEdgeTable);
}

/// Walk `table` from its first occupied row to its last row.
///
/// Per row: pull in the row's bucket, sort, visit, advance every x
/// intercept, then retire edges that end before the next row. Rows where
/// nothing is active are skipped up to the next occupied bucket. The walk
/// never goes past `table.height()`, so edges extending below the drawable
/// area are cut off there.
pub fn scan_edge_table<V: ScanlineVisitor>(table: &EdgeTable, visitor: &mut V) {
    let height = table.height() as i32;
    let mut row = match table.first_row() {
        Some(row) => row,
        None => return,
    };
    let mut aet = ActiveEdgeTable::new();

    while row < height {
        aet.activate(table.bucket(row), row);
        aet.sort();
        if !aet.is_empty() {
            visitor.visit_row(row, &aet);
        }
        aet.advance();
        row += 1;
        aet.retire(row);

        if aet.is_empty() {
            match table.next_occupied_row(row) {
                Some(next) => row = next,
                None => break,
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::Vertex;
    use crate::edge_table::build_edge_table;

    fn edge(min_y: i32, max_y: i32, x: f64, slope: f64) -> Edge {
        Edge {
            min_y,
            max_y,
            current_x: x,
            inverse_slope: slope,
        }
    }

    #[derive(Default)]
    struct Recorder {
        rows: Vec<(i32, Vec<f64>)>,
    }

    impl ScanlineVisitor for Recorder {
        fn visit_row(&mut self, row: i32, aet: &ActiveEdgeTable) {
            self.rows
                .push((row, aet.edges().iter().map(|e| e.current_x).collect()));
        }
    }

    #[test]
    fn test_activate_skips_inactive() {
        let mut aet = ActiveEdgeTable::new();
        aet.activate(
            &[Edge::horizontal(3, 7), edge(3, 6, 1.0, 0.0), edge(3, 3, 2.0, 1.0)],
            3,
        );
        assert_eq!(aet.len(), 1);
        assert_eq!(aet.edges()[0].current_x, 1.0);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut aet = ActiveEdgeTable::new();
        aet.activate(
            &[
                edge(0, 5, 4.0, 0.0),
                edge(0, 5, 2.0, 1.0),
                edge(0, 5, 2.0, -1.0),
            ],
            0,
        );
        aet.sort();
        let slopes: Vec<f64> = aet.edges().iter().map(|e| e.inverse_slope).collect();
        assert_eq!(slopes, vec![1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_advance_and_retire() {
        let mut aet = ActiveEdgeTable::new();
        aet.activate(&[edge(0, 1, 0.0, 2.0), edge(0, 3, 5.0, -0.5)], 0);
        aet.advance();
        aet.retire(1);
        assert_eq!(aet.len(), 1);
        assert_eq!(aet.edges()[0].current_x, 4.5);
    }

    #[test]
    fn test_pairs_and_unpaired() {
        let mut aet = ActiveEdgeTable::new();
        aet.activate(
            &[edge(0, 5, 1.0, 0.0), edge(0, 5, 2.0, 0.0), edge(0, 5, 3.0, 0.0)],
            0,
        );
        let pairs: Vec<(f64, f64)> = aet.pairs().map(|(a, b)| (a.current_x, b.current_x)).collect();
        assert_eq!(pairs, vec![(1.0, 2.0)]);
        assert_eq!(aet.unpaired().map(|e| e.current_x), Some(3.0));

        aet.retire(5);
        assert!(aet.unpaired().is_none());
        assert_eq!(aet.pairs().count(), 0);
    }

    #[test]
    fn test_scan_triangle_rows() {
        let tri = [Vertex::new(0, 0), Vertex::new(4, 0), Vertex::new(0, 4)];
        let table = build_edge_table(&tri, 5);
        let mut rec = Recorder::default();
        scan_edge_table(&table, &mut rec);
        assert_eq!(
            rec.rows,
            vec![
                (0, vec![0.0, 4.0]),
                (1, vec![0.0, 3.0]),
                (2, vec![0.0, 2.0]),
                (3, vec![0.0, 1.0]),
            ]
        );
    }

    #[test]
    fn test_scan_skips_empty_gap() {
        let mut table = EdgeTable::new(10);
        table.insert(edge(1, 3, 0.0, 0.0));
        table.insert(edge(1, 3, 2.0, 0.0));
        table.insert(edge(6, 8, 0.0, 0.0));
        table.insert(edge(6, 8, 2.0, 0.0));
        let mut rec = Recorder::default();
        scan_edge_table(&table, &mut rec);
        let rows: Vec<i32> = rec.rows.iter().map(|(row, _)| *row).collect();
        assert_eq!(rows, vec![1, 2, 6, 7]);
    }

    #[test]
    fn test_scan_stops_at_table_height() {
        let mut table = EdgeTable::new(4);
        table.insert(edge(2, 100, 0.0, 0.0));
        table.insert(edge(2, 100, 3.0, 0.0));
        let mut rec = Recorder::default();
        scan_edge_table(&table, &mut rec);
        let rows: Vec<i32> = rec.rows.iter().map(|(row, _)| *row).collect();
        assert_eq!(rows, vec![2, 3]);
    }

    #[test]
    fn test_scan_empty_table() {
        let mut rec = Recorder::default();
        scan_edge_table(&EdgeTable::new(8), &mut rec);
        assert!(rec.rows.is_empty());
        scan_edge_table(&EdgeTable::new(0), &mut rec);
        assert!(rec.rows.is_empty());
    }
}
