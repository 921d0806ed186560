//! Read-only polygon topology queries over a tessellation snapshot
//!
//! Only vertex-based tessellations implement [`PolygonTopologyView`]. The
//! analysis engines are generic over it, so running them on a population
//! without polygon structure is rejected before any computation starts.

use crate::geometry::polygon;
use crate::geometry::vector::Point;
use crate::io::error::{AnalysisError, Result};
use crate::topology::cell_data::CellData;

/// Authoritative adjacency, boundary and data queries for one snapshot
///
/// Cell indices run over `0..num_cells()`. Out-of-range indices yield empty
/// vertex/cell lists rather than panicking.
pub trait PolygonTopologyView: Sync {
    /// Number of cells in the snapshot
    fn num_cells(&self) -> usize;

    /// Ordered, anticlockwise vertex indices of a cell polygon
    fn cell_vertices(&self, cell: usize) -> &[usize];

    /// Position of a vertex
    fn vertex_position(&self, vertex: usize) -> Point;

    /// Indices of the cells whose polygons contain a vertex, ascending
    fn cells_containing_vertex(&self, vertex: usize) -> &[usize];

    /// Whether the cell has at least one edge with no second owning cell
    fn is_boundary_cell(&self, cell: usize) -> bool;

    /// Scalar data items of a cell
    fn cell_data(&self, cell: usize) -> Option<&CellData>;

    /// Look up a named data item, failing if it is absent
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingAttribute`] if the cell has no such item
    fn cell_data_item(&self, cell: usize, name: &str) -> Result<f64> {
        self.cell_data(cell)
            .and_then(|data| data.item(name))
            .ok_or_else(|| AnalysisError::MissingAttribute {
                cell,
                item: name.to_string(),
            })
    }

    /// Polygon vertex coordinates of a cell in boundary order
    fn cell_polygon(&self, cell: usize) -> Vec<Point> {
        self.cell_vertices(cell)
            .iter()
            .map(|&vertex| self.vertex_position(vertex))
            .collect()
    }

    /// Current area of a cell
    fn cell_area(&self, cell: usize) -> f64 {
        polygon::area(&self.cell_polygon(cell))
    }

    /// Current perimeter of a cell
    fn cell_perimeter(&self, cell: usize) -> f64 {
        polygon::perimeter(&self.cell_polygon(cell))
    }

    /// Cells whose polygons join two vertices by an edge, ascending
    ///
    /// Candidates come from merging the two sorted incidence lists, so the
    /// cost is linear in the vertex degrees. A cell containing both vertices
    /// without them being consecutive in its polygon does not own the edge.
    fn cells_sharing_edge(&self, a: usize, b: usize) -> Vec<usize> {
        let first = self.cells_containing_vertex(a);
        let second = self.cells_containing_vertex(b);
        let mut shared = Vec::new();
        let (mut i, mut j) = (0, 0);
        while let (Some(&x), Some(&y)) = (first.get(i), second.get(j)) {
            match x.cmp(&y) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    if joins_vertices(self.cell_vertices(x), a, b) {
                        shared.push(x);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }

    /// Whether exactly one cell owns the edge between two vertices
    fn is_boundary_edge(&self, a: usize, b: usize) -> bool {
        self.cells_sharing_edge(a, b).len() == 1
    }

    /// Indices of all non-boundary cells, ascending
    fn interior_cells(&self) -> Vec<usize> {
        (0..self.num_cells())
            .filter(|&cell| !self.is_boundary_cell(cell))
            .collect()
    }
}

/// Whether `a` and `b` are cyclically consecutive in a polygon's vertex list
fn joins_vertices(vertices: &[usize], a: usize, b: usize) -> bool {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .any(|(&u, &v)| (u == a && v == b) || (u == b && v == a))
}
