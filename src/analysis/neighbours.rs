//! Interior neighbour graph construction
//!
//! Pairs are found by walking each cell's vertices and the cells incident to
//! them, so the cost is linear in the number of cell-vertex incidences rather
//! than quadratic in the number of cells. Boundary cells are excluded from
//! every pair to keep tissue-edge effects out of the statistics.

use crate::topology::view::PolygonTopologyView;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Unordered pair of adjacent cell indices, stored as `(smaller, larger)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeighbourPair {
    first: usize,
    second: usize,
}

impl NeighbourPair {
    /// Create a pair, normalising the order of the two indices
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Smaller cell index
    pub const fn first(&self) -> usize {
        self.first
    }

    /// Larger cell index
    pub const fn second(&self) -> usize {
        self.second
    }

    /// Whether a cell is a member of the pair
    pub const fn contains(&self, cell: usize) -> bool {
        self.first == cell || self.second == cell
    }
}

/// How two cells must touch to count as neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyCriterion {
    /// Cells share at least one vertex
    #[default]
    SharedVertex,
    /// Cells share at least one polygon edge
    SharedEdge,
}

/// Deduplicated set of interior neighbour pairs in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighbourGraph {
    pairs: BTreeSet<NeighbourPair>,
}

impl NeighbourGraph {
    /// Iterate over the pairs in ascending order
    pub fn pairs(&self) -> impl Iterator<Item = &NeighbourPair> {
        self.pairs.iter()
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Test if the graph has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether two cells form a pair, in either order
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.pairs.contains(&NeighbourPair::new(a, b))
    }
}

impl FromIterator<NeighbourPair> for NeighbourGraph {
    fn from_iter<I: IntoIterator<Item = NeighbourPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Enumerate every unordered pair of interior cells sharing a vertex
pub fn build_interior_pairs<V: PolygonTopologyView>(view: &V) -> NeighbourGraph {
    build_interior_pairs_with(view, AdjacencyCriterion::SharedVertex)
}

/// Enumerate interior pairs under an explicit adjacency criterion
///
/// Each pair is generated only from its smaller index and collected into an
/// ordered set, so a pair touching along several vertices or edges still
/// appears once and the result does not depend on thread scheduling.
pub fn build_interior_pairs_with<V: PolygonTopologyView>(
    view: &V,
    criterion: AdjacencyCriterion,
) -> NeighbourGraph {
    let pairs: BTreeSet<NeighbourPair> = (0..view.num_cells())
        .into_par_iter()
        .filter(|&cell| !view.is_boundary_cell(cell))
        .flat_map_iter(|cell| {
            let candidates = match criterion {
                AdjacencyCriterion::SharedVertex => vertex_neighbours(view, cell),
                AdjacencyCriterion::SharedEdge => edge_neighbours(view, cell),
            };
            candidates
                .into_iter()
                .filter(move |&other| other > cell && !view.is_boundary_cell(other))
                .map(move |other| NeighbourPair::new(cell, other))
        })
        .collect();

    log::debug!(
        "Found {} interior neighbour pairs ({criterion:?})",
        pairs.len()
    );

    NeighbourGraph { pairs }
}

/// All cells sharing at least one vertex with `cell`, boundary cells included
pub fn vertex_neighbours<V: PolygonTopologyView>(view: &V, cell: usize) -> BTreeSet<usize> {
    view.cell_vertices(cell)
        .iter()
        .flat_map(|&vertex| view.cells_containing_vertex(vertex).iter().copied())
        .filter(|&other| other != cell)
        .collect()
}

/// All cells sharing at least one polygon edge with `cell`
pub fn edge_neighbours<V: PolygonTopologyView>(view: &V, cell: usize) -> BTreeSet<usize> {
    let vertices = view.cell_vertices(cell);
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .flat_map(|(&a, &b)| view.cells_sharing_edge(a, b))
        .filter(|&other| other != cell)
        .collect()
}
