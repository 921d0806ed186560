//! Per-cell polygon summaries for vertex-model output

use crate::analysis::neighbours::vertex_neighbours;
use crate::topology::view::PolygonTopologyView;
use rayon::prelude::*;

/// Geometric and neighbourhood data for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPolygonSummary {
    /// Cell index
    pub cell: usize,
    /// Number of polygon vertices
    pub polygon_class: usize,
    /// Number of cells sharing at least one vertex
    pub neighbours: usize,
    /// Polygon area
    pub area: f64,
    /// Polygon perimeter
    pub perimeter: f64,
    /// Mean area of the neighbouring cells, 0 without neighbours
    pub mean_neighbour_area: f64,
    /// Mean neighbour count of the neighbouring cells, 0 without neighbours
    pub mean_neighbour_neighbours: f64,
    /// Whether the cell has a boundary edge
    pub boundary: bool,
    /// Whether an interior cell touches a boundary cell
    pub inner_boundary: bool,
}

/// Summarise one cell
pub fn summarise_cell<V: PolygonTopologyView>(view: &V, cell: usize) -> CellPolygonSummary {
    let neighbours = vertex_neighbours(view, cell);
    let boundary = view.is_boundary_cell(cell);

    let (area_sum, count_sum) = neighbours
        .iter()
        .fold((0.0, 0.0), |(area_sum, count_sum), &other| {
            (
                area_sum + view.cell_area(other),
                count_sum + vertex_neighbours(view, other).len() as f64,
            )
        });
    let (mean_neighbour_area, mean_neighbour_neighbours) = if neighbours.is_empty() {
        (0.0, 0.0)
    } else {
        let count = neighbours.len() as f64;
        (area_sum / count, count_sum / count)
    };

    CellPolygonSummary {
        cell,
        polygon_class: view.cell_vertices(cell).len(),
        neighbours: neighbours.len(),
        area: view.cell_area(cell),
        perimeter: view.cell_perimeter(cell),
        mean_neighbour_area,
        mean_neighbour_neighbours,
        boundary,
        inner_boundary: !boundary
            && neighbours
                .iter()
                .any(|&other| view.is_boundary_cell(other)),
    }
}

/// Summarise every cell, in ascending cell order
pub fn summarise_cells<V: PolygonTopologyView>(view: &V) -> Vec<CellPolygonSummary> {
    (0..view.num_cells())
        .into_par_iter()
        .map(|cell| summarise_cell(view, cell))
        .collect()
}
