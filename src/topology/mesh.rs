//! Two-dimensional vertex mesh with derived incidence and boundary flags
//!
//! Node positions live in an `N x 2` array; elements are vertex index lists.
//! Construction validates the polygons, orients them anticlockwise and
//! classifies boundary cells and nodes from edge ownership.

use crate::geometry::polygon;
use crate::geometry::vector::Point;
use crate::io::error::{Result, invalid_topology};
use crate::topology::cell_data::CellData;
use crate::topology::view::PolygonTopologyView;
use bitvec::prelude::*;
use ndarray::Array2;
use std::collections::HashSet;

/// Vertex-based tessellation snapshot
#[derive(Debug, Clone)]
pub struct VertexMesh {
    /// Node coordinates, one row per node
    nodes: Array2<f64>,
    /// Anticlockwise vertex indices of each element
    elements: Vec<Vec<usize>>,
    /// Named scalar items for each element
    cell_data: Vec<CellData>,
    /// Elements containing each node, ascending
    node_cells: Vec<Vec<usize>>,
    boundary_cells: BitVec,
    boundary_nodes: BitVec,
}

impl VertexMesh {
    /// Build a mesh from node coordinates and element vertex lists
    ///
    /// Clockwise elements are reversed so every polygon is anticlockwise.
    /// All cells start with empty data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `nodes` does not have exactly two columns
    /// - an element has fewer than three vertices, repeats a vertex or
    ///   references a node that does not exist
    /// - an edge is owned by more than two elements
    pub fn new(nodes: Array2<f64>, elements: Vec<Vec<usize>>) -> Result<Self> {
        if nodes.ncols() != 2 {
            return Err(invalid_topology(&format!(
                "node array must have 2 columns, found {}",
                nodes.ncols()
            )));
        }

        let num_nodes = nodes.nrows();
        let mut node_cells = vec![Vec::new(); num_nodes];
        let mut oriented = Vec::with_capacity(elements.len());

        for (cell, mut vertices) in elements.into_iter().enumerate() {
            if vertices.len() < 3 {
                return Err(invalid_topology(&format!(
                    "element {cell} has {} vertices, at least 3 required",
                    vertices.len()
                )));
            }

            let mut seen = HashSet::with_capacity(vertices.len());
            for &vertex in &vertices {
                if vertex >= num_nodes {
                    return Err(invalid_topology(&format!(
                        "element {cell} references node {vertex} but the mesh has {num_nodes} nodes"
                    )));
                }
                if !seen.insert(vertex) {
                    return Err(invalid_topology(&format!(
                        "element {cell} visits node {vertex} more than once"
                    )));
                }
            }

            let outline: Vec<Point> = vertices
                .iter()
                .map(|&vertex| node_point(&nodes, vertex))
                .collect();
            if polygon::signed_area(&outline) < 0.0 {
                log::debug!("Reorienting clockwise element {cell}");
                vertices.reverse();
            }

            for &vertex in &vertices {
                if let Some(cells) = node_cells.get_mut(vertex) {
                    cells.push(cell);
                }
            }
            oriented.push(vertices);
        }

        let num_cells = oriented.len();
        let mut mesh = Self {
            nodes,
            elements: oriented,
            cell_data: vec![CellData::new(); num_cells],
            node_cells,
            boundary_cells: bitvec![0; num_cells],
            boundary_nodes: bitvec![0; num_nodes],
        };
        mesh.classify_boundary()?;

        log::debug!(
            "Built vertex mesh with {} nodes, {} cells, {} boundary cells",
            mesh.num_nodes(),
            num_cells,
            mesh.boundary_cells.count_ones()
        );

        Ok(mesh)
    }

    /// Flag every cell and node touching an edge with a single owner
    fn classify_boundary(&mut self) -> Result<()> {
        let mut boundary_edges = Vec::new();

        for (cell, vertices) in self.elements.iter().enumerate() {
            let next_vertices = vertices.iter().cycle().skip(1);
            for (&a, &b) in vertices.iter().zip(next_vertices) {
                let owners = self.cells_sharing_edge(a, b).len();
                if owners > 2 {
                    return Err(invalid_topology(&format!(
                        "edge ({a}, {b}) of element {cell} is shared by {owners} elements"
                    )));
                }
                if owners == 1 {
                    boundary_edges.push((cell, a, b));
                }
            }
        }

        for (cell, a, b) in boundary_edges {
            if cell < self.boundary_cells.len() {
                self.boundary_cells.set(cell, true);
            }
            for node in [a, b] {
                if node < self.boundary_nodes.len() {
                    self.boundary_nodes.set(node, true);
                }
            }
        }

        Ok(())
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.nrows()
    }

    /// Node coordinate array, one row per node
    pub const fn nodes(&self) -> &Array2<f64> {
        &self.nodes
    }

    /// Vertex index lists of all elements
    pub fn elements(&self) -> &[Vec<usize>] {
        &self.elements
    }

    /// Whether a node lies on a boundary edge
    pub fn is_boundary_node(&self, node: usize) -> bool {
        self.boundary_nodes.get(node).as_deref() == Some(&true)
    }

    /// Number of boundary cells
    pub fn num_boundary_cells(&self) -> usize {
        self.boundary_cells.count_ones()
    }

    /// Mutable data items of a cell
    pub fn cell_data_mut(&mut self, cell: usize) -> Option<&mut CellData> {
        self.cell_data.get_mut(cell)
    }

    /// Set the same data item on every cell
    pub fn set_item_on_all_cells(&mut self, name: &str, value: f64) {
        for data in &mut self.cell_data {
            data.set_item(name, value);
        }
    }
}

impl PolygonTopologyView for VertexMesh {
    fn num_cells(&self) -> usize {
        self.elements.len()
    }

    fn cell_vertices(&self, cell: usize) -> &[usize] {
        self.elements.get(cell).map_or(&[], Vec::as_slice)
    }

    fn vertex_position(&self, vertex: usize) -> Point {
        node_point(&self.nodes, vertex)
    }

    fn cells_containing_vertex(&self, vertex: usize) -> &[usize] {
        self.node_cells.get(vertex).map_or(&[], Vec::as_slice)
    }

    fn is_boundary_cell(&self, cell: usize) -> bool {
        self.boundary_cells.get(cell).as_deref() == Some(&true)
    }

    fn cell_data(&self, cell: usize) -> Option<&CellData> {
        self.cell_data.get(cell)
    }
}

fn node_point(nodes: &Array2<f64>, node: usize) -> Point {
    [
        nodes.get([node, 0]).copied().unwrap_or(0.0),
        nodes.get([node, 1]).copied().unwrap_or(0.0),
    ]
}
