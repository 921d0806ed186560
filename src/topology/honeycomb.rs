//! Regular hexagonal vertex mesh generation with optional seeded jitter
//!
//! Cells are pointy-top hexagons laid out in rows; odd rows are shifted right
//! by half a cell width. Shared corners are merged into single nodes so that
//! neighbouring cells reference the same vertices; corners are identified by
//! integer lattice coordinates rather than by their floating-point positions.

use crate::geometry::vector::Point;
use crate::io::configuration::{DEFAULT_CELL_AREA, DEFAULT_JITTER, DEFAULT_SEED, TARGET_AREA_ITEM};
use crate::io::error::{Result, invalid_parameter};
use crate::topology::mesh::VertexMesh;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Corner offsets from a cell centre, anticlockwise from 30 degrees
///
/// Units are half a cell width along x and half a side length along y, so
/// every corner of the sheet has an exact integer lattice key.
const CORNER_OFFSETS: [(i64, i64); 6] = [(1, 1), (0, 2), (-1, 1), (-1, -1), (0, -2), (1, -1)];

/// Builder for honeycomb vertex meshes
#[derive(Debug, Clone)]
pub struct HoneycombGenerator {
    columns: usize,
    rows: usize,
    cell_area: f64,
    /// Maximum node displacement per axis, as a fraction of the side length
    jitter: f64,
    seed: u64,
    target_area: Option<f64>,
}

impl HoneycombGenerator {
    /// Create a generator for `columns` cells across and `rows` cells up
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cell_area: DEFAULT_CELL_AREA,
            jitter: DEFAULT_JITTER,
            seed: DEFAULT_SEED,
            target_area: None,
        }
    }

    /// Set the area of each regular hexagon
    #[must_use]
    pub const fn with_cell_area(mut self, cell_area: f64) -> Self {
        self.cell_area = cell_area;
        self
    }

    /// Set the node displacement amplitude as a fraction of the side length
    #[must_use]
    pub const fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the seed used for node displacement
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Assign this target area to every generated cell
    #[must_use]
    pub const fn with_target_area(mut self, target_area: f64) -> Self {
        self.target_area = Some(target_area);
        self
    }

    /// Side length of a regular hexagon with the configured area
    pub fn side_length(&self) -> f64 {
        (2.0 * self.cell_area / (3.0 * 3.0_f64.sqrt())).sqrt()
    }

    fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &self.columns,
                &"at least one column required",
            ));
        }
        if self.rows == 0 {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &"at least one row required",
            ));
        }
        if !self.cell_area.is_finite() || self.cell_area <= 0.0 {
            return Err(invalid_parameter(
                "cell_area",
                &self.cell_area,
                &"must be finite and positive",
            ));
        }
        // Larger displacements can fold neighbouring polygons over each other
        if !self.jitter.is_finite() || !(0.0..0.5).contains(&self.jitter) {
            return Err(invalid_parameter(
                "jitter",
                &self.jitter,
                &"must lie in [0, 0.5)",
            ));
        }
        if let Some(target) = self.target_area {
            if !target.is_finite() {
                return Err(invalid_parameter(
                    "target_area",
                    &target,
                    &"must be finite",
                ));
            }
        }
        Ok(())
    }

    /// Generate the mesh
    ///
    /// # Errors
    ///
    /// Returns an error if a generator parameter is invalid or the resulting
    /// mesh fails topology validation
    pub fn generate(&self) -> Result<VertexMesh> {
        self.validate()?;

        let side = self.side_length();
        let half_width = 0.5 * 3.0_f64.sqrt() * side;
        let half_side = 0.5 * side;

        let mut node_lookup: HashMap<(i64, i64), usize> = HashMap::new();
        let mut positions: Vec<Point> = Vec::new();
        let mut elements = Vec::with_capacity(self.columns * self.rows);

        for row in 0..self.rows {
            for column in 0..self.columns {
                let centre = (2 * column as i64 + (row % 2) as i64, 3 * row as i64);

                let mut vertices = Vec::with_capacity(6);
                for (dx, dy) in CORNER_OFFSETS {
                    let key = (centre.0 + dx, centre.1 + dy);
                    let node = *node_lookup.entry(key).or_insert_with(|| {
                        positions.push([key.0 as f64 * half_width, key.1 as f64 * half_side]);
                        positions.len() - 1
                    });
                    vertices.push(node);
                }
                elements.push(vertices);
            }
        }

        if self.jitter > 0.0 {
            let amplitude = self.jitter * side;
            let mut rng = StdRng::seed_from_u64(self.seed);
            for position in &mut positions {
                position[0] += rng.random_range(-amplitude..=amplitude);
                position[1] += rng.random_range(-amplitude..=amplitude);
            }
        }

        let nodes = Array2::from_shape_fn((positions.len(), 2), |(node, axis)| {
            positions
                .get(node)
                .and_then(|position| position.get(axis))
                .copied()
                .unwrap_or(0.0)
        });

        let mut mesh = VertexMesh::new(nodes, elements)?;
        if let Some(target) = self.target_area {
            mesh.set_item_on_all_cells(TARGET_AREA_ITEM, target);
        }

        log::info!(
            "Generated {}x{} honeycomb with {} nodes (seed {}, jitter {})",
            self.columns,
            self.rows,
            mesh.num_nodes(),
            self.seed,
            self.jitter
        );

        Ok(mesh)
    }
}
