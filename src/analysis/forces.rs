//! Per-cell decomposition of the vertex-model mechanical force
//!
//! The energy of a cell is
//!
//! ```text
//! E = k_A (A - A0)^2 + k_P P^2 + sum_edges L_e * l_e
//! ```
//!
//! and the force on each of its vertices is the negative gradient of `E`
//! with respect to that vertex's position. The three terms are kept separate
//! so their magnitudes can be reported individually.

use crate::geometry::polygon::{area, area_gradient, perimeter, perimeter_gradient};
use crate::geometry::vector::{Point, add, distance, norm, scale, unit_between};
use crate::io::configuration::{
    DEFAULT_AREA_ELASTICITY, DEFAULT_BOUNDARY_LINE_TENSION, DEFAULT_LINE_TENSION,
    DEFAULT_PERIMETER_CONTRACTILITY, TARGET_AREA_ITEM,
};
use crate::io::error::{Result, invalid_parameter};
use crate::topology::mesh::VertexMesh;
use crate::topology::population::CellPopulation;
use crate::topology::view::PolygonTopologyView;
use rayon::prelude::*;

/// Moduli and tension coefficients of the energy functional
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicalParameters {
    /// Area elasticity modulus `k_A`
    pub area_elasticity: f64,
    /// Perimeter contractility modulus `k_P`
    pub perimeter_contractility: f64,
    /// Line tension of edges shared by two cells
    pub line_tension: f64,
    /// Line tension of edges with a single owning cell, as configured
    pub boundary_line_tension: f64,
}

impl Default for MechanicalParameters {
    fn default() -> Self {
        Self {
            area_elasticity: DEFAULT_AREA_ELASTICITY,
            perimeter_contractility: DEFAULT_PERIMETER_CONTRACTILITY,
            line_tension: DEFAULT_LINE_TENSION,
            boundary_line_tension: DEFAULT_BOUNDARY_LINE_TENSION,
        }
    }
}

impl MechanicalParameters {
    /// Create a parameter set
    pub const fn new(
        area_elasticity: f64,
        perimeter_contractility: f64,
        line_tension: f64,
        boundary_line_tension: f64,
    ) -> Self {
        Self {
            area_elasticity,
            perimeter_contractility,
            line_tension,
            boundary_line_tension,
        }
    }

    /// Boundary line tension actually applied to tissue-edge edges
    ///
    /// A negative bulk tension pulls edges inwards; applying it along the
    /// free tissue edge curls the boundary, so the boundary coefficient is
    /// zero whenever the bulk coefficient is negative.
    pub const fn effective_boundary_line_tension(&self) -> f64 {
        if self.line_tension < 0.0 {
            0.0
        } else {
            self.boundary_line_tension
        }
    }

    /// Check every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is not finite or a modulus is negative
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("area_elasticity", self.area_elasticity, true),
            ("perimeter_contractility", self.perimeter_contractility, true),
            ("line_tension", self.line_tension, false),
            ("boundary_line_tension", self.boundary_line_tension, false),
        ];
        for (parameter, value, non_negative) in checks {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
            if non_negative && value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"modulus must not be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Force vectors acting on one vertex of a cell, split by energy term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexForce {
    /// Mesh index of the vertex
    pub vertex: usize,
    /// Area elasticity term
    pub area: Point,
    /// Perimeter contractility term
    pub perimeter: Point,
    /// Line tension term
    pub line_tension: Point,
}

impl VertexForce {
    /// Sum of the three terms
    pub const fn total(&self) -> Point {
        add(add(self.area, self.perimeter), self.line_tension)
    }
}

/// Force magnitudes attributable to each energy term for one cell
///
/// Each value sums the magnitude of that term's force over the cell's
/// vertices; `total` sums the magnitude of the combined vertex force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceContribution {
    /// Cell index
    pub cell: usize,
    /// Area elasticity contribution
    pub area: f64,
    /// Perimeter contractility contribution
    pub perimeter: f64,
    /// Line tension contribution, boundary edges included
    pub line_tension: f64,
    /// Magnitude of the combined force
    pub total: f64,
}

/// Energy terms of one cell at the current geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellEnergy {
    /// Cell index
    pub cell: usize,
    /// `k_A (A - A0)^2`
    pub area: f64,
    /// `k_P P^2`
    pub perimeter: f64,
    /// Sum of tension times length over the cell's edges
    pub line_tension: f64,
}

impl CellEnergy {
    /// Sum of the three terms
    pub const fn total(&self) -> f64 {
        self.area + self.perimeter + self.line_tension
    }
}

/// Decomposes cell forces over a polygon topology
///
/// The boundary line tension is resolved once at construction, so a negative
/// bulk tension can never reach a boundary edge.
#[derive(Debug)]
pub struct ForceDecomposer<'a, V: PolygonTopologyView> {
    view: &'a V,
    parameters: MechanicalParameters,
    boundary_line_tension: f64,
}

impl<'a, V: PolygonTopologyView> ForceDecomposer<'a, V> {
    /// Create a decomposer over a polygon topology
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation
    pub fn new(view: &'a V, parameters: MechanicalParameters) -> Result<Self> {
        parameters.validate()?;
        let boundary_line_tension = parameters.effective_boundary_line_tension();
        if parameters.line_tension < 0.0 {
            log::debug!(
                "Negative line tension {}: boundary line tension {} clamped to 0",
                parameters.line_tension,
                parameters.boundary_line_tension
            );
        }
        Ok(Self {
            view,
            parameters,
            boundary_line_tension,
        })
    }

    /// Parameters as configured
    pub const fn parameters(&self) -> &MechanicalParameters {
        &self.parameters
    }

    /// Boundary line tension in effect
    pub const fn boundary_line_tension(&self) -> f64 {
        self.boundary_line_tension
    }

    /// Tension coefficient of the edge between two vertices
    pub fn edge_line_tension(&self, a: usize, b: usize) -> f64 {
        if self.view.is_boundary_edge(a, b) {
            self.boundary_line_tension
        } else {
            self.parameters.line_tension
        }
    }

    fn target_area(&self, cell: usize) -> Result<f64> {
        self.view.cell_data_item(cell, TARGET_AREA_ITEM)
    }

    /// Force vectors on every vertex of a cell, in polygon order
    ///
    /// # Errors
    ///
    /// Returns an error if the cell has no target area
    pub fn vertex_forces(&self, cell: usize) -> Result<Vec<VertexForce>> {
        let target_area = self.target_area(cell)?;
        let vertices = self.view.cell_vertices(cell);
        let outline = self.view.cell_polygon(cell);
        let n = vertices.len();

        let area_factor = -2.0 * self.parameters.area_elasticity * (area(&outline) - target_area);
        let perimeter_factor =
            -2.0 * self.parameters.perimeter_contractility * perimeter(&outline);

        // Tension of edge k joins vertex k to vertex k+1
        let edge_tensions: Vec<f64> = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| self.edge_line_tension(a, b))
            .collect();

        let mut forces = Vec::with_capacity(n);
        for (index, &vertex) in vertices.iter().enumerate() {
            let previous_index = (index + n - 1) % n;
            let (Some(&position), Some(&previous), Some(&next)) = (
                outline.get(index),
                outline.get(previous_index),
                outline.get((index + 1) % n),
            ) else {
                continue;
            };
            let previous_tension = edge_tensions.get(previous_index).copied().unwrap_or(0.0);
            let next_tension = edge_tensions.get(index).copied().unwrap_or(0.0);

            let area_term = area_gradient(&outline, index).map_or([0.0, 0.0], |gradient| {
                scale(gradient, area_factor)
            });
            let perimeter_term = perimeter_gradient(&outline, index)
                .map_or([0.0, 0.0], |gradient| scale(gradient, perimeter_factor));
            let line_tension_term = scale(
                add(
                    scale(unit_between(previous, position), previous_tension),
                    scale(unit_between(next, position), next_tension),
                ),
                -1.0,
            );

            forces.push(VertexForce {
                vertex,
                area: area_term,
                perimeter: perimeter_term,
                line_tension: line_tension_term,
            });
        }

        Ok(forces)
    }

    /// Force magnitudes of each energy term for one cell
    ///
    /// # Errors
    ///
    /// Returns an error if the cell has no target area
    pub fn decompose_cell(&self, cell: usize) -> Result<ForceContribution> {
        let forces = self.vertex_forces(cell)?;
        let mut contribution = ForceContribution {
            cell,
            area: 0.0,
            perimeter: 0.0,
            line_tension: 0.0,
            total: 0.0,
        };
        for force in &forces {
            contribution.area += norm(force.area);
            contribution.perimeter += norm(force.perimeter);
            contribution.line_tension += norm(force.line_tension);
            contribution.total += norm(force.total());
        }
        Ok(contribution)
    }

    /// Decompose every cell, in ascending cell order
    ///
    /// # Errors
    ///
    /// Returns an error if any cell has no target area
    pub fn decompose_all(&self) -> Result<Vec<ForceContribution>> {
        (0..self.view.num_cells())
            .into_par_iter()
            .map(|cell| self.decompose_cell(cell))
            .collect()
    }

    /// Energy terms of one cell
    ///
    /// # Errors
    ///
    /// Returns an error if the cell has no target area
    pub fn cell_energy(&self, cell: usize) -> Result<CellEnergy> {
        let target_area = self.target_area(cell)?;
        let vertices = self.view.cell_vertices(cell);
        let outline = self.view.cell_polygon(cell);

        let line_tension = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| {
                self.edge_line_tension(a, b)
                    * distance(self.view.vertex_position(a), self.view.vertex_position(b))
            })
            .sum();

        Ok(CellEnergy {
            cell,
            area: self.parameters.area_elasticity * (area(&outline) - target_area).powi(2),
            perimeter: self.parameters.perimeter_contractility * perimeter(&outline).powi(2),
            line_tension,
        })
    }
}

impl<'a> ForceDecomposer<'a, VertexMesh> {
    /// Create a decomposer over a population, which must be vertex-based
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::CapabilityMismatch`] for populations
    /// without polygon topology, or a parameter validation error
    pub fn for_population(
        population: &'a CellPopulation,
        parameters: MechanicalParameters,
    ) -> Result<Self> {
        let mesh = population.as_polygon_view("force decomposition")?;
        Self::new(mesh, parameters)
    }
}
