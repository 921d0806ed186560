//! Cell population kinds and the polygon capability gate
//!
//! Only vertex-based populations carry polygon topology. The other kinds are
//! represented so a driver can hold any population, but asking them for a
//! polygon view fails fast with a capability mismatch.

use crate::io::error::{AnalysisError, Result};
use crate::topology::mesh::VertexMesh;
use crate::topology::view::PolygonTopologyView;

/// A cell population tagged by its spatial representation
#[derive(Debug, Clone)]
pub enum CellPopulation {
    /// Polygonal cells sharing vertices and edges
    VertexBased(VertexMesh),
    /// Cell centres connected by a Delaunay mesh
    MeshBased {
        /// Number of cells in the population
        num_cells: usize,
    },
    /// Off-lattice cell centres without connectivity
    NodeBased {
        /// Number of cells in the population
        num_cells: usize,
    },
    /// Cellular Potts lattice
    PottsBased {
        /// Number of cells in the population
        num_cells: usize,
    },
    /// Cellular automaton lattice
    CaBased {
        /// Number of cells in the population
        num_cells: usize,
    },
}

impl CellPopulation {
    /// Human-readable name of the population kind
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::VertexBased(_) => "vertex-based",
            Self::MeshBased { .. } => "mesh-based",
            Self::NodeBased { .. } => "node-based",
            Self::PottsBased { .. } => "Potts-based",
            Self::CaBased { .. } => "CA-based",
        }
    }

    /// Number of cells regardless of kind
    pub fn num_cells(&self) -> usize {
        match self {
            Self::VertexBased(mesh) => mesh.num_cells(),
            Self::MeshBased { num_cells }
            | Self::NodeBased { num_cells }
            | Self::PottsBased { num_cells }
            | Self::CaBased { num_cells } => *num_cells,
        }
    }

    /// Polygon topology of a vertex-based population
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::CapabilityMismatch`] naming `operation` for
    /// every population kind without polygon structure
    pub const fn as_polygon_view(&self, operation: &'static str) -> Result<&VertexMesh> {
        match self {
            Self::VertexBased(mesh) => Ok(mesh),
            _ => Err(AnalysisError::CapabilityMismatch {
                operation,
                population: self.kind_name(),
            }),
        }
    }
}

impl From<VertexMesh> for CellPopulation {
    fn from(mesh: VertexMesh) -> Self {
        Self::VertexBased(mesh)
    }
}
