//! Tessellation snapshots and the read-only views the analysis engines consume

/// Named scalar data attached to each cell
pub mod cell_data;
/// Regular hexagonal mesh generation
pub mod honeycomb;
/// Concrete two-dimensional vertex mesh
pub mod mesh;
/// Population kinds and polygon capability checks
pub mod population;
/// Read-only polygon topology interface
pub mod view;
