//! Neighbour statistics and mechanical force decomposition for vertex-model tissues
//!
//! A vertex model tiles a tissue into polygonal cells that share edges and
//! vertices. This crate analyses one static snapshot of such a tiling: it
//! builds the graph of adjacent interior cells, computes the mean, variance
//! and normalised neighbour correlation of per-cell quantities, and splits
//! each cell's mechanical force into area, perimeter and line tension terms.

#![forbid(unsafe_code)]

/// Neighbour graphs, statistics and force decomposition
pub mod analysis;
/// Planar vector and polygon geometry
pub mod geometry;
/// Configuration, errors, output series and the command-line driver
pub mod io;
/// Tessellation snapshots and polygon topology views
pub mod topology;

pub use io::error::{AnalysisError, Result};
