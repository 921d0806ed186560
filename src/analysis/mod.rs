//! Neighbour graphs, population statistics and force decomposition

/// Vertex-model energy terms and per-cell force magnitudes
pub mod forces;
/// Interior neighbour pair enumeration
pub mod neighbours;
/// Interior moments and neighbour correlation
pub mod statistics;
/// Per-cell polygon and neighbourhood summaries
pub mod summary;
