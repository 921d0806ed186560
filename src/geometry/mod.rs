//! Planar vector and polygon geometry used by the analysis engines

/// Shoelace area, perimeter and their vertex gradients
pub mod polygon;
/// Two-component vector arithmetic
pub mod vector;
