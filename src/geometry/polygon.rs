//! Polygon measures and their gradients with respect to vertex positions
//!
//! Polygons are cyclic vertex sequences. Gradients assume anticlockwise
//! ordering, which `VertexMesh` guarantees for every element.

use crate::geometry::vector::{Point, add, distance, unit_between};

/// Previous, current and next vertex around a cyclic polygon
///
/// Returns `None` when `index` is out of range or the polygon is empty.
pub fn vertex_triple(polygon: &[Point], index: usize) -> Option<(Point, Point, Point)> {
    let n = polygon.len();
    if index >= n {
        return None;
    }
    let previous = polygon.get((index + n - 1) % n)?;
    let current = polygon.get(index)?;
    let next = polygon.get((index + 1) % n)?;
    Some((*previous, *current, *next))
}

/// Iterate over the edges `(v_k, v_{k+1})` of a cyclic polygon
pub fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

/// Signed shoelace area, positive for anticlockwise polygons
pub fn signed_area(polygon: &[Point]) -> f64 {
    0.5 * edges(polygon)
        .map(|(a, b)| a[0].mul_add(b[1], -(b[0] * a[1])))
        .sum::<f64>()
}

/// Unsigned polygon area
pub fn area(polygon: &[Point]) -> f64 {
    signed_area(polygon).abs()
}

/// Sum of edge lengths
pub fn perimeter(polygon: &[Point]) -> f64 {
    edges(polygon).map(|(a, b)| distance(a, b)).sum()
}

/// Gradient of the area with respect to the position of vertex `index`
///
/// Each vertex moves perpendicular to the chord joining its two neighbours,
/// scaled by one half: `(y_next - y_prev, x_prev - x_next) / 2`.
pub fn area_gradient(polygon: &[Point], index: usize) -> Option<Point> {
    let (previous, _, next) = vertex_triple(polygon, index)?;
    Some([
        0.5 * (next[1] - previous[1]),
        0.5 * (previous[0] - next[0]),
    ])
}

/// Gradient of the perimeter with respect to the position of vertex `index`
///
/// Sum of the unit vectors along the two edges meeting at the vertex,
/// each pointing away from the neighbouring vertex.
pub fn perimeter_gradient(polygon: &[Point], index: usize) -> Option<Point> {
    let (previous, current, next) = vertex_triple(polygon, index)?;
    Some(add(
        unit_between(previous, current),
        unit_between(next, current),
    ))
}
