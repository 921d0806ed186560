//! Minimal arithmetic on planar points stored as `[f64; 2]`

/// Point or displacement in the plane
pub type Point = [f64; 2];

/// Component-wise sum
pub const fn add(a: Point, b: Point) -> Point {
    [a[0] + b[0], a[1] + b[1]]
}

/// Component-wise difference `a - b`
pub const fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1]]
}

/// Scalar multiple
pub const fn scale(a: Point, factor: f64) -> Point {
    [a[0] * factor, a[1] * factor]
}

/// Euclidean length
pub fn norm(a: Point) -> f64 {
    a[0].hypot(a[1])
}

/// Distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    norm(sub(a, b))
}

/// Unit vector pointing from `from` towards `to`
///
/// Coincident points have no direction and yield the zero vector.
pub fn unit_between(from: Point, to: Point) -> Point {
    let delta = sub(to, from);
    let length = norm(delta);
    if length > 0.0 {
        scale(delta, 1.0 / length)
    } else {
        [0.0, 0.0]
    }
}
