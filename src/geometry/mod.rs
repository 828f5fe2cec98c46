//! 2D geometric primitives
//!
//! Points are `glam::DVec2` values. Every vertex in a board is produced by a
//! small closed set of deterministic formulas and is never perturbed
//! afterwards, so shared vertices are detected with exact `f64` equality.

mod line;
mod triangle;

pub use line::Line;
pub use triangle::Triangle;

/// A 2D coordinate or vector
pub type Point = glam::DVec2;

/// Cross-product magnitude below which two directions count as parallel
pub const PARALLEL_EPSILON: f64 = 1e-3;

/// Rotate `v` counter-clockwise by `theta` radians
#[inline]
pub fn rotate(v: Point, theta: f64) -> Point {
    Point::from_angle(theta).rotate(v)
}

/// Rescale `v` to the given length
///
/// # Panics
///
/// Panics if `v` has zero length; callers must never rescale a collapsed edge.
#[inline]
pub fn with_length(v: Point, length: f64) -> Point {
    let norm = v.length();
    assert!(norm > 0.0, "cannot rescale a zero-length vector");
    v / norm * length
}

/// Cosine of the angle between two vectors, `None` if either is zero-length
pub fn cos_between(v1: Point, v2: Point) -> Option<f64> {
    let denom = v1.length() * v2.length();
    if denom > 0.0 && denom.is_finite() {
        Some(v1.dot(v2) / denom)
    } else {
        None
    }
}
