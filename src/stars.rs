//! Background star field
//!
//! Stars are drawn from the board's random stream before the mesh grows, so
//! a board seed reproduces both the backdrop and the triangles.

use rand::Rng;
use rand_distr::StandardNormal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::Bounds;
use crate::geometry::Point;

/// A decorative point of light behind the board
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Position within the region
    pub center: Point,
    /// Drawn radius (`1 + 0.5 * N(0, 1)`, may be small or negative)
    pub radius: f64,
}

/// Scatter `count` stars uniformly over the region
pub fn generate_stars<R: Rng + ?Sized>(count: usize, bounds: &Bounds, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let x = bounds.width * rng.gen::<f64>();
            let y = bounds.height * rng.gen::<f64>();
            let jitter: f64 = rng.sample(StandardNormal);
            Star {
                center: Point::new(x, y),
                radius: 1.0 + 0.5 * jitter,
            }
        })
        .collect()
}
