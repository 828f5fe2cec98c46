//! Mesh growth engine
//!
//! Grows a non-overlapping triangle mesh outward from a single seed triangle.
//! Each round extends the frontier edge nearest the region center, then
//! closes any concave pockets the new triangle left behind. A round that
//! cannot make progress throws away everything but the seed and starts over
//! on the same random stream, until the mesh is large enough to accept or
//! the restart budget runs out.

mod extend;
mod frontier;
mod infill;

use rand::Rng;
use tracing::debug;

use crate::config::BoardConfig;
use crate::geometry::Triangle;

use extend::extend_frontier;
use infill::find_infill;

/// Why a growth round made no progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stall {
    /// No frontier edge accepted a new triangle
    NoExtension,
    /// A pocket could only be closed with a sliver
    Infill,
}

/// Grow a mesh from `seed`, drawing every random value from `rng`
///
/// The first triangle of the result is always `seed`. The result never holds
/// more than `config.max_triangles` triangles, no two of them overlap, and
/// every triangle satisfies `config.min_angle`.
///
/// # Example
///
/// ```
/// use four_color_mesh::BoardConfig;
/// use four_color_mesh::generation::grow_mesh;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let config = BoardConfig::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let triangles = grow_mesh(config.seed_triangle(), &config, &mut rng);
///
/// assert_eq!(triangles[0], config.seed_triangle());
/// assert!(triangles.len() <= config.max_triangles);
/// ```
pub fn grow_mesh<R: Rng + ?Sized>(seed: Triangle, config: &BoardConfig, rng: &mut R) -> Vec<Triangle> {
    grow(seed, config, rng).triangles
}

/// Final mesh of a growth run and how many times it went back to the seed
#[derive(Debug, Clone)]
struct Growth {
    triangles: Vec<Triangle>,
    restarts: usize,
}

fn grow<R: Rng + ?Sized>(seed: Triangle, config: &BoardConfig, rng: &mut R) -> Growth {
    let mut triangles = vec![seed];
    let mut restarts = 0;

    while triangles.len() < config.max_triangles {
        let stall = match extend_frontier(&triangles, config, rng) {
            None => Stall::NoExtension,
            Some(extension) => {
                triangles.push(extension);
                match find_infill(&triangles, config.min_angle) {
                    Some(mut infill) => {
                        infill.truncate(config.max_triangles - triangles.len());
                        triangles.extend(infill);
                        continue;
                    }
                    None => Stall::Infill,
                }
            }
        };

        if triangles.len() >= config.min_triangles {
            debug!(?stall, triangles = triangles.len(), "growth stalled, accepting mesh");
            break;
        }
        if restarts >= config.max_restarts {
            debug!(?stall, restarts, triangles = triangles.len(), "restart budget exhausted");
            break;
        }

        restarts += 1;
        debug!(?stall, restarts, discarded = triangles.len() - 1, "restarting from seed");
        triangles.truncate(1);
    }

    Growth { triangles, restarts }
}
