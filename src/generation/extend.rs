//! Outward growth: one new triangle on a frontier edge

use rand::Rng;
use rand_distr::StandardNormal;

use super::frontier::{frontier_edges, FrontierEdge};
use crate::config::BoardConfig;
use crate::geometry::{rotate, with_length, Triangle};

/// Grow one triangle outward from the nearest frontier edge that accepts one
///
/// Each frontier edge gets `extension_retries` random angles before the next
/// edge is tried. Returns `None` when every edge is exhausted.
pub(crate) fn extend_frontier<R: Rng + ?Sized>(
    triangles: &[Triangle],
    config: &BoardConfig,
    rng: &mut R,
) -> Option<Triangle> {
    for edge in frontier_edges(triangles, &config.bounds) {
        for _ in 0..config.extension_retries {
            if let Some(candidate) = propose(triangles, &edge, config, rng) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Place a vertex `step_length` from the edge start at a random angle away
/// from the owning triangle, and keep the result only if it is well-shaped
/// and overlaps nothing.
fn propose<R: Rng + ?Sized>(
    triangles: &[Triangle],
    edge: &FrontierEdge,
    config: &BoardConfig,
    rng: &mut R,
) -> Option<Triangle> {
    let line = edge.line;
    let v = line.direction();
    let opposite = edge.owner.opposite_vertex(&line)?;

    let normal: f64 = rng.sample(StandardNormal);
    let mut theta = config.angle_mean + config.angle_spread * normal;
    if v.perp_dot(opposite - line.a) > 0.0 {
        theta = -theta;
    }

    let new_point = config
        .bounds
        .clamp_vertex(line.a + with_length(rotate(v, theta), config.step_length));
    let candidate = Triangle::new(line.a, line.b, new_point);

    if !candidate.satisfies_min_angle(config.min_angle) {
        return None;
    }
    if triangles.iter().any(|t| candidate.collides_with(t)) {
        return None;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_extension_attaches_to_seed() {
        let config = BoardConfig::default();
        let seed = config.seed_triangle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        // Individual rounds can exhaust their random angles
        let extended = (0..20).find_map(|_| extend_frontier(&[seed], &config, &mut rng));
        let t = extended.expect("seed triangle should be extendable");

        assert!(t.shares_edge_with(&seed));
        assert!(!t.collides_with(&seed));
        assert!(t.satisfies_min_angle(config.min_angle));
    }

    #[test]
    fn test_new_vertex_stays_in_bounds() {
        let config = BoardConfig::default();
        let seed = config.seed_triangle();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..50 {
            if let Some(t) = extend_frontier(&[seed], &config, &mut rng) {
                let p = t.vertices[2];
                assert!(p.x >= 5.0 && p.x <= 635.0);
                assert!(p.y >= 5.0 && p.y <= 475.0);
            }
        }
    }

    #[test]
    fn test_no_frontier_means_no_extension() {
        let config = BoardConfig::default();
        // Entirely below the extension window
        let low = Triangle::new(
            crate::geometry::Point::new(300.0, 400.0),
            crate::geometry::Point::new(340.0, 400.0),
            crate::geometry::Point::new(320.0, 440.0),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(extend_frontier(&[low], &config, &mut rng).is_none());
    }

    #[test]
    fn test_zero_retries_never_extends() {
        let config = BoardConfig {
            extension_retries: 0,
            ..BoardConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(extend_frontier(&[config.seed_triangle()], &config, &mut rng).is_none());
    }
}
