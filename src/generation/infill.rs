//! Infill: closing concave pockets between existing edges

use crate::geometry::{Line, Point, Triangle};

/// Find the triangles that close pockets between pairs of existing edges
///
/// Two edges sharing exactly one endpoint at an angle of at most 90° form
/// a pocket when their free ends are not yet joined and the closing triangle
/// overlaps nothing, counting triangles proposed earlier in the same pass.
///
/// Returns `None` when a pocket would close with an angle below `min_angle`;
/// the caller treats that as a failed round.
pub(crate) fn find_infill(triangles: &[Triangle], min_angle: f64) -> Option<Vec<Triangle>> {
    let mut found: Vec<Triangle> = Vec::new();

    for t1 in triangles {
        for l1 in t1.edges() {
            for t2 in triangles {
                for l2 in t2.edges() {
                    if l1 == l2 {
                        continue;
                    }
                    let Some((apex, p, q)) = corner(&l1, &l2) else {
                        continue;
                    };
                    // Obtuse corners are not pockets
                    if (p - apex).dot(q - apex) < 0.0 {
                        continue;
                    }

                    let closing = Line::new(p, q);
                    let candidate = Triangle::new(apex, p, q);
                    let blocked = triangles
                        .iter()
                        .chain(found.iter())
                        .any(|t| t.contains_line(&closing) || t.collides_with(&candidate));
                    if blocked {
                        continue;
                    }

                    if !candidate.satisfies_min_angle(min_angle) {
                        return None;
                    }
                    found.push(candidate);
                }
            }
        }
    }

    Some(found)
}

/// Shared endpoint and the two free endpoints of a pair of edges
fn corner(l1: &Line, l2: &Line) -> Option<(Point, Point, Point)> {
    if l1.a == l2.a {
        Some((l1.a, l1.b, l2.b))
    } else if l1.a == l2.b {
        Some((l1.a, l1.b, l2.a))
    } else if l1.b == l2.a {
        Some((l1.b, l1.a, l2.b))
    } else if l1.b == l2.b {
        Some((l1.b, l1.a, l2.a))
    } else {
        None
    }
}
