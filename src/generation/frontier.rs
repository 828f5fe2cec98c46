//! Frontier edge discovery

use crate::config::Bounds;
use crate::geometry::{Line, Triangle};

/// A boundary edge together with the one triangle that owns it
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEdge {
    pub line: Line,
    pub owner: Triangle,
}

/// Collect extendable boundary edges, nearest to the region center first
///
/// An edge qualifies when exactly one triangle contains it and both of its
/// endpoints lie inside the extension window of `bounds`. Ties keep scan
/// order.
pub(crate) fn frontier_edges(triangles: &[Triangle], bounds: &Bounds) -> Vec<FrontierEdge> {
    let center = bounds.center();
    let mut edges: Vec<(f64, FrontierEdge)> = Vec::new();

    for t in triangles {
        for line in t.edges() {
            let mut owners = triangles.iter().filter(|tr| tr.contains_line(&line));
            let Some(&owner) = owners.next() else {
                continue;
            };
            // Interior edge
            if owners.next().is_some() {
                continue;
            }
            if !bounds.allows_extension_from(line.a) || !bounds.allows_extension_from(line.b) {
                continue;
            }
            if edges.iter().any(|(_, e)| e.line == line) {
                continue;
            }
            edges.push((line.distance_squared_to(center), FrontierEdge { line, owner }));
        }
    }

    edges.sort_by(|(d1, _), (d2, _)| d1.total_cmp(d2));
    edges.into_iter().map(|(_, e)| e).collect()
}
