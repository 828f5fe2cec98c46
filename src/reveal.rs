//! Reveal order for the opening line-drawing animation
//!
//! Edges are layered breadth-first outward from the seed triangle. Layer 0
//! is the seed's three edges; each later layer holds the not-yet-placed
//! edges incident to the far endpoints of the previous layer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Line, Triangle};

/// Mesh edges grouped into breadth-first reveal layers
///
/// Every edge appears in exactly one layer. Each edge is oriented from the
/// vertex it was reached through (`a`) to the vertex it reveals next (`b`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealLayers {
    layers: Vec<Vec<Line>>,
}

impl RevealLayers {
    /// Layer the edges of `triangles` outward from `seed`
    ///
    /// Within a layer, edges keep the order they were discovered in:
    /// triangle order, then vertex order, then the order of the previous
    /// layer's edges.
    ///
    /// # Example
    ///
    /// ```
    /// use four_color_mesh::geometry::{Point, Triangle};
    /// use four_color_mesh::RevealLayers;
    ///
    /// let seed = Triangle::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0));
    /// let layers = RevealLayers::build(&seed, &[seed]);
    ///
    /// assert_eq!(layers.layer_count(), 1);
    /// assert_eq!(layers.edge_count(), 3);
    /// ```
    pub fn build(seed: &Triangle, triangles: &[Triangle]) -> Self {
        let mut layers = vec![seed.edges().to_vec()];

        loop {
            let previous = &layers[layers.len() - 1];
            let mut next: Vec<Line> = Vec::new();

            for t in triangles {
                for i in 0..3 {
                    let v = t.vertices[i];
                    for line in previous {
                        if line.b != v {
                            continue;
                        }
                        for edge in [
                            Line::new(v, t.vertices[(i + 1) % 3]),
                            Line::new(v, t.vertices[(i + 2) % 3]),
                        ] {
                            let placed = layers.iter().flatten().chain(next.iter()).any(|l| *l == edge);
                            if !placed {
                                next.push(edge);
                            }
                        }
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            layers.push(next);
        }

        Self { layers }
    }

    /// All layers, innermost first
    #[inline]
    pub fn layers(&self) -> &[Vec<Line>] {
        &self.layers
    }

    /// Number of layers
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of edges across all layers
    pub fn edge_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Iterate over every edge, layer by layer
    pub fn edges(&self) -> impl Iterator<Item = &Line> {
        self.layers.iter().flatten()
    }

    /// Ticks until the animation has drawn every layer
    pub fn duration(&self, ticks_per_layer: u64) -> u64 {
        self.layers.len() as u64 * ticks_per_layer
    }

    /// Segments visible `tick` ticks into the animation
    ///
    /// Completed layers are drawn whole. The layer in progress is drawn from
    /// each edge's `a` end, with length proportional to the time spent on it.
    /// A `ticks_per_layer` of zero shows everything at once.
    pub fn segments_at(&self, tick: u64, ticks_per_layer: u64) -> Vec<Line> {
        if ticks_per_layer == 0 {
            return self.edges().copied().collect();
        }

        let index = ((tick / ticks_per_layer) as usize).min(self.layers.len());
        let mut segments: Vec<Line> = self.layers[..index].iter().flatten().copied().collect();

        if let Some(current) = self.layers.get(index) {
            let progress = (tick % ticks_per_layer) as f64 / ticks_per_layer as f64;
            segments.extend(current.iter().map(|l| Line::new(l.a, l.point_at(progress))));
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn strip() -> Vec<Triangle> {
        // Seed followed by two triangles extending to the right
        vec![
            Triangle::new(p(0.0, 0.0), p(100.0, 0.0), p(50.0, 86.0)),
            Triangle::new(p(100.0, 0.0), p(150.0, 86.0), p(50.0, 86.0)),
            Triangle::new(p(100.0, 0.0), p(200.0, 0.0), p(150.0, 86.0)),
        ]
    }

    fn mesh_edges(triangles: &[Triangle]) -> Vec<Line> {
        let mut edges: Vec<Line> = Vec::new();
        for t in triangles {
            for e in t.edges() {
                if !edges.contains(&e) {
                    edges.push(e);
                }
            }
        }
        edges
    }

    #[test]
    fn test_layer_zero_is_seed() {
        let triangles = strip();
        let layers = RevealLayers::build(&triangles[0], &triangles);
        assert_eq!(layers.layers()[0], triangles[0].edges().to_vec());
    }

    #[test]
    fn test_every_edge_exactly_once() {
        let triangles = strip();
        let layers = RevealLayers::build(&triangles[0], &triangles);
        let all: Vec<&Line> = layers.edges().collect();
        let expected = mesh_edges(&triangles);

        assert_eq!(all.len(), expected.len());
        for e in &expected {
            assert_eq!(all.iter().filter(|l| **l == e).count(), 1, "{:?}", e);
        }
    }

    #[test]
    fn test_strip_layers() {
        let triangles = strip();
        let layers = RevealLayers::build(&triangles[0], &triangles);

        // Everything hanging off a seed vertex shows up in layer 1; the
        // far edge of the last triangle needs one more hop
        assert_eq!(layers.layer_count(), 3);
        assert_eq!(
            layers.layers()[1],
            vec![
                Line::new(p(100.0, 0.0), p(150.0, 86.0)),
                Line::new(p(50.0, 86.0), p(150.0, 86.0)),
                Line::new(p(100.0, 0.0), p(200.0, 0.0)),
            ]
        );
        assert_eq!(layers.layers()[2], vec![Line::new(p(200.0, 0.0), p(150.0, 86.0))]);
    }

    #[test]
    fn test_new_edges_point_outward() {
        let triangles = strip();
        let layers = RevealLayers::build(&triangles[0], &triangles);
        for k in 1..layers.layer_count() {
            for line in &layers.layers()[k] {
                assert!(layers.layers()[k - 1].iter().any(|l| l.b == line.a));
            }
        }
    }

    #[test]
    fn test_segments_at() {
        let triangles = strip();
        let layers = RevealLayers::build(&triangles[0], &triangles);

        assert!(layers.segments_at(0, 60).iter().all(|l| l.a == l.b));

        let halfway = layers.segments_at(90, 60);
        assert_eq!(halfway.len(), 6);
        assert_eq!(&halfway[..3], triangles[0].edges().as_slice());
        assert_eq!(halfway[3].b, p(125.0, 43.0));

        let done = layers.segments_at(layers.duration(60), 60);
        assert_eq!(done.len(), layers.edge_count());
        assert_eq!(layers.segments_at(5, 0).len(), layers.edge_count());
    }
}
