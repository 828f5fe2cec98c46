//! Triangles and the overlap/degeneracy tests built on them

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{cos_between, Line, Point};

/// Vertex orderings compared by [`Triangle`] equality
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// An ordered triple of vertices
///
/// Edges are always taken consecutively: `(v0, v1)`, `(v1, v2)`, `(v2, v0)`.
/// Equality ignores vertex order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// The three corners, in construction order
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Create a triangle from three corners
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Edge `i`, running from vertex `i` to vertex `i + 1`
    #[inline]
    pub fn edge(&self, i: usize) -> Line {
        Line::new(self.vertices[i % 3], self.vertices[(i + 1) % 3])
    }

    /// All three edges in consecutive order
    #[inline]
    pub fn edges(&self) -> [Line; 3] {
        [self.edge(0), self.edge(1), self.edge(2)]
    }

    /// Check whether `p` is exactly one of the corners
    #[inline]
    pub fn has_vertex(&self, p: Point) -> bool {
        self.vertices.contains(&p)
    }

    /// Check whether both endpoints of `line` are corners of this triangle
    #[inline]
    pub fn contains_line(&self, line: &Line) -> bool {
        self.has_vertex(line.a) && self.has_vertex(line.b)
    }

    /// Check whether the triangles share a full edge (not merely a vertex)
    pub fn shares_edge_with(&self, other: &Triangle) -> bool {
        other.edges().iter().any(|edge| self.contains_line(edge))
    }

    /// The corner not on `line`, if `line` is one of this triangle's edges
    pub fn opposite_vertex(&self, line: &Line) -> Option<Point> {
        if !self.contains_line(line) {
            return None;
        }
        self.vertices
            .iter()
            .copied()
            .find(|&v| !line.has_endpoint(v))
    }

    /// Twice the signed area (positive for counter-clockwise winding)
    #[inline]
    pub fn doubled_signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).perp_dot(c - a)
    }

    /// Arithmetic mean of the corners
    #[inline]
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    /// Check whether `p` lies strictly inside the triangle
    ///
    /// Points on an edge or corner are not covered.
    ///
    /// # Example
    ///
    /// ```
    /// use four_color_mesh::geometry::{Point, Triangle};
    ///
    /// let t = Triangle::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0));
    /// assert!(t.covers(Point::new(3.0, 3.0)));
    /// assert!(!t.covers(Point::new(5.0, 0.0)));
    /// ```
    pub fn covers(&self, p: Point) -> bool {
        let [t0, t1, t2] = self.vertices;
        let z0 = (t0 - t1).perp_dot(p - t0);
        let z1 = (t1 - t2).perp_dot(p - t1);
        let z2 = (t2 - t0).perp_dot(p - t2);

        (z0 > 0.0 && z1 > 0.0 && z2 > 0.0) || (z0 < 0.0 && z1 < 0.0 && z2 < 0.0)
    }

    /// Check whether the interiors of two triangles overlap
    ///
    /// Separating-axis test over the six edge normals. Each edge projects
    /// vertices relative to its own start point, so vertices shared between
    /// the triangles land on exactly the same coordinate and triangles that
    /// only touch along an edge or at a corner are not reported.
    ///
    /// A degenerate triangle never collides; reject those with
    /// [`Triangle::satisfies_min_angle`] first.
    pub fn collides_with(&self, other: &Triangle) -> bool {
        !self
            .edges()
            .iter()
            .chain(other.edges().iter())
            .any(|axis| separates(axis, self, other))
    }

    /// Cosines of the interior angles at each corner
    ///
    /// Returns `None` when two corners coincide.
    pub fn angle_cosines(&self) -> Option<[f64; 3]> {
        let mut cosines = [0.0; 3];
        for (i, cos) in cosines.iter_mut().enumerate() {
            let origin = self.vertices[i];
            let v1 = self.vertices[(i + 1) % 3] - origin;
            let v2 = self.vertices[(i + 2) % 3] - origin;
            *cos = cos_between(v1, v2)?;
        }
        Some(cosines)
    }

    /// Check that every interior angle is at least `min_angle` radians
    ///
    /// Triangles with coincident corners always fail.
    pub fn satisfies_min_angle(&self, min_angle: f64) -> bool {
        let limit = min_angle.cos();
        self.angle_cosines()
            .is_some_and(|cosines| cosines.iter().all(|&cos| cos <= limit))
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        PERMUTATIONS.iter().any(|perm| {
            perm.iter()
                .enumerate()
                .all(|(i, &j)| self.vertices[i] == other.vertices[j])
        })
    }
}

/// Projection interval of `t` onto the normal of `axis`
fn project(axis: &Line, t: &Triangle) -> (f64, f64) {
    let direction = axis.direction();
    t.vertices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        let s = direction.perp_dot(v - axis.a);
        (lo.min(s), hi.max(s))
    })
}

fn separates(axis: &Line, s: &Triangle, t: &Triangle) -> bool {
    let (s_lo, s_hi) = project(axis, s);
    let (t_lo, t_hi) = project(axis, t);
    !(s_lo < t_hi && t_lo < s_hi)
}
