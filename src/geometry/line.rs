//! Line segments

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Point, PARALLEL_EPSILON};

/// A segment between two points
///
/// Equality ignores direction: `{a, b}` equals `{b, a}`. The stored order
/// still matters to the reveal animation, which draws from `a` towards `b`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Line {
    /// Near endpoint
    pub a: Point,
    /// Far endpoint
    pub b: Point,
}

impl Line {
    /// Create a segment from `a` to `b`
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Vector from `a` to `b`
    #[inline]
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    /// Squared segment length
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.direction().length_squared()
    }

    /// Check whether `p` is exactly one of the endpoints
    #[inline]
    pub fn has_endpoint(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }

    /// Point at parameter `t` along the segment (0 = `a`, 1 = `b`)
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.a + self.direction() * t
    }

    /// Check whether two segments cross
    ///
    /// Both intersection parameters must lie in `[0, 1]`, so touching at an
    /// endpoint counts. Parallel and near-parallel segments never cross.
    ///
    /// # Example
    ///
    /// ```
    /// use four_color_mesh::geometry::{Line, Point};
    ///
    /// let l = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    /// let m = Line::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
    /// assert!(l.crosses(&m));
    /// ```
    pub fn crosses(&self, other: &Line) -> bool {
        let d1 = self.direction();
        let d2 = other.direction();
        let z = d1.perp_dot(d2);
        if z.abs() < PARALLEL_EPSILON {
            return false;
        }

        let v = other.a - self.a;
        let t1 = v.perp_dot(d2) / z;
        let t2 = v.perp_dot(d1) / z;

        (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2)
    }

    /// Squared distance from `p` to the infinite line through this segment
    ///
    /// Falls back to the distance to `a` for a collapsed segment.
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return (p - self.a).length_squared();
        }
        let z = self.direction().perp_dot(self.a - p);
        z * z / len_sq
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Line {
        Line::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn test_equality_ignores_direction() {
        assert_eq!(line(0.0, 0.0, 1.0, 2.0), line(1.0, 2.0, 0.0, 0.0));
        assert_ne!(line(0.0, 0.0, 1.0, 2.0), line(0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_diagonals_cross() {
        assert!(line(0.0, 0.0, 10.0, 10.0).crosses(&line(0.0, 10.0, 10.0, 0.0)));
    }

    #[test]
    fn test_parallel_segments_do_not_cross() {
        assert!(!line(0.0, 0.0, 10.0, 0.0).crosses(&line(0.0, 1.0, 10.0, 1.0)));
        // Collinear overlap is still reported as non-crossing
        assert!(!line(0.0, 0.0, 10.0, 0.0).crosses(&line(5.0, 0.0, 15.0, 0.0)));
    }

    #[test]
    fn test_disjoint_segments_do_not_cross() {
        assert!(!line(0.0, 0.0, 1.0, 1.0).crosses(&line(5.0, 0.0, 0.0, 5.0)));
    }

    #[test]
    fn test_touching_endpoint_crosses() {
        assert!(line(0.0, 0.0, 10.0, 0.0).crosses(&line(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_distance_squared_to() {
        let l = line(0.0, 0.0, 10.0, 0.0);
        assert_eq!(l.distance_squared_to(Point::new(3.0, 4.0)), 16.0);
        // Distance is to the supporting line, not the segment
        assert_eq!(l.distance_squared_to(Point::new(30.0, 2.0)), 4.0);
        assert_eq!(line(1.0, 1.0, 1.0, 1.0).distance_squared_to(Point::new(4.0, 5.0)), 25.0);
    }

    #[test]
    fn test_point_at() {
        let l = line(0.0, 0.0, 10.0, 20.0);
        assert_eq!(l.point_at(0.0), l.a);
        assert_eq!(l.point_at(0.5), Point::new(5.0, 10.0));
        assert_eq!(l.point_at(1.0), l.b);
    }
}
