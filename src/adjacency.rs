//! Face adjacency
//!
//! Two triangles are adjacent when they share a full edge. Adjacency is
//! stored as index lists into the triangle sequence, never as references.

use crate::geometry::Triangle;

/// Build the adjacency list of every triangle
///
/// `result[i]` lists, in ascending order, the indices of the triangles that
/// share an edge with `triangles[i]`. The relation is symmetric.
///
/// # Example
///
/// ```
/// use four_color_mesh::adjacency::build_adjacency;
/// use four_color_mesh::geometry::{Point, Triangle};
///
/// let a = Triangle::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0));
/// let b = Triangle::new(Point::new(10.0, 0.0), Point::new(0.0, 10.0), Point::new(10.0, 10.0));
///
/// assert_eq!(build_adjacency(&[a, b]), vec![vec![1], vec![0]]);
/// ```
pub fn build_adjacency(triangles: &[Triangle]) -> Vec<Vec<usize>> {
    triangles
        .iter()
        .enumerate()
        .map(|(i, a)| {
            triangles
                .iter()
                .enumerate()
                .filter(|&(j, b)| i != j && a.shares_edge_with(b))
                .map(|(j, _)| j)
                .collect()
        })
        .collect()
}
