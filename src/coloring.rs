//! Coloring validation
//!
//! An area conflicts when a bordering area carries the same color. Uncolored
//! areas never conflict and never cause a conflict. The board is solved when
//! every area is colored and none conflict.

use crate::area::{Area, AreaStatus};

/// Status of `areas[index]` under the current colors
///
/// # Panics
///
/// Panics if `index` or any adjacency index is out of range.
pub fn area_status(areas: &[Area], index: usize) -> AreaStatus {
    let area = &areas[index];
    match area.color {
        None => AreaStatus::Uncolored,
        Some(color) => {
            if area.adjacents.iter().any(|&j| areas[j].color == Some(color)) {
                AreaStatus::Conflict
            } else {
                AreaStatus::Ok
            }
        }
    }
}

/// Recompute every area's status and report whether the board is solved
pub fn evaluate(areas: &mut [Area]) -> bool {
    let statuses: Vec<AreaStatus> = (0..areas.len()).map(|i| area_status(areas, i)).collect();
    for (area, status) in areas.iter_mut().zip(statuses) {
        area.status = status;
    }
    areas.iter().all(|a| a.status == AreaStatus::Ok)
}

/// Check whether every area is colored and none conflict
pub fn is_solved(areas: &[Area]) -> bool {
    (0..areas.len()).all(|i| area_status(areas, i) == AreaStatus::Ok)
}

/// Indices of the areas currently in conflict
pub fn conflicting_areas(areas: &[Area]) -> Vec<usize> {
    (0..areas.len())
        .filter(|&i| area_status(areas, i) == AreaStatus::Conflict)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::build_adjacency;
    use crate::area::AreaColor;
    use crate::geometry::{Point, Triangle};

    fn areas(triangles: &[Triangle]) -> Vec<Area> {
        triangles
            .iter()
            .zip(build_adjacency(triangles))
            .enumerate()
            .map(|(i, (t, adj))| Area::new(i, *t, adj))
            .collect()
    }

    fn pair() -> Vec<Area> {
        let a = Triangle::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        let b = Triangle::new(Point::new(10.0, 0.0), Point::new(0.0, 10.0), Point::new(10.0, 10.0));
        areas(&[a, b])
    }

    #[test]
    fn test_same_color_conflicts() {
        for color in AreaColor::ALL {
            let mut board = pair();
            board[0].color = Some(color);
            board[1].color = Some(color);

            assert!(!evaluate(&mut board));
            assert_eq!(board[0].status, AreaStatus::Conflict);
            assert_eq!(board[1].status, AreaStatus::Conflict);
            assert_eq!(conflicting_areas(&board), vec![0, 1]);
        }
    }

    #[test]
    fn test_different_colors_solve() {
        let mut board = pair();
        board[0].color = Some(AreaColor::Red);
        board[1].color = Some(AreaColor::Blue);

        assert!(evaluate(&mut board));
        assert!(is_solved(&board));
        assert_eq!(board[0].status, AreaStatus::Ok);
        assert_eq!(board[1].status, AreaStatus::Ok);
        assert!(conflicting_areas(&board).is_empty());
    }

    #[test]
    fn test_uncolored_never_conflicts() {
        let mut board = pair();
        board[0].color = Some(AreaColor::Green);

        assert!(!evaluate(&mut board));
        assert_eq!(board[0].status, AreaStatus::Ok);
        assert_eq!(board[1].status, AreaStatus::Uncolored);
        assert!(conflicting_areas(&board).is_empty());
        assert!(!is_solved(&board));
    }

    #[test]
    fn test_vertex_neighbors_may_share_color() {
        let a = Triangle::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        let b = Triangle::new(Point::new(10.0, 0.0), Point::new(20.0, 0.0), Point::new(20.0, 10.0));
        let mut board = areas(&[a, b]);
        board[0].color = Some(AreaColor::Yellow);
        board[1].color = Some(AreaColor::Yellow);

        assert!(evaluate(&mut board));
    }

    #[test]
    fn test_recoloring_clears_conflict() {
        let mut board = pair();
        board[0].color = Some(AreaColor::Red);
        board[1].color = Some(AreaColor::Red);
        assert!(!evaluate(&mut board));

        board[1].cycle_color();
        assert!(evaluate(&mut board));
        assert_eq!(board[1].color, Some(AreaColor::Green));
    }
}
