//! Board areas (mesh faces)
//!
//! Represents one triangle of the board together with its player-assigned
//! color and the indices of the areas it borders.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Triangle};

/// One of the four colors a player can paint an area
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl AreaColor {
    /// All colors in cycling order
    pub const ALL: [AreaColor; 4] = [
        AreaColor::Red,
        AreaColor::Green,
        AreaColor::Blue,
        AreaColor::Yellow,
    ];

    /// Position in cycling order (0..4)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Color at `index` in cycling order
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The color that follows this one, wrapping from Yellow back to Red
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Result of the last coloring check for an area
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AreaStatus {
    /// Not painted yet
    #[default]
    Uncolored,
    /// Painted, and no neighbor shares the color
    Ok,
    /// Painted the same color as at least one neighbor
    Conflict,
}

/// A single triangular area of the board
///
/// Geometry and adjacency are fixed once the board is generated; only the
/// color (and the status derived from it) changes during play.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Area {
    /// Index of this area on its board
    pub id: usize,

    /// The face's geometry
    pub triangle: Triangle,

    /// Player-assigned color, `None` until first painted
    pub color: Option<AreaColor>,

    /// Indices of areas sharing a full edge with this one
    pub adjacents: Vec<usize>,

    /// Outcome of the last [`crate::coloring::evaluate`] pass
    pub status: AreaStatus,
}

impl Area {
    /// Create an uncolored area
    pub fn new(id: usize, triangle: Triangle, adjacents: Vec<usize>) -> Self {
        Self {
            id,
            triangle,
            color: None,
            adjacents,
            status: AreaStatus::Uncolored,
        }
    }

    /// Advance to the next color (uncolored areas become Red) and return it
    pub fn cycle_color(&mut self) -> AreaColor {
        let next = self.color.map_or(AreaColor::Red, AreaColor::next);
        self.color = Some(next);
        next
    }

    /// Check whether `p` falls strictly inside this area
    #[inline]
    pub fn covers(&self, p: Point) -> bool {
        self.triangle.covers(p)
    }

    /// Check if this area borders another
    #[inline]
    pub fn is_adjacent_to(&self, other_id: usize) -> bool {
        self.adjacents.contains(&other_id)
    }

    /// Get the number of bordering areas
    #[inline]
    pub fn adjacent_count(&self) -> usize {
        self.adjacents.len()
    }
}
