//! Mesh generation for Board
//!
//! Generates engine-agnostic fill and outline buffers from board areas.

mod colors;

pub use colors::{BasicColorMapper, ColorMapper, CustomColorMapper, FillColor};

use crate::area::AreaStatus;
use crate::board::Board;
use crate::geometry::{Line, Point};

/// Engine-agnostic mesh data output
///
/// Fills are one triangle per area with flat per-vertex color; outlines are
/// the three edges of every area as separate segments.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (2D screen coordinates)
    pub positions: Vec<[f32; 2]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
    /// Outline segments as endpoint pairs
    pub outlines: Vec<[[f32; 2]; 2]>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate mesh from a board with color mapping
pub fn generate_mesh<C: ColorMapper>(board: &Board, color_mapper: &C) -> MeshData {
    generate_mesh_with_highlight(board, color_mapper, None)
}

/// Generate mesh, optionally overriding the fill of conflicting areas
///
/// Conflicts are read from each area's stored status, so call
/// [`Board::evaluate`] first.
///
/// # Arguments
/// * `board` - The board to generate mesh for
/// * `color_mapper` - Maps area colors to fills
/// * `conflict_color` - Fill for areas in conflict. If None, conflicts use their normal fill.
pub fn generate_mesh_with_highlight<C: ColorMapper>(
    board: &Board,
    color_mapper: &C,
    conflict_color: Option<FillColor>,
) -> MeshData {
    let mut mesh = MeshData::default();

    for area in board.areas() {
        let color = match conflict_color {
            Some(highlight) if area.status == AreaStatus::Conflict => highlight,
            _ => color_mapper.map_color(area.color),
        };

        let base_idx = mesh.positions.len() as u32;
        for vertex in area.triangle.vertices {
            mesh.positions.push(to_f32(vertex));
            mesh.colors.push(color);
        }
        mesh.indices.extend([base_idx, base_idx + 1, base_idx + 2]);

        mesh.outlines.extend(area.triangle.edges().iter().map(segment));
    }

    mesh
}

/// Flatten a set of lines (e.g. [`crate::RevealLayers::segments_at`]) into outline segments
pub fn outline_segments(lines: &[Line]) -> Vec<[[f32; 2]; 2]> {
    lines.iter().map(segment).collect()
}

fn segment(line: &Line) -> [[f32; 2]; 2] {
    [to_f32(line.a), to_f32(line.b)]
}

fn to_f32(p: Point) -> [f32; 2] {
    [p.x as f32, p.y as f32]
}
