//! Procedural triangle-mesh boards for four-color puzzles
//!
//! Grows a non-overlapping planar triangle mesh outward from a seed triangle,
//! derives which faces share an edge, layers the edges for an outward
//! line-drawing reveal, and checks player colorings for conflicts. Output is
//! plain data, suitable for any game engine.
//!
//! # Quick Start
//!
//! ```rust
//! use four_color_mesh::*;
//!
//! // Generate a board
//! let config = BoardConfigBuilder::new()
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut board = Board::generate(config).unwrap();
//!
//! // Paint the area under a tap
//! let tap = board.seed_triangle().centroid();
//! board.tap(tap);
//! board.evaluate();
//!
//! // Generate mesh for rendering
//! let mesh = generate_mesh(&board, &BasicColorMapper);
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration, geometry, and areas

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod generation;
pub mod adjacency;
pub mod reveal;
pub mod area;
pub mod coloring;
pub mod stars;
pub mod board;
pub mod mesh;

// Re-export core types for convenience
pub use error::{MeshError, Result};
pub use config::{BoardConfig, BoardConfigBuilder, Bounds};
pub use geometry::{Line, Point, Triangle};
pub use area::{Area, AreaColor, AreaStatus};
pub use board::Board;
pub use reveal::RevealLayers;
pub use stars::Star;
pub use mesh::{MeshData, generate_mesh, generate_mesh_with_highlight, outline_segments, ColorMapper, BasicColorMapper, CustomColorMapper, FillColor};
