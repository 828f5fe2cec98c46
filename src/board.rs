//! Board main structure

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::adjacency::build_adjacency;
use crate::area::{Area, AreaColor};
use crate::coloring;
use crate::config::BoardConfig;
use crate::error::{MeshError, Result};
use crate::generation::grow_mesh;
use crate::geometry::{Point, Triangle};
use crate::reveal::RevealLayers;
use crate::stars::{generate_stars, Star};

/// A complete generated puzzle board
///
/// Holds the triangle areas (in growth order, the seed first), their
/// adjacency, the reveal layers for the opening animation, and the star
/// field. Geometry never changes after generation; only area colors do.
///
/// # Examples
///
/// ```
/// use four_color_mesh::*;
///
/// let config = BoardConfigBuilder::new()
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let board = Board::generate(config).unwrap();
/// println!("Generated {} areas", board.area_count());
///
/// // The seed triangle is always the first area
/// assert_eq!(board.areas()[0].triangle, board.seed_triangle());
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    /// Configuration used to generate this board
    config: BoardConfig,

    /// All areas (indexed by area ID)
    areas: Vec<Area>,

    /// Breadth-first edge layers for the opening animation
    reveal: RevealLayers,

    /// Background stars
    stars: Vec<Star>,
}

impl Board {
    /// Generate a board from a configuration
    ///
    /// Draws the star field, then grows the mesh, from one `ChaCha8Rng`
    /// seeded with `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` or `DegenerateSeed` if the configuration does
    /// not validate. Growth itself never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use four_color_mesh::*;
    ///
    /// let config = BoardConfigBuilder::new().seed(7).build().unwrap();
    /// let a = Board::generate(config).unwrap();
    /// let b = Board::generate(config).unwrap();
    ///
    /// assert_eq!(a.triangles().collect::<Vec<_>>(), b.triangles().collect::<Vec<_>>());
    /// ```
    pub fn generate(config: BoardConfig) -> Result<Self> {
        config.validate()?;

        let seed_triangle = config.seed_triangle();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let stars = generate_stars(config.star_count, &config.bounds, &mut rng);
        let triangles = grow_mesh(seed_triangle, &config, &mut rng);
        let adjacency = build_adjacency(&triangles);
        let reveal = RevealLayers::build(&seed_triangle, &triangles);

        let areas: Vec<Area> = triangles
            .into_iter()
            .zip(adjacency)
            .enumerate()
            .map(|(id, (triangle, adjacents))| Area::new(id, triangle, adjacents))
            .collect();

        info!(
            seed = config.seed,
            areas = areas.len(),
            layers = reveal.layer_count(),
            "board generated"
        );

        Ok(Self {
            config,
            areas,
            reveal,
            stars,
        })
    }

    /// Get the configuration used to generate this board
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The triangle the mesh grew from
    #[inline]
    pub fn seed_triangle(&self) -> Triangle {
        self.config.seed_triangle()
    }

    /// Get the number of areas on this board
    #[inline]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Get an area by ID
    ///
    /// Returns `None` if the ID is out of bounds.
    #[inline]
    pub fn get_area(&self, id: usize) -> Option<&Area> {
        self.areas.get(id)
    }

    /// Get all areas as a slice
    #[inline]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Triangles in growth order
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.areas.iter().map(|a| a.triangle)
    }

    /// Get adjacent area IDs
    ///
    /// Returns an empty slice if the ID is invalid.
    pub fn get_adjacents(&self, id: usize) -> &[usize] {
        self.areas
            .get(id)
            .map(|a| a.adjacents.as_slice())
            .unwrap_or(&[])
    }

    /// Edge layers for the opening line-drawing animation
    #[inline]
    pub fn reveal_layers(&self) -> &RevealLayers {
        &self.reveal
    }

    /// Background stars
    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Find the area strictly containing a point
    ///
    /// Points on a shared edge or vertex hit no area.
    pub fn area_at(&self, point: Point) -> Option<usize> {
        self.areas.iter().position(|a| a.covers(point))
    }

    /// Advance the color of the area under `point`
    ///
    /// Returns the ID of the area that was recolored, if any.
    pub fn tap(&mut self, point: Point) -> Option<usize> {
        let id = self.area_at(point)?;
        self.areas[id].cycle_color();
        Some(id)
    }

    /// Set or clear an area's color
    ///
    /// # Errors
    ///
    /// Returns `AreaNotFound` if `id` is out of bounds.
    pub fn set_color(&mut self, id: usize, color: Option<AreaColor>) -> Result<()> {
        let area = self.areas.get_mut(id).ok_or(MeshError::AreaNotFound(id))?;
        area.color = color;
        Ok(())
    }

    /// Clear every area's color and status
    pub fn reset_colors(&mut self) {
        for area in &mut self.areas {
            area.color = None;
            area.status = Default::default();
        }
    }

    /// Recompute every area's status; returns whether the board is solved
    pub fn evaluate(&mut self) -> bool {
        coloring::evaluate(&mut self.areas)
    }

    /// Check whether every area is colored and no neighbors share a color
    pub fn is_solved(&self) -> bool {
        coloring::is_solved(&self.areas)
    }

    /// IDs of areas sharing a color with a neighbor
    pub fn conflicting_areas(&self) -> Vec<usize> {
        coloring::conflicting_areas(&self.areas)
    }
}
