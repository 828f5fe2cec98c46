//! Board configuration and builder
//!
//! This module provides configuration types for deterministic board generation.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};
use crate::geometry::{Point, Triangle};

/// Drawable region the mesh grows inside
///
/// Frontier edges may only be extended while both endpoints stay inside the
/// inset rectangle `[margin, width - margin] × [margin, height - bottom_inset]`.
/// The larger bottom inset keeps room free for UI below the board.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Region width
    pub width: f64,
    /// Region height
    pub height: f64,
    /// Inset from the left, right, and top edges for extendable edges
    pub margin: f64,
    /// Inset from the bottom edge for extendable edges
    pub bottom_inset: f64,
    /// Inset new vertices are clamped into
    pub clamp_padding: f64,
}

impl Bounds {
    /// Create bounds of the given size with the default insets
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Center of the region
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Check whether `p` lies inside the inset rectangle for extendable edges
    pub fn allows_extension_from(&self, p: Point) -> bool {
        p.x >= self.margin
            && p.x <= self.width - self.margin
            && p.y >= self.margin
            && p.y <= self.height - self.bottom_inset
    }

    /// Clamp a new vertex into the padded region
    pub fn clamp_vertex(&self, p: Point) -> Point {
        Point::new(
            p.x.max(self.clamp_padding).min(self.width - self.clamp_padding),
            p.y.max(self.clamp_padding).min(self.height - self.clamp_padding),
        )
    }

    /// Default seed triangle: apex at `(w/2, 2h/5)`, base from `(2w/5, 3h/5)` to `(3w/5, 3h/5)`
    pub fn default_seed_triangle(&self) -> Triangle {
        let (w, h) = (self.width, self.height);
        Triangle::new(
            Point::new(w / 2.0, 2.0 * h / 5.0),
            Point::new(2.0 * w / 5.0, 3.0 * h / 5.0),
            Point::new(3.0 * w / 5.0, 3.0 * h / 5.0),
        )
    }

    fn validate(&self) -> Result<()> {
        let values = [
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
            ("bottom_inset", self.bottom_inset),
            ("clamp_padding", self.clamp_padding),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MeshError::InvalidConfig(format!(
                "{} must be finite (got {})",
                name, value
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(MeshError::InvalidConfig(format!(
                "region must have positive size (got {}x{})",
                self.width, self.height
            )));
        }
        if self.margin < 0.0 || self.bottom_inset < 0.0 || self.clamp_padding < 0.0 {
            return Err(MeshError::InvalidConfig(
                "insets must be non-negative".to_string(),
            ));
        }
        if 2.0 * self.margin >= self.width || self.margin + self.bottom_inset >= self.height {
            return Err(MeshError::InvalidConfig(format!(
                "insets leave no room to grow inside {}x{}",
                self.width, self.height
            )));
        }
        if 2.0 * self.clamp_padding >= self.width || 2.0 * self.clamp_padding >= self.height {
            return Err(MeshError::InvalidConfig(format!(
                "clamp padding {} leaves no room inside {}x{}",
                self.clamp_padding, self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            margin: 50.0,
            bottom_inset: 150.0,
            clamp_padding: 5.0,
        }
    }
}

/// Configuration for deterministic board generation
///
/// The same configuration always produces the identical board: star field,
/// triangles (in the same order), adjacency, and reveal layers.
///
/// # Example
///
/// ```rust
/// use four_color_mesh::*;
///
/// let config = BoardConfigBuilder::new()
///     .seed(42)
///     .max_triangles(20)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.max_triangles, 20);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Random seed for the whole board
    pub seed: u64,

    /// Region the mesh grows inside
    pub bounds: Bounds,

    /// Triangle growth starts from; `None` uses [`Bounds::default_seed_triangle`]
    pub seed_triangle: Option<Triangle>,

    /// Hard cap on the number of triangles
    pub max_triangles: usize,

    /// Size at which a stalled mesh is accepted instead of restarted
    pub min_triangles: usize,

    /// Random angles tried per frontier edge before moving to the next one
    pub extension_retries: usize,

    /// Distance from the edge's start point to a newly placed vertex
    pub step_length: f64,

    /// Smallest interior angle allowed in any triangle (radians)
    pub min_angle: f64,

    /// Mean rotation from the frontier edge to the new edge (radians)
    pub angle_mean: f64,

    /// Standard deviation of that rotation (radians)
    pub angle_spread: f64,

    /// Restarts from the seed triangle before a stalled mesh is accepted as-is
    pub max_restarts: usize,

    /// Background stars drawn from the random stream before growth
    pub star_count: usize,
}

impl BoardConfig {
    /// The triangle growth starts from
    pub fn seed_triangle(&self) -> Triangle {
        self.seed_triangle
            .unwrap_or_else(|| self.bounds.default_seed_triangle())
    }

    /// Check every parameter, including the seed triangle
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an unusable region or parameter and
    /// `DegenerateSeed` for a seed triangle with (near) zero area.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;

        if self.max_triangles == 0 {
            return Err(MeshError::InvalidConfig(
                "max_triangles must be at least 1".to_string(),
            ));
        }
        if self.min_triangles > self.max_triangles {
            return Err(MeshError::InvalidConfig(format!(
                "min_triangles ({}) exceeds max_triangles ({})",
                self.min_triangles, self.max_triangles
            )));
        }
        if !(self.step_length.is_finite() && self.step_length > 0.0) {
            return Err(MeshError::InvalidConfig(format!(
                "step_length must be positive (got {})",
                self.step_length
            )));
        }
        if !(self.min_angle.is_finite() && self.min_angle > 0.0 && self.min_angle < PI / 3.0) {
            return Err(MeshError::InvalidConfig(format!(
                "min_angle must be in (0, pi/3) (got {})",
                self.min_angle
            )));
        }
        if !(self.angle_mean.is_finite() && self.angle_spread.is_finite() && self.angle_spread >= 0.0) {
            return Err(MeshError::InvalidConfig(format!(
                "angle distribution must be finite with non-negative spread (got {} +/- {})",
                self.angle_mean, self.angle_spread
            )));
        }

        validate_seed_triangle(&self.seed_triangle())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            bounds: Bounds::default(),
            seed_triangle: None,
            max_triangles: 30,
            min_triangles: 10,
            extension_retries: 3,
            step_length: 100.0,
            min_angle: PI / 6.0,
            angle_mean: PI / 3.0,
            angle_spread: PI / 4.0,
            max_restarts: 1000,
            star_count: 50,
        }
    }
}

fn validate_seed_triangle(seed: &Triangle) -> Result<()> {
    if seed.vertices.iter().any(|v| !v.is_finite()) {
        return Err(MeshError::DegenerateSeed(format!(
            "non-finite vertex in {:?}",
            seed.vertices
        )));
    }
    let area = seed.doubled_signed_area().abs();
    let scale = seed
        .edges()
        .iter()
        .map(|e| e.length_squared())
        .fold(0.0, f64::max);
    if area <= 1e-9 * scale.max(1.0) {
        return Err(MeshError::DegenerateSeed(format!(
            "zero area for {:?}",
            seed.vertices
        )));
    }
    Ok(())
}

/// Builder for creating BoardConfig with validation
///
/// # Example
///
/// ```rust
/// use four_color_mesh::*;
///
/// // Use defaults
/// let config = BoardConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = BoardConfigBuilder::new()
///     .seed(12345)
///     .bounds(Bounds::new(800.0, 600.0))
///     .unwrap()
///     .min_triangles(5)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct BoardConfigBuilder {
    seed: Option<u64>,
    config: BoardConfig,
}

impl BoardConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - bounds: 640x480, margin 50, bottom inset 150, clamp padding 5
    /// - seed triangle: derived from bounds
    /// - max_triangles: 30, min_triangles: 10
    /// - extension_retries: 3, step_length: 100
    /// - min_angle: 30°, new-edge rotation 60° ± 45°
    /// - max_restarts: 1000
    /// - star_count: 50
    pub fn new() -> Self {
        Self {
            seed: None,
            config: BoardConfig::default(),
        }
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the region the mesh grows inside
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a zero-size region or insets that leave no room
    pub fn bounds(mut self, bounds: Bounds) -> Result<Self> {
        bounds.validate()?;
        self.config.bounds = bounds;
        Ok(self)
    }

    /// Grow from a custom seed triangle
    ///
    /// # Errors
    ///
    /// Returns `DegenerateSeed` if the triangle has (near) zero area
    pub fn seed_triangle(mut self, triangle: Triangle) -> Result<Self> {
        validate_seed_triangle(&triangle)?;
        self.config.seed_triangle = Some(triangle);
        Ok(self)
    }

    /// Set the hard cap on triangle count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `max` is zero
    pub fn max_triangles(mut self, max: usize) -> Result<Self> {
        if max == 0 {
            return Err(MeshError::InvalidConfig(
                "max_triangles must be at least 1".to_string(),
            ));
        }
        self.config.max_triangles = max;
        Ok(self)
    }

    /// Set the size at which a stalled mesh is accepted
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `min` exceeds the current `max_triangles`
    pub fn min_triangles(mut self, min: usize) -> Result<Self> {
        if min > self.config.max_triangles {
            return Err(MeshError::InvalidConfig(format!(
                "min_triangles ({}) exceeds max_triangles ({})",
                min, self.config.max_triangles
            )));
        }
        self.config.min_triangles = min;
        Ok(self)
    }

    /// Set how many random angles are tried per frontier edge
    pub fn extension_retries(mut self, retries: usize) -> Self {
        self.config.extension_retries = retries;
        self
    }

    /// Set the distance new vertices are placed from the extended edge
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `length` is not positive
    pub fn step_length(mut self, length: f64) -> Result<Self> {
        if !(length.is_finite() && length > 0.0) {
            return Err(MeshError::InvalidConfig(format!(
                "step_length must be positive (got {})",
                length
            )));
        }
        self.config.step_length = length;
        Ok(self)
    }

    /// Set the smallest interior angle allowed (radians)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `0 < angle < pi/3`
    pub fn min_angle(mut self, angle: f64) -> Result<Self> {
        if !(angle.is_finite() && angle > 0.0 && angle < PI / 3.0) {
            return Err(MeshError::InvalidConfig(format!(
                "min_angle must be in (0, pi/3) (got {})",
                angle
            )));
        }
        self.config.min_angle = angle;
        Ok(self)
    }

    /// Set the restart budget
    pub fn max_restarts(mut self, restarts: usize) -> Self {
        self.config.max_restarts = restarts;
        self
    }

    /// Set the number of background stars
    pub fn star_count(mut self, count: usize) -> Self {
        self.config.star_count = count;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<BoardConfig> {
        let config = BoardConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            ..self.config
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for BoardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = BoardConfigBuilder::new().build().unwrap();
        assert_eq!(config.bounds, Bounds::default());
        assert_eq!(config.max_triangles, 30);
        assert_eq!(config.min_triangles, 10);
        assert_eq!(config.extension_retries, 3);
        assert_eq!(config.step_length, 100.0);
        assert_eq!(config.star_count, 50);
        assert_eq!(config.seed_triangle, None);
    }

    #[test]
    fn test_builder_custom() {
        let config = BoardConfigBuilder::new()
            .seed(7)
            .max_triangles(12)
            .unwrap()
            .min_triangles(4)
            .unwrap()
            .extension_retries(5)
            .star_count(0)
            .build()
            .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.max_triangles, 12);
        assert_eq!(config.min_triangles, 4);
        assert_eq!(config.extension_retries, 5);
        assert_eq!(config.star_count, 0);
    }

    #[test]
    fn test_default_seed_triangle() {
        let t = Bounds::default().default_seed_triangle();
        assert_eq!(t.vertices[0], Point::new(320.0, 192.0));
        assert_eq!(t.vertices[1], Point::new(256.0, 288.0));
        assert_eq!(t.vertices[2], Point::new(384.0, 288.0));
    }

    #[test]
    fn test_extension_window() {
        let bounds = Bounds::default();
        assert!(bounds.allows_extension_from(Point::new(50.0, 50.0)));
        assert!(bounds.allows_extension_from(Point::new(590.0, 330.0)));
        assert!(!bounds.allows_extension_from(Point::new(49.9, 100.0)));
        assert!(!bounds.allows_extension_from(Point::new(300.0, 331.0)));
    }

    #[test]
    fn test_clamp_vertex() {
        let bounds = Bounds::default();
        assert_eq!(bounds.clamp_vertex(Point::new(-20.0, 900.0)), Point::new(5.0, 475.0));
        assert_eq!(bounds.clamp_vertex(Point::new(100.0, 100.0)), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_zero_size_region_rejected() {
        let result = BoardConfigBuilder::new().bounds(Bounds::new(0.0, 480.0));
        assert!(matches!(result, Err(MeshError::InvalidConfig(_))));

        let result = BoardConfigBuilder::new().bounds(Bounds::new(f64::NAN, 480.0));
        assert!(matches!(result, Err(MeshError::InvalidConfig(_))));
    }

    #[test]
    fn test_insets_leaving_no_room_rejected() {
        let result = BoardConfigBuilder::new().bounds(Bounds::new(90.0, 480.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_degenerate_seed_rejected() {
        let collinear = Triangle::new(
            Point::new(100.0, 100.0),
            Point::new(200.0, 200.0),
            Point::new(300.0, 300.0),
        );
        let result = BoardConfigBuilder::new().seed_triangle(collinear);
        assert!(matches!(result, Err(MeshError::DegenerateSeed(_))));

        let collapsed = Triangle::new(Point::ZERO, Point::ZERO, Point::ZERO);
        assert!(BoardConfigBuilder::new().seed_triangle(collapsed).is_err());
    }

    #[test]
    fn test_validate_catches_direct_field_edits() {
        let mut config = BoardConfig::default();
        assert!(config.validate().is_ok());

        config.min_triangles = 40;
        assert!(config.validate().is_err());

        config = BoardConfig::default();
        config.max_triangles = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_greater_than_max_rejected() {
        let result = BoardConfigBuilder::new()
            .max_triangles(5)
            .unwrap()
            .min_triangles(6);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_angles_rejected() {
        assert!(BoardConfigBuilder::new().min_angle(0.0).is_err());
        assert!(BoardConfigBuilder::new().min_angle(PI / 2.0).is_err());
        assert!(BoardConfigBuilder::new().step_length(-1.0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = BoardConfigBuilder::new().seed(12345).build().unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: BoardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
