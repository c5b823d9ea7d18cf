use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use trajgrade_geometry::{Point, Polygon, PolygonSet, union_polygons};

use crate::{ConfigurationError, Obstacle};

/// Width and height of the map; the map spans `[0, width] x [0, height]`.
///
/// Serialized as a `[width, height]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

impl From<(f64, f64)> for MapSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

impl From<MapSize> for (f64, f64) {
    fn from(size: MapSize) -> Self {
        (size.width, size.height)
    }
}

impl MapSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `p` lies inside the map or on its border.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Everything about a grading task except the answer.
///
/// A scene is immutable once built. The obstacle polygons and their union are
/// derived on first use and kept for the lifetime of the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SceneRepr")]
pub struct Scene {
    map_size: MapSize,
    self_radius: f64,
    obstacles: Vec<Obstacle>,
    start: Point,
    target: Point,
    #[serde(skip)]
    obstacle_polygons: OnceLock<Vec<Polygon>>,
    #[serde(skip)]
    obstacle_union: OnceLock<PolygonSet>,
}

#[derive(Deserialize)]
struct SceneRepr {
    map_size: MapSize,
    self_radius: f64,
    obstacles: Vec<Obstacle>,
    start: Point,
    target: Point,
}

impl TryFrom<SceneRepr> for Scene {
    type Error = ConfigurationError;

    fn try_from(repr: SceneRepr) -> Result<Self, Self::Error> {
        Self::new(
            repr.map_size,
            repr.self_radius,
            repr.obstacles,
            repr.start,
            repr.target,
        )
    }
}

impl Scene {
    pub fn new(
        map_size: MapSize,
        self_radius: f64,
        obstacles: Vec<Obstacle>,
        start: Point,
        target: Point,
    ) -> Result<Self, ConfigurationError> {
        let MapSize { width, height } = map_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigurationError::InvalidMapSize { width, height });
        }
        if !(self_radius.is_finite() && self_radius > 0.0) {
            return Err(ConfigurationError::InvalidSelfRadius {
                radius: self_radius,
            });
        }
        for (what, point) in [("start", start), ("target", target)] {
            if !point.is_finite() {
                return Err(ConfigurationError::NonFinitePoint { what, point });
            }
        }
        Ok(Self {
            map_size,
            self_radius,
            obstacles,
            start,
            target,
            obstacle_polygons: OnceLock::new(),
            obstacle_union: OnceLock::new(),
        })
    }

    #[must_use]
    pub fn map_size(&self) -> MapSize {
        self.map_size
    }

    /// Radius of the agent following the trajectory.
    #[must_use]
    pub fn self_radius(&self) -> f64 {
        self.self_radius
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// One square polygon per obstacle, in obstacle order.
    #[must_use]
    pub fn obstacle_polygons(&self) -> &[Polygon] {
        self.obstacle_polygons.get_or_init(|| {
            log::debug!("building {} obstacle polygons", self.obstacles.len());
            self.obstacles.iter().map(Obstacle::polygon).collect()
        })
    }

    /// Region covered by all obstacles. Only needed for visualization.
    #[must_use]
    pub fn obstacle_union(&self) -> &PolygonSet {
        self.obstacle_union.get_or_init(|| {
            let union = union_polygons(self.obstacle_polygons());
            log::debug!(
                "merged {} obstacles into {} regions",
                self.obstacles.len(),
                union.len()
            );
            union
        })
    }
}
