use serde::{Deserialize, Serialize};
use trajgrade_geometry::{Point, Polygon, square_vertices};

use crate::ConfigurationError;

/// A square obstacle of side `width`, rotated by `angle` full turns around `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObstacleRepr")]
pub struct Obstacle {
    center: Point,
    width: f64,
    angle: f64,
}

#[derive(Deserialize)]
struct ObstacleRepr {
    center: Point,
    width: f64,
    angle: f64,
}

impl TryFrom<ObstacleRepr> for Obstacle {
    type Error = ConfigurationError;

    fn try_from(repr: ObstacleRepr) -> Result<Self, Self::Error> {
        Self::new(repr.center, repr.width, repr.angle)
    }
}

impl Obstacle {
    /// Creates an obstacle, normalizing `angle` into `[0, 1)` with `angle - floor(angle)`.
    pub fn new(center: Point, width: f64, angle: f64) -> Result<Self, ConfigurationError> {
        if !center.is_finite() {
            return Err(ConfigurationError::NonFinitePoint {
                what: "obstacle center",
                point: center,
            });
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigurationError::InvalidObstacleWidth { width });
        }
        if !angle.is_finite() {
            return Err(ConfigurationError::InvalidObstacleAngle { angle });
        }
        let mut angle = angle - angle.floor();
        // `x - floor(x)` rounds up to exactly 1.0 for tiny negative inputs.
        if angle >= 1.0 {
            angle = 0.0;
        }
        Ok(Self {
            center,
            width,
            angle,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Rotation as a fraction of a full counter-clockwise turn, in `[0, 1)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 4] {
        square_vertices(self.center, self.width, self.angle)
    }

    #[must_use]
    pub fn polygon(&self) -> Polygon {
        Polygon::new(self.vertices())
    }
}
