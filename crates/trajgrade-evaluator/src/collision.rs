//! Collision detection between the swept agent and the obstacles.
//!
//! The agent is modelled by a disc around every waypoint plus a flat-ended
//! capsule along every segment. Each shape is tested against every obstacle;
//! all hits are reported, in waypoint order first, then segment order, and
//! obstacle order within each shape.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use trajgrade_engine::{Scene, Trajectory};
use trajgrade_geometry::{Polygon, interiors_intersect, overlaps};

/// One shape of the agent touching one obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    /// `(i, i)` for the disc around waypoint `i`, `(k, k + 1)` for the capsule
    /// of the segment from waypoint `k` to `k + 1`.
    pub span: (usize, usize),
    /// Index of the obstacle in the scene.
    pub obstacle: usize,
}

impl Hit {
    #[must_use]
    pub fn is_waypoint_hit(&self) -> bool {
        self.span.0 == self.span.1
    }

    /// Waypoint the hit is charged to.
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.span.1
    }
}

/// Relation between an agent shape and an obstacle that counts as a hit.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum HitPredicate {
    /// Interiors share area, including when one shape contains the other.
    #[default]
    InteriorsIntersect,
    /// Interiors share area and neither shape contains the other.
    ///
    /// A disc lying entirely inside an obstacle is not a hit under this rule.
    Overlaps,
}

impl HitPredicate {
    #[must_use]
    pub fn test(self, shape: &Polygon, obstacle: &Polygon) -> bool {
        match self {
            Self::InteriorsIntersect => interiors_intersect(shape, obstacle),
            Self::Overlaps => overlaps(shape, obstacle),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvaluator {
    pub predicate: HitPredicate,
    /// Test shapes on the rayon thread pool.
    pub parallel: bool,
}

impl CollisionEvaluator {
    #[must_use]
    pub fn new(predicate: HitPredicate, parallel: bool) -> Self {
        Self {
            predicate,
            parallel,
        }
    }

    /// Returns every hit of `trajectory` against the obstacles of `scene`.
    #[must_use]
    pub fn find_hits(&self, scene: &Scene, trajectory: &Trajectory) -> Vec<Hit> {
        let radius = scene.self_radius();
        let obstacles = scene.obstacle_polygons();
        let buffers = trajectory.waypoint_buffers(radius);
        let capsules = trajectory.segment_capsules(radius);

        let shapes = buffers
            .iter()
            .enumerate()
            .map(|(i, buffer)| ((i, i), buffer))
            .chain(capsules.iter().map(|capsule| (capsule.span(), &capsule.polygon)))
            .collect::<Vec<_>>();

        let shape_hits = |&(span, shape): &((usize, usize), &Polygon)| {
            obstacles
                .iter()
                .enumerate()
                .filter(|(_, obstacle)| self.predicate.test(shape, obstacle))
                .map(|(obstacle, _)| Hit { span, obstacle })
                .collect::<Vec<_>>()
        };
        let per_shape = if self.parallel {
            shapes.par_iter().map(shape_hits).collect::<Vec<_>>()
        } else {
            shapes.iter().map(shape_hits).collect::<Vec<_>>()
        };
        let hits = per_shape.into_iter().flatten().collect::<Vec<_>>();

        for hit in &hits {
            log::trace!("shape {:?} hits obstacle {}", hit.span, hit.obstacle);
        }
        log::debug!(
            "tested {} shapes against {} obstacles: {} hits",
            shapes.len(),
            obstacles.len(),
            hits.len()
        );
        hits
    }
}
