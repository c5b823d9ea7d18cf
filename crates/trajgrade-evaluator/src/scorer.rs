//! Turning collision and boundary results into scores.
//!
//! The score has a trajectory-wide part and a per-waypoint part:
//!
//! | term           | applies to                 | default                                       |
//! |----------------|----------------------------|-----------------------------------------------|
//! | collision      | end waypoint of each hit   | `-5.0` per hit                                |
//! | boundary       | each out-of-map waypoint   | `-5.0`                                        |
//! | length         | global                     | `-1.0` once if more than 32 waypoints         |
//! | goal distance  | global                     | `+1.0` if reached, else `-2.0 * d / base`     |
//! | heading        | waypoints `1..n`           | `+0.2` if within 10° of the target direction  |
//!
//! Every hit is charged separately, so a waypoint hit and a segment hit on the
//! same obstacle both count.

use serde::{Deserialize, Serialize};
use trajgrade_engine::{Scene, Trajectory};
use trajgrade_geometry::Point;

use crate::Hit;

/// Vectors shorter than this have no usable direction.
pub const MIN_DIRECTION_LENGTH: f64 = 1e-12;

/// Weights and thresholds of the scoring terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreParams {
    /// Subtracted from the end waypoint of every hit.
    pub collision_penalty: f64,
    /// Subtracted from every waypoint outside the map.
    pub boundary_penalty: f64,
    /// Longest trajectory that is not penalized.
    pub max_waypoints: usize,
    pub length_penalty: f64,
    /// Distance to the target under which the goal counts as reached.
    pub goal_tolerance: f64,
    pub goal_reward: f64,
    /// Weight of the remaining distance, relative to the start-to-target distance.
    pub goal_distance_weight: f64,
    /// Largest heading deviation, in degrees, that still earns the bonus.
    pub heading_tolerance_deg: f64,
    pub heading_bonus: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            collision_penalty: 5.0,
            boundary_penalty: 5.0,
            max_waypoints: 32,
            length_penalty: 1.0,
            goal_tolerance: 1e-3,
            goal_reward: 1.0,
            goal_distance_weight: 2.0,
            heading_tolerance_deg: 10.0,
            heading_bonus: 0.2,
        }
    }
}

/// Angle in radians between two unit vectors.
///
/// Derived from the chord length, which stays accurate for nearly parallel vectors.
fn unit_angle(u: Point, v: Point) -> f64 {
    let half_chord = (u - v).norm() / 2.0;
    2.0 * half_chord.min(1.0).asin()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scorer {
    params: ScoreParams,
}

impl Scorer {
    #[must_use]
    pub fn new(params: ScoreParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    /// Returns `(global_score, point_scores)` with one point score per waypoint.
    ///
    /// `out_of_map` holds one flag per waypoint, as produced by
    /// [`out_of_map`](crate::out_of_map).
    #[must_use]
    pub fn score(
        &self,
        trajectory: &Trajectory,
        hits: &[Hit],
        out_of_map: &[bool],
        scene: &Scene,
    ) -> (f64, Vec<f64>) {
        let params = &self.params;
        let mut global_score = 0.0;
        let mut point_scores = vec![0.0; trajectory.len()];

        for hit in hits {
            point_scores[hit.end_index()] -= params.collision_penalty;
        }

        for (score, &out) in point_scores.iter_mut().zip(out_of_map) {
            if out {
                *score -= params.boundary_penalty;
            }
        }

        if trajectory.len() > params.max_waypoints {
            global_score -= params.length_penalty;
        }

        global_score += self.goal_term(trajectory, scene);

        for (index, bonus) in self.heading_bonuses(trajectory, scene.target()) {
            point_scores[index] += bonus;
        }

        (global_score, point_scores)
    }

    fn goal_term(&self, trajectory: &Trajectory, scene: &Scene) -> f64 {
        let params = &self.params;
        let distance = trajectory.last().distance(scene.target());
        if distance <= params.goal_tolerance {
            return params.goal_reward;
        }
        let base = scene.target().distance(scene.start());
        if base <= MIN_DIRECTION_LENGTH {
            // Start and target coincide; fall back to the absolute distance.
            -params.goal_distance_weight * distance
        } else {
            -params.goal_distance_weight * (distance / base)
        }
    }

    /// Bonus per waypoint `i >= 1` whose incoming segment points at the target.
    ///
    /// The reference direction is fixed once from the first waypoint to the
    /// target. Degenerate segments and a degenerate reference earn nothing.
    fn heading_bonuses<'a>(
        &'a self,
        trajectory: &'a Trajectory,
        target: Point,
    ) -> impl Iterator<Item = (usize, f64)> + 'a {
        let tolerance = self.params.heading_tolerance_deg.to_radians();
        let reference = (target - trajectory.first()).normalized(MIN_DIRECTION_LENGTH);
        trajectory
            .points()
            .windows(2)
            .enumerate()
            .filter_map(move |(i, pair)| {
                let reference = reference?;
                let direction = (pair[1] - pair[0]).normalized(MIN_DIRECTION_LENGTH)?;
                (unit_angle(reference, direction) <= tolerance)
                    .then_some((i + 1, self.params.heading_bonus))
            })
    }
}
