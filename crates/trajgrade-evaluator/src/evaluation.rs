//! Full evaluation of a trajectory against a scene.

use serde::{Deserialize, Serialize};
use trajgrade_engine::{EvaluateError, Game, Scene, Trajectory};

use crate::{CollisionEvaluator, Hit, ScoreParams, Scorer, out_of_map};

/// Outcome of grading one trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub hits: Vec<Hit>,
    /// One flag per waypoint.
    pub out_of_map: Vec<bool>,
    pub global_score: f64,
    /// One score per waypoint.
    pub point_scores: Vec<f64>,
}

impl EvaluationResult {
    /// Global score plus the sum of all point scores.
    #[must_use]
    pub fn total_score(&self) -> f64 {
        self.global_score + self.point_scores.iter().sum::<f64>()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Evaluator {
    pub collision: CollisionEvaluator,
    pub scorer: Scorer,
}

impl Evaluator {
    #[must_use]
    pub fn new(collision: CollisionEvaluator, params: ScoreParams) -> Self {
        Self {
            collision,
            scorer: Scorer::new(params),
        }
    }

    #[must_use]
    pub fn evaluate(&self, scene: &Scene, trajectory: &Trajectory) -> EvaluationResult {
        let hits = self.collision.find_hits(scene, trajectory);
        let out_of_map = out_of_map(scene, trajectory);
        let (global_score, point_scores) = self.scorer.score(trajectory, &hits, &out_of_map, scene);
        let result = EvaluationResult {
            hits,
            out_of_map,
            global_score,
            point_scores,
        };
        log::debug!(
            "evaluated {} waypoints: {} hits, {} out of map, total score {}",
            trajectory.len(),
            result.hits.len(),
            result.out_of_map.iter().filter(|&&out| out).count(),
            result.total_score()
        );
        result
    }

    /// Evaluates the trajectory submitted to `game`.
    ///
    /// Fails with [`EvaluateError::InvalidState`] if no trajectory was applied.
    pub fn evaluate_game(&self, game: &Game) -> Result<EvaluationResult, EvaluateError> {
        Ok(self.evaluate(game.scene(), game.answer()?))
    }
}

/// Evaluates with the default hit predicate and score parameters.
#[must_use]
pub fn evaluate(scene: &Scene, trajectory: &Trajectory) -> EvaluationResult {
    Evaluator::default().evaluate(scene, trajectory)
}

/// Evaluates the answer of `game` with the default settings.
pub fn evaluate_game(game: &Game) -> Result<EvaluationResult, EvaluateError> {
    Evaluator::default().evaluate_game(game)
}
