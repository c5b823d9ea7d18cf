use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trajgrade_engine::ScenarioSeed;
use trajgrade_evaluator::{EvaluationResult, HitPredicate, ScoreParams};

/// Evaluation result with the settings that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Timestamp when the evaluation ran (ISO 8601 format)
    pub evaluated_at: DateTime<Utc>,
    /// Seed of the evaluated scene
    pub scene_seed: ScenarioSeed,
    pub hit_predicate: HitPredicate,
    pub params: ScoreParams,
    /// Global score plus all point scores
    pub total_score: f64,
    pub result: EvaluationResult,
}
