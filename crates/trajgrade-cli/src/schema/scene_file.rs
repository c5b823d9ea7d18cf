use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trajgrade_engine::{ScenarioConfig, ScenarioSeed, Scene};

/// Generated scene together with everything needed to regenerate it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    /// Timestamp when the scene was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Random seed used for obstacle placement
    pub seed: ScenarioSeed,
    /// Config the scene was generated from
    pub config: ScenarioConfig,
    pub scene: Scene,
}
