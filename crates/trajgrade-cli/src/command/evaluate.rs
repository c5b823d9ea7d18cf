use std::path::PathBuf;

use chrono::Utc;
use trajgrade_engine::Game;
use trajgrade_evaluator::{CollisionEvaluator, Evaluator, HitPredicate, ScoreParams};

use crate::{
    schema::report::EvaluationReport,
    util::{self, Output},
};

/// Which relation between an agent shape and an obstacle counts as a hit
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum HitRule {
    /// Any shared interior, including a shape inside an obstacle
    #[default]
    Intersect,
    /// Partial overlap only; shapes fully inside an obstacle are not hits
    Overlap,
}

impl From<HitRule> for HitPredicate {
    fn from(rule: HitRule) -> Self {
        match rule {
            HitRule::Intersect => HitPredicate::InteriorsIntersect,
            HitRule::Overlap => HitPredicate::Overlaps,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Scene file written by `generate-scene`
    #[arg(long)]
    scene: PathBuf,
    /// Trajectory JSON file holding a list of `[x, y]` pairs
    #[arg(long)]
    trajectory: PathBuf,
    /// Score parameter JSON file; missing fields take their default values
    #[arg(long)]
    params: Option<PathBuf>,
    /// Hit rule: `intersect` or `overlap`
    #[arg(long, default_value = "intersect")]
    hit_rule: HitRule,
    /// Test collisions on all available cores
    #[arg(long)]
    parallel: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        scene,
        trajectory,
        params,
        hit_rule,
        parallel,
        output,
    } = arg;

    eprintln!("Loading scene from {}...", scene.display());
    let scene_file = util::read_scene_file(scene)?;
    eprintln!(
        "Loaded scene with {} obstacles (seed {})",
        scene_file.scene.obstacles().len(),
        scene_file.seed
    );
    let trajectory = util::read_trajectory_file(trajectory)?;
    eprintln!("Loaded trajectory with {} waypoints", trajectory.len());
    let params = match params {
        Some(path) => util::read_score_params_file(path)?,
        None => ScoreParams::default(),
    };

    let hit_predicate = HitPredicate::from(*hit_rule);
    let evaluator = Evaluator::new(
        CollisionEvaluator::new(hit_predicate, *parallel),
        params.clone(),
    );
    let mut game = Game::new(scene_file.scene);
    game.apply_answer(trajectory);
    let result = evaluator.evaluate_game(&game)?;
    eprintln!(
        "{} hits, global score {:.3}, total score {:.3}",
        result.hits.len(),
        result.global_score,
        result.total_score()
    );

    let report = EvaluationReport {
        evaluated_at: Utc::now(),
        scene_seed: scene_file.seed,
        hit_predicate,
        params,
        total_score: result.total_score(),
        result,
    };
    Output::save_json(&report, output.clone())?;
    Ok(())
}
